//! A weighted, directed edge between two neurons.

/// A connection from one neuron to another neuron in a later layer.
///
/// The target is identified by its index into the network's neuron arena
/// rather than by reference; the target neuron is owned by its layer, not by
/// the connection. Connections only ever point at strictly later arena
/// slots, so the graph can never form a cycle.
#[derive(Debug, Clone)]
pub struct Connection {
    /// Arena index of the neuron this connection feeds into.
    pub(crate) target: usize,
    /// The current weight of this connection.
    pub(crate) weight: f64,
    /// Accumulates weight updates that are deferred until released.
    pending: f64,
}

impl Connection {
    pub(crate) fn new(target: usize, weight: f64) -> Self {
        Self {
            target,
            weight,
            pending: 0.0,
        }
    }

    /// Increases the weight of this connection by the specified value, either
    /// immediately or deferred until the next release.
    pub(crate) fn update_weight(&mut self, addend: f64, immediate: bool) {
        if immediate {
            self.weight += addend;
        } else {
            self.pending += addend;
        }
    }

    /// Folds all deferred weight updates into the weight and resets the
    /// accumulator.
    pub(crate) fn release_pending(&mut self) {
        self.weight += self.pending;
        self.pending = 0.0;
    }
}
