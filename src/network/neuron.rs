//! An artificial neuron holding scalar state and its outgoing connections.

use crate::network::connection::Connection;

/// A neuron in the network's arena.
///
/// The neuron accumulates weighted input during a forward pass, applies its
/// layer's activation function to produce an activation, and carries the
/// backpropagated error signal ("delta") of the most recent backward pass.
#[derive(Debug, Clone, Default)]
pub struct Neuron {
    /// Running sum of incoming weighted signals, reset each forward pass.
    pub(crate) input: f64,
    /// Output after applying the layer's activation function.
    pub(crate) activation: f64,
    /// Backpropagated error signal, scaled by the activation derivative.
    pub(crate) delta: f64,
    /// Outgoing connections, in the order they were wired.
    pub(crate) connections: Vec<Connection>,
}

impl Neuron {
    /// Adds the specified value to this neuron's input.
    pub(crate) fn feed(&mut self, value: f64) {
        self.input += value;
    }

    /// Wires a new outgoing connection with the given initial weight.
    pub(crate) fn connect_to(&mut self, target: usize, weight: f64) {
        self.connections.push(Connection::new(target, weight));
    }

    /// Clears input and activation before a new forward pass.
    ///
    /// The delta is intentionally left untouched; the next backward pass
    /// overwrites it.
    pub(crate) fn reset(&mut self) {
        self.input = 0.0;
        self.activation = 0.0;
    }
}
