//! The layer type shared by the input, hidden and output stages of a network.

use crate::layers::Activation;
use std::ops::Range;

/// Distinguishes how a layer participates in backpropagation.
///
/// A hidden-kind layer derives its error from the weighted deltas of the
/// downstream layer; the output layer compares its activations against a
/// supervised target vector. The input layer is a hidden-kind layer with the
/// identity activation and is never backpropagated into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerKind {
    /// Error is aggregated from downstream connections.
    Hidden,
    /// Error is the residual against a supervised target vector.
    Output,
}

/// An ordered slice of the network's neuron arena sharing one activation
/// function.
///
/// Neuron order within a layer is significant: it is the positional index
/// used to match input and output vectors.
#[derive(Debug, Clone)]
pub struct Layer {
    pub(crate) kind: LayerKind,
    pub(crate) activation: Activation,
    /// Arena indices of the neurons belonging to this layer.
    pub(crate) neurons: Range<usize>,
}

impl Layer {
    pub(crate) fn new(kind: LayerKind, activation: Activation, neurons: Range<usize>) -> Self {
        Self {
            kind,
            activation,
            neurons,
        }
    }

    /// Returns the number of neurons in this layer.
    pub fn size(&self) -> usize {
        self.neurons.len()
    }

    /// Returns the activation function shared by this layer's neurons.
    pub fn activation(&self) -> Activation {
        self.activation
    }

    /// Returns how this layer participates in backpropagation.
    pub fn kind(&self) -> LayerKind {
        self.kind
    }
}
