//! Neural network layer building blocks.
//!
//! This module contains the activation functions and the layer type used by
//! the feedforward network.

pub mod activation;
pub mod layer;

pub use activation::Activation;
pub use layer::{Layer, LayerKind};
