//! # ffnet
//!
//! A Rust library for building, training, and persisting small feedforward
//! neural networks.
//!
//! Networks are fully connected, layered graphs of scalar neurons trained by
//! plain gradient descent. No tensor or matrix machinery is involved; every
//! value that flows through the network is a single `f64`, which keeps the
//! whole forward and backward pass easy to follow neuron by neuron.
//!
//! ## Features
//!
//! - **Deterministic by default**: weight initialization draws from a seeded
//!   generator, so the same topology and seed always produce the same
//!   network.
//! - **Online and batch training**: single examples update weights
//!   immediately; batch runs accumulate updates and release them once per
//!   iteration.
//! - **JSON persistence**: a trained network serializes to a JSON document
//!   and restores with identical weights and predictions.
//!
//! ## Example
//!
//! ```
//! use ffnet::prelude::*;
//!
//! # fn main() -> Result<(), NetworkError> {
//! // Two inputs, one hidden layer of three neurons, one output.
//! let mut network = FeedForwardNetwork::new(
//!     2,
//!     &[3],
//!     1,
//!     NetworkOptions::new().output_activation(Activation::Logistic),
//! );
//!
//! // Nudge the network toward an example, then run inference.
//! network.train(&[0.0, 1.0], &[1.0])?;
//! let output = network.predict(&[0.0, 1.0])?;
//! assert_eq!(output.len(), 1);
//!
//! // Persist and restore.
//! let json = network.to_json()?;
//! let restored = FeedForwardNetwork::from_json(&json)?;
//! assert_eq!(restored.num_layers(), 3);
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod export;
pub mod layers;
pub mod network;
pub mod prng;
pub mod training;

// Re-exports for convenience
pub use errors::NetworkError;
pub use export::NetworkExport;
pub use layers::{Activation, Layer, LayerKind};
pub use network::{FeedForwardNetwork, NetworkOptions, DEFAULT_SEED};
pub use prng::Prng;
pub use training::{BatchTrainingConfig, BatchTrainingReport};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::errors::NetworkError;
    pub use crate::layers::Activation;
    pub use crate::network::{FeedForwardNetwork, NetworkOptions, DEFAULT_SEED};
    pub use crate::training::{BatchTrainingConfig, BatchTrainingReport};
}
