//! The neuron arena and the feedforward network built on top of it.
//!
//! All neurons of a network live in one indexed collection; connections
//! address their target neuron by index, which keeps the cross-layer edges
//! non-owning and the graph free of reference cycles.

mod connection;
pub mod feed_forward;
mod neuron;

pub use feed_forward::{FeedForwardNetwork, NetworkOptions, DEFAULT_SEED};
