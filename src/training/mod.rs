//! Training utilities for the feedforward network.
//!
//! This module provides the configuration and result types used by
//! [`FeedForwardNetwork::train_batch`](crate::network::FeedForwardNetwork::train_batch).
//! The training loops themselves live on the network, since every phase of
//! the protocol mutates neuron and connection state in place.

mod config;
mod report;

pub use config::BatchTrainingConfig;
pub use report::BatchTrainingReport;
