//! Error types for the crate.

mod network_error;

pub use network_error::NetworkError;
