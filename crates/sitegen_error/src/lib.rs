//! Error types for the Sitegen generation endpoint.

mod config;

pub use config::ConfigError;
