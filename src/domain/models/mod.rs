//! Domain models

pub mod config;

pub use config::{Config, DogApiConfig, LoggingConfig};
