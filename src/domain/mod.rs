//! Domain layer for breed lookups
//!
//! This module contains the breed source port, the domain error, and the
//! configuration models.

pub mod errors;
pub mod models;
pub mod ports;

// Re-export error types for convenient access
pub use errors::{BreedNotFound, BreedResult};
