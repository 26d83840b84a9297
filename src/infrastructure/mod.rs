//! Infrastructure layer module
//!
//! This module contains infrastructure adapters and external integrations:
//! - dog.ceo API client (reqwest)
//! - Configuration management
//! - Logging infrastructure
//!
//! Infrastructure implementations satisfy the port traits defined in the domain layer.

pub mod config;
pub mod dog_api;
pub mod logging;
