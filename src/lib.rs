//! Breedcache - dog sub-breed lookups with a memoizing source
//!
//! Breedcache resolves the sub-breeds of a dog breed through the dog.ceo API
//! and wraps the lookup in a caching decorator that remembers successful
//! answers and counts how often it had to go to the network.
//!
//! # Architecture
//!
//! This crate follows Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): The `BreedSource` port, the `BreedNotFound` error, config models
//! - **Adapters** (`adapters`): `CachingBreedSource`, a decorator over any `BreedSource`
//! - **Infrastructure Layer** (`infrastructure`): dog.ceo HTTP client, config loading, logging
//! - **CLI Layer** (`cli`): Command-line interface
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use breedcache::{BreedSource, CachingBreedSource, DogApiBreedSource};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let cache = CachingBreedSource::new(Arc::new(DogApiBreedSource::new()?));
//!     let hounds = cache.get_sub_breeds("hound").await?;
//!     let again = cache.get_sub_breeds("hound").await?;
//!     assert_eq!(hounds, again);
//!     assert_eq!(cache.calls_made(), 1);
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use adapters::cache::CachingBreedSource;
pub use domain::errors::{BreedNotFound, BreedResult};
pub use domain::models::{Config, DogApiConfig, LoggingConfig};
pub use domain::ports::BreedSource;
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use infrastructure::dog_api::{DogApiBreedSource, DogApiClientConfig};
