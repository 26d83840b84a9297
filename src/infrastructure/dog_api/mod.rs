//! dog.ceo API integration
//!
//! `DogApiBreedSource` implements `BreedSource` over HTTP. Every failure,
//! including transport and decoding errors, surfaces as `BreedNotFound`.

pub mod client;
pub mod error;
pub mod types;

pub use client::{DogApiBreedSource, DogApiClientConfig};
pub use error::DogApiError;
pub use types::BreedListResponse;
