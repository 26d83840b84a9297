//! In-memory caching layer for breed lookups.
//!
//! Wraps a `BreedSource` as a decorator that memoizes successful lookups
//! and counts delegations to the wrapped source.

pub mod caching_breed_source;

pub use caching_breed_source::CachingBreedSource;
