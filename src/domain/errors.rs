//! Domain errors for breed lookups.

use thiserror::Error;

/// The single failure kind of a breed lookup.
///
/// Sources collapse every cause (unknown breed, transport failure, malformed
/// payload) into this error. Callers cannot and should not tell them apart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Breed not found: {0}")]
pub struct BreedNotFound(pub String);

impl BreedNotFound {
    /// Create an error for the given breed name.
    pub fn new(breed: impl Into<String>) -> Self {
        Self(breed.into())
    }

    /// The breed name whose lookup failed.
    pub fn breed(&self) -> &str {
        &self.0
    }
}

/// Result alias for breed lookups.
pub type BreedResult<T> = Result<T, BreedNotFound>;
