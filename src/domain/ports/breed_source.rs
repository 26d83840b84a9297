use async_trait::async_trait;

use crate::domain::errors::BreedResult;

/// Source of sub-breed listings.
///
/// Implementations return the complete, ordered list of sub-breed names for
/// a breed in one call. Every failure is reported as
/// [`BreedNotFound`](crate::domain::errors::BreedNotFound).
#[async_trait]
pub trait BreedSource: Send + Sync {
    /// Fetch the sub-breeds of `breed`
    ///
    /// # Arguments
    /// * `breed` - Case-sensitive breed name, passed through unmodified
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - Sub-breed names in source order (possibly empty)
    /// * `Err(BreedNotFound)` - The breed is unknown or the lookup failed
    async fn get_sub_breeds(&self, breed: &str) -> BreedResult<Vec<String>>;
}
