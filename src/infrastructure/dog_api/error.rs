use reqwest::StatusCode;
use thiserror::Error;

/// Reasons a dog.ceo lookup can fail.
///
/// These never cross the `BreedSource` boundary. They are logged and then
/// collapsed into `BreedNotFound`.
#[derive(Error, Debug)]
pub enum DogApiError {
    /// Could not build the request URL from the base URL and breed
    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),

    /// Breed cannot be expressed as a path segment (`.` or `..`)
    #[error("Breed name cannot be requested: {0:?}")]
    InvalidBreed(String),

    /// Network or connection error
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    /// Body was not the expected JSON envelope
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// API answered with a status other than "success"
    #[error("API returned status '{status}' (HTTP {http_status}): {message}")]
    ApiStatus {
        /// HTTP status of the response
        http_status: StatusCode,
        /// `status` field of the envelope
        status: String,
        /// Error text from the envelope
        message: String,
    },

    /// API answered "success" but `message` was not a list of names
    #[error("Unexpected message payload: {0}")]
    UnexpectedPayload(String),
}

impl DogApiError {
    /// Returns true if the breed is known not to exist
    pub const fn is_unknown_breed(&self) -> bool {
        matches!(self, Self::ApiStatus { .. } | Self::InvalidBreed(_))
    }
}
