use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::DogApiError;

/// Status value the API uses for a successful answer
pub const STATUS_SUCCESS: &str = "success";

/// Envelope returned by `GET /breed/{breed}/list`
///
/// On success `message` is an array of sub-breed names. On error it is a
/// human-readable string and `code` carries the HTTP status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreedListResponse {
    /// "success" or "error"
    #[serde(default)]
    pub status: String,
    /// Sub-breed array or error text
    #[serde(default)]
    pub message: Value,
    /// HTTP status echoed in error bodies
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
}

impl BreedListResponse {
    /// Whether the API reported success
    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }

    /// Extract the sub-breed names from a successful response.
    pub fn into_sub_breeds(self) -> Result<Vec<String>, DogApiError> {
        match self.message {
            Value::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    Value::String(name) => Ok(name),
                    other => Err(DogApiError::UnexpectedPayload(other.to_string())),
                })
                .collect(),
            other => Err(DogApiError::UnexpectedPayload(other.to_string())),
        }
    }

    /// Message text for logging a non-success response.
    pub fn message_text(&self) -> String {
        match &self.message {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        }
    }
}
