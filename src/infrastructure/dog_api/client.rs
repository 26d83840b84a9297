use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use reqwest::{Client as ReqwestClient, Url};
use std::time::Duration;
use tracing::{debug, instrument, warn};

use super::error::DogApiError;
use super::types::BreedListResponse;
use crate::domain::errors::{BreedNotFound, BreedResult};
use crate::domain::models::DogApiConfig;
use crate::domain::ports::BreedSource;

/// Configuration for the dog.ceo HTTP client
#[derive(Debug, Clone)]
pub struct DogApiClientConfig {
    /// Base URL for the API, e.g. `https://dog.ceo/api`
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for DogApiClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://dog.ceo/api".to_string(),
            timeout_secs: 30,
        }
    }
}

impl From<&DogApiConfig> for DogApiClientConfig {
    fn from(config: &DogApiConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            timeout_secs: config.timeout_secs,
        }
    }
}

/// `BreedSource` backed by the dog.ceo REST API
///
/// Issues `GET {base_url}/breed/{breed}/list`. Stateless apart from the
/// pooled HTTP client, so it is safe to share behind an `Arc`.
pub struct DogApiBreedSource {
    /// Reusable HTTP client with connection pooling
    http_client: ReqwestClient,

    base_url: Url,
}

impl DogApiBreedSource {
    /// Create a client for the public dog.ceo API
    pub fn new() -> Result<Self> {
        Self::with_config(DogApiClientConfig::default())
    }

    /// Create a client with custom configuration
    ///
    /// # Returns
    /// * `Ok(DogApiBreedSource)` - Successfully created client
    /// * `Err(anyhow::Error)` - Base URL is unusable or the HTTP client failed to build
    pub fn with_config(config: DogApiClientConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)
            .with_context(|| format!("Invalid dog API base URL: {}", config.base_url))?;
        if base_url.cannot_be_a_base() {
            bail!("Dog API base URL cannot carry a path: {}", config.base_url);
        }

        let http_client = ReqwestClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http_client,
            base_url,
        })
    }

    /// URL listing the sub-breeds of `breed`
    ///
    /// The breed becomes a single percent-encoded path segment. `.` and `..`
    /// are rejected since URL normalisation would drop them from the path.
    pub fn breed_list_url(&self, breed: &str) -> Result<Url, DogApiError> {
        if matches!(breed, "." | "..") {
            return Err(DogApiError::InvalidBreed(breed.to_string()));
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| DogApiError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(["breed", breed, "list"]);
        Ok(url)
    }

    /// Make the HTTP request and decode the envelope
    #[instrument(skip(self), level = "debug")]
    async fn send_request(&self, breed: &str) -> Result<Vec<String>, DogApiError> {
        let url = self.breed_list_url(breed)?;
        debug!(%url, "requesting sub-breeds");

        let response = self.http_client.get(url).send().await?;
        let http_status = response.status();
        let body = response.text().await?;

        // dog.ceo reports unknown breeds as a 404 with the usual JSON envelope
        let envelope: BreedListResponse = serde_json::from_str(&body)?;
        if !envelope.is_success() {
            return Err(DogApiError::ApiStatus {
                http_status,
                message: envelope.message_text(),
                status: envelope.status,
            });
        }

        envelope.into_sub_breeds()
    }
}

#[async_trait]
impl BreedSource for DogApiBreedSource {
    async fn get_sub_breeds(&self, breed: &str) -> BreedResult<Vec<String>> {
        self.send_request(breed).await.map_err(|err| {
            if err.is_unknown_breed() {
                debug!(breed, error = %err, "breed not known to dog API");
            } else {
                warn!(breed, error = %err, "dog API lookup failed");
            }
            BreedNotFound::new(breed)
        })
    }
}
