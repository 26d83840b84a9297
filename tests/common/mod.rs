//! Common test utilities for integration tests
//!
//! Provides shared fakes and helpers used across multiple integration test files.

use async_trait::async_trait;
use breedcache::{BreedNotFound, BreedResult, BreedSource};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Setup test logging
///
/// Initializes tracing subscriber for test output.
/// Call this at the beginning of tests that need logging.
#[allow(dead_code)]
pub fn setup_test_logging() {
    use tracing_subscriber::fmt;

    let _ = fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// In-memory breed source that records how often it was asked.
#[allow(dead_code)]
#[derive(Default)]
pub struct InMemoryBreedSource {
    breeds: HashMap<String, Vec<String>>,
    hits: AtomicUsize,
}

#[allow(dead_code)]
impl InMemoryBreedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_breed(mut self, breed: &str, sub_breeds: &[&str]) -> Self {
        self.breeds.insert(
            breed.to_string(),
            sub_breeds.iter().map(|s| (*s).to_string()).collect(),
        );
        self
    }

    pub fn knows(&self, breed: &str) -> bool {
        self.breeds.contains_key(breed)
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BreedSource for InMemoryBreedSource {
    async fn get_sub_breeds(&self, breed: &str) -> BreedResult<Vec<String>> {
        self.hits.fetch_add(1, Ordering::SeqCst);
        self.breeds
            .get(breed)
            .cloned()
            .ok_or_else(|| BreedNotFound::new(breed))
    }
}

/// Body dog.ceo returns for a known breed
#[allow(dead_code)]
pub fn success_body(sub_breeds: &[&str]) -> String {
    serde_json::json!({
        "message": sub_breeds,
        "status": "success"
    })
    .to_string()
}

/// Body dog.ceo returns for an unknown breed
#[allow(dead_code)]
pub fn not_found_body() -> String {
    serde_json::json!({
        "status": "error",
        "message": "Breed not found (main breed does not exist)",
        "code": 404
    })
    .to_string()
}
