//! Memoizing wrapper for BreedSource.
//!
//! Successful lookups are cached for the lifetime of the wrapper. Failures
//! are never cached, so a breed that failed is delegated again on the next
//! call. Every delegation to the wrapped source is counted.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

use crate::domain::errors::BreedResult;
use crate::domain::ports::BreedSource;

/// Caching breed source decorator.
///
/// Entries never expire. The first successful result for a breed is
/// authoritative, whatever the wrapped source would return later.
pub struct CachingBreedSource<S: BreedSource> {
    inner: Arc<S>,
    /// Breed name -> sub-breeds, successful lookups only.
    cache: Mutex<HashMap<String, Vec<String>>>,
    /// Per-breed guards for misses currently being fetched.
    in_flight: Mutex<HashMap<String, Arc<Mutex<()>>>>,
    calls_made: AtomicU64,
}

impl<S: BreedSource> CachingBreedSource<S> {
    /// Wrap `inner` with an empty cache and a zeroed call counter.
    pub fn new(inner: Arc<S>) -> Self {
        Self {
            inner,
            cache: Mutex::new(HashMap::new()),
            in_flight: Mutex::new(HashMap::new()),
            calls_made: AtomicU64::new(0),
        }
    }

    /// Number of delegations made to the wrapped source since construction.
    ///
    /// Cache hits are not counted; failed delegations are.
    pub fn calls_made(&self) -> u64 {
        self.calls_made.load(Ordering::SeqCst)
    }

    /// Whether a successful result for `breed` is cached.
    pub async fn is_cached(&self, breed: &str) -> bool {
        self.cache.lock().await.contains_key(breed)
    }

    /// Number of cached breeds.
    pub async fn cached_len(&self) -> usize {
        self.cache.lock().await.len()
    }

    async fn cached(&self, breed: &str) -> Option<Vec<String>> {
        self.cache.lock().await.get(breed).cloned()
    }

    async fn breed_guard(&self, breed: &str) -> Arc<Mutex<()>> {
        let mut in_flight = self.in_flight.lock().await;
        Arc::clone(in_flight.entry(breed.to_string()).or_default())
    }

    /// Drop the guard entry once no other caller holds it.
    async fn release_breed_guard(&self, breed: &str, guard: Arc<Mutex<()>>) {
        let mut in_flight = self.in_flight.lock().await;
        let unused = in_flight
            .get(breed)
            .is_some_and(|entry| Arc::ptr_eq(entry, &guard) && Arc::strong_count(&guard) == 2);
        if unused {
            in_flight.remove(breed);
        }
    }

    /// Delegate a miss while holding the breed's guard.
    ///
    /// Rechecks the cache first: a caller that waited on the guard finds the
    /// winner's result there and does not delegate.
    async fn fetch_exclusive(&self, breed: &str, guard: &Mutex<()>) -> BreedResult<Vec<String>> {
        let _held = guard.lock().await;

        if let Some(cached) = self.cached(breed).await {
            debug!(breed, "sub-breed cache filled while waiting");
            return Ok(cached);
        }

        let calls_made = self.calls_made.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(breed, calls_made, "sub-breed cache miss, delegating");

        match self.inner.get_sub_breeds(breed).await {
            Ok(sub_breeds) => {
                self.cache
                    .lock()
                    .await
                    .insert(breed.to_string(), sub_breeds.clone());
                Ok(sub_breeds)
            }
            Err(err) => {
                debug!(breed, error = %err, "delegated lookup failed, not caching");
                Err(err)
            }
        }
    }
}

#[async_trait]
impl<S: BreedSource + 'static> BreedSource for CachingBreedSource<S> {
    async fn get_sub_breeds(&self, breed: &str) -> BreedResult<Vec<String>> {
        if let Some(cached) = self.cached(breed).await {
            debug!(breed, "sub-breed cache hit");
            return Ok(cached);
        }

        // Misses for one breed queue on its guard; other breeds proceed.
        let guard = self.breed_guard(breed).await;
        let result = self.fetch_exclusive(breed, &guard).await;
        self.release_breed_guard(breed, guard).await;
        result
    }
}
