//! Install, activate, and fetch handling.
//!
//! The functions here are generic over [`CacheStore`] and [`Network`] so the
//! strategy runs the same against browser `CacheStorage` and the in-memory
//! fakes used in tests.
//!
//! INVARIANTS
//! ==========
//! - Install is all-or-nothing: the store's `add_all` must not leave a
//!   partially populated cache behind.
//! - After [`activate`] succeeds only `config.cache_name` may remain.
//! - Cached responses are returned verbatim; there is no expiry check.

#![allow(async_fn_in_trait)]

#[cfg(test)]
#[path = "lifecycle_test.rs"]
mod lifecycle_test;

use futures::future::join_all;

use crate::config::WorkerConfig;
use crate::error::WorkerError;

/// Named, versioned response caches.
pub trait CacheStore {
    type Request;
    type Response;

    /// Names of every cache currently in storage.
    async fn cache_names(&self) -> Result<Vec<String>, WorkerError>;

    /// Delete the named cache. Returns `false` if it did not exist.
    async fn delete_cache(&self, name: &str) -> Result<bool, WorkerError>;

    /// Open (creating if needed) `cache_name` and fetch-and-store every URL.
    async fn add_all(&self, cache_name: &str, urls: &[String]) -> Result<(), WorkerError>;

    /// Find a stored response for `request` in any cache.
    async fn lookup(&self, request: &Self::Request) -> Result<Option<Self::Response>, WorkerError>;
}

/// Forwarding of a request to the network.
pub trait Network {
    type Request;
    type Response;

    async fn fetch(&self, request: &Self::Request) -> Result<Self::Response, WorkerError>;
}

/// Where a fetch answer came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Served<R> {
    Cache(R),
    Network(R),
    /// Both cache and network missed; the caller synthesizes the offline response.
    Offline,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivateReport {
    pub kept: Option<String>,
    pub deleted: Vec<String>,
}

/// Populate the current cache with the pre-cache list.
///
/// # Errors
///
/// Returns [`WorkerError::Precache`] if any URL fails to load.
pub async fn install<C: CacheStore>(store: &C, config: &WorkerConfig) -> Result<(), WorkerError> {
    log::info!("installing {} ({} urls)", config.cache_name, config.precache_urls.len());
    store
        .add_all(&config.cache_name, &config.precache_urls)
        .await
        .map_err(|e| WorkerError::Precache { cache: config.cache_name.clone(), reason: e.to_string() })
}

/// Delete every cache whose name is not the current version.
///
/// Deletions run concurrently; the first failure is returned after all of
/// them settle.
///
/// # Errors
///
/// Returns the storage error if listing or any deletion fails.
pub async fn activate<C: CacheStore>(store: &C, config: &WorkerConfig) -> Result<ActivateReport, WorkerError> {
    let names = store.cache_names().await?;
    let (current, stale): (Vec<String>, Vec<String>) =
        names.into_iter().partition(|name| *name == config.cache_name);

    let results = join_all(stale.iter().map(|name| store.delete_cache(name))).await;

    let mut deleted = Vec::with_capacity(stale.len());
    for (name, result) in stale.into_iter().zip(results) {
        if result? {
            log::info!("deleted stale cache {name}");
            deleted.push(name);
        }
    }

    Ok(ActivateReport { kept: current.into_iter().next(), deleted })
}

/// Cache-first lookup with network fallback.
///
/// A failed cache lookup is treated as a miss.
pub async fn respond<C, N>(store: &C, network: &N, request: &C::Request) -> Served<C::Response>
where
    C: CacheStore,
    N: Network<Request = C::Request, Response = C::Response>,
{
    match store.lookup(request).await {
        Ok(Some(cached)) => return Served::Cache(cached),
        Ok(None) => {}
        Err(e) => log::debug!("cache lookup failed, falling back to network: {e}"),
    }

    match network.fetch(request).await {
        Ok(response) => Served::Network(response),
        Err(e) => {
            log::warn!("{e}");
            Served::Offline
        }
    }
}
