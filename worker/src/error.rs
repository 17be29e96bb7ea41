//! Errors raised by the cache worker.
//!
//! None of these reach a page: install/activate failures are reported to the
//! browser through the rejected `waitUntil` promise, and fetch failures are
//! folded into the offline response.

/// Failure of a cache storage or network operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorkerError {
    /// The global scope did not expose `caches`.
    #[error("cache storage unavailable: {0}")]
    StorageUnavailable(String),

    /// A `CacheStorage`/`Cache` call rejected.
    #[error("cache operation failed: {0}")]
    Cache(String),

    /// Bulk population of the named cache failed.
    #[error("pre-cache of {cache} failed: {reason}")]
    Precache { cache: String, reason: String },

    /// Forwarding a request to the network failed.
    #[error("network fetch failed: {0}")]
    Network(String),

    /// A JS value had an unexpected shape.
    #[error("unexpected value: {0}")]
    Cast(String),
}
