//! # genweb-worker
//!
//! Offline cache service worker for the blog, compiled to WebAssembly.
//!
//! The worker answers three browser events: `install` pre-caches a fixed
//! list of assets, `activate` deletes every cache that is not the current
//! version and claims open pages, and `fetch` serves same-origin requests
//! cache-first with a network fallback.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Cache name, pre-cache list, bypass rules, offline response |
//! | [`filter`] | Decides which requests the worker leaves alone |
//! | [`lifecycle`] | Install/activate/fetch logic over the [`lifecycle::CacheStore`] and [`lifecycle::Network`] seams |
//! | [`error`] | Worker error type |
//! | `browser` | `CacheStorage`/`fetch` bindings and the event wiring (`hydrate` only) |

pub mod config;
pub mod error;
pub mod filter;
pub mod lifecycle;

#[cfg(feature = "hydrate")]
mod browser;

#[cfg(feature = "hydrate")]
pub use browser::start;
