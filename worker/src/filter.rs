//! Request exclusion rules.
//!
//! A bypassed request gets no `respondWith`, so the browser handles it as if
//! no worker were installed.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use crate::config::WorkerConfig;

/// The parts of a request URL the exclusion rules look at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTarget {
    pub origin: String,
    pub pathname: String,
    pub href: String,
}

impl RequestTarget {
    pub fn new(origin: impl Into<String>, pathname: impl Into<String>, href: impl Into<String>) -> Self {
        Self { origin: origin.into(), pathname: pathname.into(), href: href.into() }
    }
}

/// Why a request was left to the network untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bypass {
    CrossOrigin,
    PathPrefix,
    UrlSubstring,
}

/// Returns `Some` when the worker must not intercept `target`.
pub fn bypass_reason(target: &RequestTarget, worker_origin: &str, config: &WorkerConfig) -> Option<Bypass> {
    if target.origin != worker_origin {
        return Some(Bypass::CrossOrigin);
    }
    if config
        .bypass_path_prefixes
        .iter()
        .any(|prefix| target.pathname.starts_with(prefix.as_str()))
    {
        return Some(Bypass::PathPrefix);
    }
    if config
        .bypass_url_substrings
        .iter()
        .any(|needle| target.href.contains(needle.as_str()))
    {
        return Some(Bypass::UrlSubstring);
    }
    None
}

