//! Static worker configuration.
//!
//! Renaming [`CACHE_NAME`] is the only way stale entries are invalidated:
//! the next activation deletes every cache with a different name.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const CACHE_NAME: &str = "genwebblog-cache-v1";

pub const PRECACHE_URLS: &[&str] = &[
    "/",
    "/index.html",
    "/site.webmanifest.json",
    "/favicon/android-chrome-192x192.png",
    "/favicon/android-chrome-512x512.png",
    "/_system_/styles/vendor.css",
    "/_system_/styles/noscript.css",
    "/images/2025-02-27/markdown-640.avif",
    "/images/2025-02-24/genwebblog-640.avif",
    "/images/user/user_boychawin.webp",
    "/images/how-to/bg-result.avif",
    "/favicon/favicon-640.avif",
];

/// Path prefixes served by the CDN edge, never cached.
pub const BYPASS_PATH_PREFIXES: &[&str] = &["/cdn-cgi/"];

/// Analytics and ad substrings matched against the full request URL.
pub const BYPASS_URL_SUBSTRINGS: &[&str] =
    &["googlesyndication", "adsbygoogle", "cloudflareinsights", "beacon.min.js"];

pub const OFFLINE_STATUS: u16 = 503;
pub const OFFLINE_STATUS_TEXT: &str = "Service Unavailable";
pub const OFFLINE_BODY: &str = "Service unavailable (offline or fetch failed)";
pub const OFFLINE_CONTENT_TYPE: &str = "text/plain";

/// Synthetic response returned when both cache and network miss.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfflineResponse {
    pub status: u16,
    pub status_text: String,
    pub content_type: String,
    pub body: String,
}

impl Default for OfflineResponse {
    fn default() -> Self {
        Self {
            status: OFFLINE_STATUS,
            status_text: OFFLINE_STATUS_TEXT.to_owned(),
            content_type: OFFLINE_CONTENT_TYPE.to_owned(),
            body: OFFLINE_BODY.to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerConfig {
    pub cache_name: String,
    pub precache_urls: Vec<String>,
    pub bypass_path_prefixes: Vec<String>,
    pub bypass_url_substrings: Vec<String>,
    pub offline: OfflineResponse,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            cache_name: CACHE_NAME.to_owned(),
            precache_urls: owned(PRECACHE_URLS),
            bypass_path_prefixes: owned(BYPASS_PATH_PREFIXES),
            bypass_url_substrings: owned(BYPASS_URL_SUBSTRINGS),
            offline: OfflineResponse::default(),
        }
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}
