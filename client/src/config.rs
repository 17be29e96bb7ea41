//! Client configuration.
//!
//! Every section has built-in defaults matching the site templates. A page
//! may override any field with a JSON document in
//! `<script type="application/json" id="genweb-config">`; fields it leaves
//! out keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::ClientError;

/// Id of the optional inline JSON configuration element.
pub const CONFIG_ELEMENT_ID: &str = "genweb-config";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub storage: StorageKeys,
    pub theme: ThemeConfig,
    pub nav: NavConfig,
    pub consent: ConsentConfig,
    pub language: LanguageConfig,
    pub search: SearchConfig,
    pub back_to_top: BackToTopConfig,
    pub highlight: HighlightConfig,
}

impl ClientConfig {
    /// Parse a page override document.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] if `raw` is not valid JSON for this shape.
    pub fn from_json(raw: &str) -> Result<Self, ClientError> {
        serde_json::from_str(raw).map_err(|e| ClientError::Config(e.to_string()))
    }

    /// Parse `raw` if present, falling back to defaults on absence or error.
    pub fn from_optional_json(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
            return Self::default();
        };
        match Self::from_json(raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{e}; using defaults");
                Self::default()
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StorageKeys {
    pub theme: String,
    pub language: String,
    pub consent: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            theme: "theme-preference".to_owned(),
            language: "selectedLanguage".to_owned(),
            consent: "pdpaAccepted".to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub dark_class: String,
    pub toggle_id: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self { dark_class: "dark".to_owned(), toggle_id: "dark-mode-toggle".to_owned() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    pub menu_button_id: String,
    pub links_group_id: String,
    pub top_line_id: String,
    pub bottom_line_id: String,
    pub layer_id: String,
    pub links_id: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            menu_button_id: "hamburger".to_owned(),
            links_group_id: "links-group".to_owned(),
            top_line_id: "line".to_owned(),
            bottom_line_id: "line2".to_owned(),
            layer_id: "navLayer".to_owned(),
            links_id: "navlinks".to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConsentConfig {
    pub banner_id: String,
    pub accept_id: String,
    pub reject_id: String,
    pub reject_url: String,
}

impl Default for ConsentConfig {
    fn default() -> Self {
        Self {
            banner_id: "pdpaBanner".to_owned(),
            accept_id: "pdpaAcceptBanner".to_owned(),
            reject_id: "pdpaReject".to_owned(),
            reject_url: "https://genwebblog.com/".to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LanguageConfig {
    /// Selectors whose matches receive a rendered switcher.
    pub container_selectors: Vec<String>,
    pub auto_redirect: bool,
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self {
            container_selectors: vec![
                "[data-language-switcher]".to_owned(),
                "#language-switcher-container".to_owned(),
                ".language-switcher-container".to_owned(),
                "#language-switcher".to_owned(),
            ],
            auto_redirect: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub index_url: String,
    pub debounce_ms: u32,
    pub fetch_timeout_ms: u32,
    pub modal_id: String,
    pub input_id: String,
    pub results_id: String,
    pub clear_button_id: Option<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            index_url: "/releases.json".to_owned(),
            debounce_ms: 300,
            fetch_timeout_ms: 5000,
            modal_id: "searchModal".to_owned(),
            input_id: "searchInput".to_owned(),
            results_id: "searchResults".to_owned(),
            clear_button_id: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BackToTopConfig {
    pub selector: String,
    pub threshold_px: f64,
}

impl Default for BackToTopConfig {
    fn default() -> Self {
        Self { selector: "a[href=\"#top\"]".to_owned(), threshold_px: 100.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    pub script_url: String,
    pub code_selector: String,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self { script_url: "/_system_/scripts/highlight.min.js".to_owned(), code_selector: "pre code".to_owned() }
    }
}
