//! Persistent key-value preferences.
//!
//! Absence of a key always means "defer to the system or default". Storage
//! failures (disabled storage, quota) degrade to absence on read and to a
//! no-op on write; they are logged, never raised.

#[cfg(test)]
#[path = "prefs_test.rs"]
mod prefs_test;

use crate::config::StorageKeys;
use crate::language::Language;
use crate::theme::Theme;

/// Minimal string store. Implementations swallow their own failures.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `window.localStorage`, or nothing when the browser refuses access.
#[cfg(feature = "hydrate")]
#[derive(Debug, Clone)]
pub struct BrowserStorage {
    storage: Option<web_sys::Storage>,
}

#[cfg(feature = "hydrate")]
impl BrowserStorage {
    pub fn local() -> Self {
        let storage = match web_sys::window().map(|w| w.local_storage()) {
            Some(Ok(storage)) => storage,
            Some(Err(e)) => {
                log::debug!("localStorage unavailable: {e:?}");
                None
            }
            None => None,
        };
        Self { storage }
    }
}

#[cfg(feature = "hydrate")]
impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        match self.storage.as_ref()?.get_item(key) {
            Ok(value) => value,
            Err(e) => {
                log::debug!("localStorage read of {key} failed: {e:?}");
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            if let Err(e) = storage.set_item(key, value) {
                log::debug!("localStorage write of {key} failed: {e:?}");
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = &self.storage {
            if let Err(e) = storage.remove_item(key) {
                log::debug!("localStorage remove of {key} failed: {e:?}");
            }
        }
    }
}

/// Typed view over the theme, language, and consent keys.
#[derive(Debug, Clone)]
pub struct Preferences<S> {
    store: S,
    keys: StorageKeys,
}

impl<S: KeyValueStore> Preferences<S> {
    pub fn new(store: S, keys: StorageKeys) -> Self {
        Self { store, keys }
    }

    /// Stored theme; unknown values read as absent.
    pub fn theme(&self) -> Option<Theme> {
        self.store.get(&self.keys.theme).as_deref().and_then(Theme::parse)
    }

    pub fn set_theme(&self, theme: Theme) {
        self.store.set(&self.keys.theme, theme.as_str());
    }

    pub fn clear_theme(&self) {
        self.store.remove(&self.keys.theme);
    }

    /// Stored language, validated against the known set.
    pub fn language(&self) -> Option<Language> {
        self.store.get(&self.keys.language).as_deref().and_then(Language::parse)
    }

    pub fn set_language(&self, language: Language) {
        self.store.set(&self.keys.language, language.code());
    }

    /// Any stored value counts as accepted.
    pub fn consent_accepted(&self) -> bool {
        self.store.get(&self.keys.consent).is_some()
    }

    pub fn accept_consent(&self) {
        self.store.set(&self.keys.consent, "true");
    }
}
