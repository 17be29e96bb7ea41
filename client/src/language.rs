//! Thai/English language switcher.
//!
//! English pages live under a fixed `/en` prefix; Thai pages at the site
//! root. Switching rewrites the current path, stores the choice, and
//! navigates.
//!
//! INVARIANTS
//! ==========
//! - `language_of_path(&switch_path(lang, path)) == lang` for every path.
//!   The load-time redirect relies on it: after one redirect the stored
//!   language and the path agree, so it cannot fire again.
//! - Round trip Th → En → Th returns the original path, except for the two
//!   spellings of the root (`/`, `/index.html`) which both come back as `/`.

#[cfg(test)]
#[path = "language_test.rs"]
mod language_test;

use crate::prefs::{KeyValueStore, Preferences};

pub const EN_PREFIX: &str = "/en";
pub const EN_ROOT: &str = "/en/";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    Th,
    En,
}

impl Language {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "th" => Some(Self::Th),
            "en" => Some(Self::En),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::Th => "th",
            Self::En => "en",
        }
    }

    /// Upper-case label shown on the switcher button.
    pub fn label(self) -> &'static str {
        match self {
            Self::Th => "TH",
            Self::En => "EN",
        }
    }

    pub fn other(self) -> Self {
        match self {
            Self::Th => Self::En,
            Self::En => Self::Th,
        }
    }
}

fn is_root(path: &str) -> bool {
    path.is_empty() || path == "/" || path == "/index.html"
}

/// `/en` itself or anything under `/en/`.
pub fn language_of_path(path: &str) -> Language {
    match path.strip_prefix(EN_PREFIX) {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => Language::En,
        _ => Language::Th,
    }
}

/// Stored preference, then path prefix, then Thai.
pub fn resolve_language(stored: Option<Language>, path: &str) -> Language {
    stored.unwrap_or_else(|| language_of_path(path))
}

/// Equivalent of `path` in `target`.
pub fn switch_path(target: Language, path: &str) -> String {
    match (target, language_of_path(path)) {
        (Language::En, Language::En) | (Language::Th, Language::Th) => {
            if path.is_empty() { "/".to_owned() } else { path.to_owned() }
        }
        (Language::En, Language::Th) => {
            if is_root(path) {
                EN_ROOT.to_owned()
            } else if path.starts_with('/') {
                format!("{EN_PREFIX}{path}")
            } else {
                format!("{EN_PREFIX}/{path}")
            }
        }
        (Language::Th, Language::En) => {
            let mut rest = path;
            while language_of_path(rest) == Language::En {
                rest = rest.strip_prefix(EN_PREFIX).unwrap_or(rest);
            }
            if is_root(rest) { "/".to_owned() } else { rest.to_owned() }
        }
    }
}

/// Load-time redirect: the path for the stored language when it disagrees
/// with the current one.
pub fn auto_redirect_target(stored: Option<Language>, path: &str) -> Option<String> {
    let stored = stored?;
    if language_of_path(path) == stored {
        return None;
    }
    Some(switch_path(stored, path))
}

/// Persist `target` and return the path to navigate to.
pub fn switch_language<S: KeyValueStore>(prefs: &Preferences<S>, target: Language, path: &str) -> String {
    prefs.set_language(target);
    switch_path(target, path)
}

pub const BUTTON_CLASS: &str = "lang-button";
pub const DROPDOWN_CLASS: &str = "lang-dropdown";
pub const OPTION_CLASS: &str = "lang-option";

/// Switcher markup for a container. Every value interpolated here is a
/// fixed language code, never user input.
pub fn switcher_markup(current: Language) -> String {
    let other = current.other();
    format!(
        concat!(
            r#"<div class="relative inline-block">"#,
            r#"<button type="button" class="{button} flex items-center gap-1 px-2 py-1 text-sm font-medium text-gray-700 dark:text-gray-300 bg-white dark:bg-gray-800 rounded-md hover:bg-gray-50 dark:hover:bg-gray-700 transition-colors duration-150 focus:outline-none focus:ring-2 focus:ring-blue-500">"#,
            r#"<span>{current}</span>"#,
            r#"<svg class="w-3 h-3 transition-transform duration-150" fill="none" stroke="currentColor" viewBox="0 0 24 24"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M19 9l-7 7-7-7"/></svg>"#,
            r#"</button>"#,
            r#"<div class="{dropdown} hidden absolute top-full right-0 mt-1 bg-white dark:bg-gray-800 rounded-md shadow-lg z-50 min-w-16">"#,
            r##"<a href="#" data-lang="{other_code}" class="{option} block px-3 py-2 text-sm font-medium text-gray-700 dark:text-gray-300 hover:bg-gray-100 dark:hover:bg-gray-700 hover:text-gray-900 dark:hover:text-gray-100 transition-colors duration-150 first:rounded-t-md last:rounded-b-md">{other}</a>"##,
            r#"</div>"#,
            r#"</div>"#,
        ),
        button = BUTTON_CLASS,
        dropdown = DROPDOWN_CLASS,
        option = OPTION_CLASS,
        current = current.label(),
        other_code = other.code(),
        other = other.label(),
    )
}

#[cfg(feature = "hydrate")]
pub use browser::LanguageSwitcher;

#[cfg(feature = "hydrate")]
mod browser {
    use gloo_events::{EventListener, EventListenerOptions};
    use web_sys::{Document, Element};

    use super::*;
    use crate::config::LanguageConfig;
    use crate::prefs::BrowserStorage;
    use crate::util::classes::{ClassList, HIDDEN, set_visible};
    use crate::util::dom;

    fn current_path() -> String {
        match dom::window().map(|w| w.location().pathname()) {
            Ok(Ok(path)) => path,
            _ => "/".to_owned(),
        }
    }

    /// Bound switcher; dropping it removes its listeners.
    pub struct LanguageSwitcher {
        current: Language,
        _listeners: Vec<EventListener>,
    }

    impl LanguageSwitcher {
        /// Redirect if the stored language disagrees with the page, then
        /// render the switcher into every configured container.
        ///
        /// Returns `None` when a redirect was issued or no container exists.
        pub fn bind(document: &Document, prefs: Preferences<BrowserStorage>, config: &LanguageConfig) -> Option<Self> {
            let path = current_path();

            if config.auto_redirect {
                if let Some(target) = auto_redirect_target(prefs.language(), &path) {
                    log::info!("stored language differs from {path}; redirecting to {target}");
                    dom::navigate(&target);
                    return None;
                }
            }

            let current = resolve_language(prefs.language(), &path);
            let containers: Vec<Element> = config
                .container_selectors
                .iter()
                .flat_map(|selector| dom::query_all(document, selector))
                .collect();
            if containers.is_empty() {
                return None;
            }

            let markup = switcher_markup(current);
            let mut listeners = Vec::new();
            let mut dropdowns = Vec::new();

            for container in &containers {
                container.set_inner_html(&markup);
                let button = container.get_elements_by_class_name(BUTTON_CLASS).item(0);
                let dropdown = container.get_elements_by_class_name(DROPDOWN_CLASS).item(0);
                let option = container.get_elements_by_class_name(OPTION_CLASS).item(0);

                if let (Some(button), Some(dropdown)) = (button, dropdown.clone()) {
                    listeners.push(EventListener::new(&button, "click", move |event| {
                        event.stop_propagation();
                        ClassList::toggle(&dropdown.class_list(), HIDDEN);
                    }));
                }
                if let Some(dropdown) = dropdown {
                    dropdowns.push(dropdown);
                }

                if let Some(option) = option {
                    let prefs = prefs.clone();
                    let target = current.other();
                    let options = EventListenerOptions::enable_prevent_default();
                    listeners.push(EventListener::new_with_options(&option, "click", options, move |event| {
                        event.prevent_default();
                        let next = switch_language(&prefs, target, &current_path());
                        dom::navigate(&next);
                    }));
                }
            }

            listeners.push(EventListener::new(document, "click", move |_| {
                for dropdown in &dropdowns {
                    set_visible(&dropdown.class_list(), false);
                }
            }));

            Some(Self { current, _listeners: listeners })
        }

        pub fn current(&self) -> Language {
            self.current
        }
    }
}
