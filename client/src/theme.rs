//! Light/dark theme resolution and the `<html>` class toggle.
//!
//! An explicit stored choice always wins; with nothing stored the OS
//! `prefers-color-scheme` signal decides, and OS changes are followed until
//! the user picks a theme again.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::prefs::{KeyValueStore, Preferences};
use crate::util::classes::ClassList;

pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn from_system(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }
}

/// A requested theme. `System` resolves through the OS signal immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeChoice {
    Dark,
    Light,
    System,
}

impl From<Theme> for ThemeChoice {
    fn from(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self::Dark,
            Theme::Light => Self::Light,
        }
    }
}

/// Stored preference first, OS signal second.
pub fn resolve(stored: Option<Theme>, system_prefers_dark: bool) -> Theme {
    stored.unwrap_or_else(|| Theme::from_system(system_prefers_dark))
}

/// Persist `choice` (or clear it for `System`) and return the effective theme.
pub fn change_theme_to<S: KeyValueStore>(
    prefs: &Preferences<S>,
    choice: ThemeChoice,
    system_prefers_dark: bool,
) -> Theme {
    match choice {
        ThemeChoice::System => {
            prefs.clear_theme();
            Theme::from_system(system_prefers_dark)
        }
        ThemeChoice::Dark => {
            prefs.set_theme(Theme::Dark);
            Theme::Dark
        }
        ThemeChoice::Light => {
            prefs.set_theme(Theme::Light);
            Theme::Light
        }
    }
}

/// Theme to show on page load.
pub fn initial_theme<S: KeyValueStore>(prefs: &Preferences<S>, system_prefers_dark: bool) -> Theme {
    resolve(prefs.theme(), system_prefers_dark)
}

/// Reaction to an OS scheme change: `None` while an explicit choice is stored.
pub fn on_system_change<S: KeyValueStore>(prefs: &Preferences<S>, system_prefers_dark: bool) -> Option<Theme> {
    match prefs.theme() {
        Some(_) => None,
        None => Some(Theme::from_system(system_prefers_dark)),
    }
}

/// Theme the toggle switches to, judged from the current class state.
pub fn toggled(root: &impl ClassList, dark_class: &str) -> Theme {
    let current = if root.contains(dark_class) { Theme::Dark } else { Theme::Light };
    current.opposite()
}

/// Reflect `theme` on the root class list. Idempotent.
pub fn apply(root: &impl ClassList, dark_class: &str, theme: Theme) {
    root.set(dark_class, theme == Theme::Dark);
}

#[cfg(feature = "hydrate")]
pub use browser::ThemeController;

#[cfg(feature = "hydrate")]
mod browser {
    use gloo_events::EventListener;
    use wasm_bindgen::JsCast;
    use web_sys::{Document, Element, HtmlElement, MediaQueryList, Window};

    use super::*;
    use crate::config::ThemeConfig;
    use crate::error::ClientError;
    use crate::prefs::BrowserStorage;
    use crate::util::dom;

    /// Bound theme controller; dropping it removes its listeners.
    pub struct ThemeController {
        _listeners: Vec<EventListener>,
    }

    fn prefers_dark(media: Option<&MediaQueryList>) -> bool {
        media.is_some_and(MediaQueryList::matches)
    }

    impl ThemeController {
        /// Apply the initial theme, reveal the page, and follow OS/toggle changes.
        ///
        /// # Errors
        ///
        /// Returns [`ClientError::MissingElement`] if the document has no root element.
        pub fn bind(
            window: &Window,
            document: &Document,
            prefs: Preferences<BrowserStorage>,
            config: &ThemeConfig,
        ) -> Result<Self, ClientError> {
            let root: Element = document
                .document_element()
                .ok_or_else(|| ClientError::missing("html"))?;
            let media = match window.match_media(DARK_SCHEME_QUERY) {
                Ok(media) => media,
                Err(e) => {
                    log::debug!("matchMedia unavailable: {}", dom::describe(&e));
                    None
                }
            };

            let theme = initial_theme(&prefs, prefers_dark(media.as_ref()));
            apply(&root.class_list(), &config.dark_class, theme);
            if let Some(html) = root.dyn_ref::<HtmlElement>() {
                dom::set_style(html, "opacity", "1");
            }
            log::debug!("theme {}", theme.as_str());

            let mut listeners = Vec::new();

            if let Some(media) = media.clone() {
                let root = root.clone();
                let prefs = prefs.clone();
                let dark_class = config.dark_class.clone();
                let target = media.clone();
                listeners.push(EventListener::new(&target, "change", move |_| {
                    if let Some(theme) = on_system_change(&prefs, media.matches()) {
                        apply(&root.class_list(), &dark_class, theme);
                    }
                }));
            }

            if let Some(toggle) = dom::find_id(document, &config.toggle_id) {
                let dark_class = config.dark_class.clone();
                listeners.push(EventListener::new(&toggle, "click", move |_| {
                    let next = toggled(&root.class_list(), &dark_class);
                    let theme = change_theme_to(&prefs, next.into(), prefers_dark(media.as_ref()));
                    apply(&root.class_list(), &dark_class, theme);
                }));
            }

            Ok(Self { _listeners: listeners })
        }
    }
}
