//! Page bootstrap: reads configuration, binds every controller the page has
//! markup for, and keeps them alive until [`teardown`].

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

use crate::accordion::Accordion;
use crate::article::mark_current_category;
use crate::back_to_top::BackToTop;
use crate::config::{CONFIG_ELEMENT_ID, ClientConfig};
use crate::consent::ConsentBanner;
use crate::error::ClientError;
use crate::highlight::Highlighter;
use crate::language::{LanguageSwitcher, resolve_language};
use crate::nav::{NavDrawer, NavElements};
use crate::prefs::{BrowserStorage, Preferences};
use crate::search::{SearchController, SearchElements, SearchMessages};
use crate::search_modal::SearchModal;
use crate::theme::ThemeController;
use crate::util::dom;

thread_local! {
    static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
}

/// Owns every bound controller. Dropping it detaches all listeners.
struct Page {
    _theme: Option<ThemeController>,
    _nav: Option<NavDrawer>,
    _consent: ConsentBanner,
    _language: Option<LanguageSwitcher>,
    _search: Option<SearchController>,
    _search_modal: Option<SearchModal>,
    _back_to_top: Option<BackToTop>,
    _accordion: Accordion,
    _highlight: Option<Highlighter>,
}

fn keep<T>(part: &str, bound: Result<Option<T>, ClientError>) -> Option<T> {
    match bound {
        Ok(Some(controller)) => {
            log::debug!("{part} bound");
            Some(controller)
        }
        Ok(None) => None,
        Err(e) => {
            log::warn!("{part} disabled: {e}");
            None
        }
    }
}

fn read_config(document: &Document) -> ClientConfig {
    let raw = dom::find_id(document, CONFIG_ELEMENT_ID).and_then(|el| el.text_content());
    ClientConfig::from_optional_json(raw.as_deref())
}

fn pathname(window: &Window) -> String {
    window.location().pathname().unwrap_or_else(|e| {
        log::debug!("pathname unavailable: {}", dom::describe(&e));
        "/".to_owned()
    })
}

impl Page {
    fn bind(window: &Window, document: &Document) -> Self {
        let config = read_config(document);
        let prefs = Preferences::new(BrowserStorage::local(), config.storage.clone());
        let path = pathname(window);

        let theme = keep(
            "theme",
            ThemeController::bind(window, document, prefs.clone(), &config.theme).map(Some),
        );
        let language = LanguageSwitcher::bind(document, prefs.clone(), &config.language);
        let page_language = language
            .as_ref()
            .map_or_else(|| resolve_language(prefs.language(), &path), LanguageSwitcher::current);

        let nav = keep("nav", NavElements::locate(document, &config.nav)).map(NavDrawer::bind);
        let consent = ConsentBanner::bind(window, document, prefs, &config.consent);
        let search = keep("search", SearchElements::locate(document, &config.search)).map(|elements| {
            SearchController::bind(document, elements, &config.search, SearchMessages::for_language(page_language))
        });
        let search_modal = keep("search modal", SearchModal::bind(document, &config.search));
        let back_to_top = keep("back-to-top", BackToTop::bind(window, document, &config.back_to_top));
        let accordion = Accordion::bind(document);
        let highlight = keep("highlight", Highlighter::bind(document, &config.highlight));

        let marked = mark_current_category(document, &path);
        log::debug!("page bound: language {}, {marked} category links marked", page_language.code());

        Self {
            _theme: theme,
            _nav: nav,
            _consent: consent,
            _language: language,
            _search: search,
            _search_modal: search_modal,
            _back_to_top: back_to_top,
            _accordion: accordion,
            _highlight: highlight,
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    let _ = console_log::init_with_level(level);

    let (window, document) = match dom::window().and_then(|w| dom::document().map(|d| (w, d))) {
        Ok(pair) => pair,
        Err(e) => {
            log::error!("client not started: {e}");
            return;
        }
    };

    let page = Page::bind(&window, &document);
    PAGE.with(|slot| *slot.borrow_mut() = Some(page));
}

/// Detach every listener bound by [`start`].
#[wasm_bindgen]
pub fn teardown() {
    let dropped = PAGE.with(|slot| slot.borrow_mut().take());
    if dropped.is_some() {
        log::info!("client listeners detached");
    }
}
