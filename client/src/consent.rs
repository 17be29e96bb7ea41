//! Personal-data consent banner.

#[cfg(test)]
#[path = "consent_test.rs"]
mod consent_test;

use crate::prefs::{KeyValueStore, Preferences};
use crate::util::classes::{ClassList, set_visible};

/// Reveal the banner unless consent was already given. Returns whether it is shown.
pub fn show_if_pending<S: KeyValueStore>(prefs: &Preferences<S>, banner: &impl ClassList) -> bool {
    let pending = !prefs.consent_accepted();
    if pending {
        set_visible(banner, true);
    }
    pending
}

/// Record consent and hide the banner.
pub fn accept<S: KeyValueStore>(prefs: &Preferences<S>, banner: Option<&impl ClassList>) {
    prefs.accept_consent();
    if let Some(banner) = banner {
        set_visible(banner, false);
    }
}

#[cfg(feature = "hydrate")]
pub use browser::ConsentBanner;

#[cfg(feature = "hydrate")]
mod browser {
    use std::rc::Rc;

    use gloo_events::EventListener;
    use web_sys::{Document, Element, Window};

    use super::*;
    use crate::config::ConsentConfig;
    use crate::prefs::BrowserStorage;
    use crate::util::dom;

    /// Bound banner; dropping it removes its listeners.
    pub struct ConsentBanner {
        _listeners: Vec<EventListener>,
    }

    impl ConsentBanner {
        pub fn bind(window: &Window, document: &Document, prefs: Preferences<BrowserStorage>, config: &ConsentConfig) -> Self {
            let prefs = Rc::new(prefs);
            let banner: Option<Element> = dom::find_id(document, &config.banner_id);
            let mut listeners = Vec::new();

            if let Some(banner) = banner.clone() {
                let prefs = Rc::clone(&prefs);
                if document.ready_state() == "complete" {
                    show_if_pending(&prefs, &banner.class_list());
                } else {
                    listeners.push(EventListener::once(window, "load", move |_| {
                        if show_if_pending(&prefs, &banner.class_list()) {
                            log::debug!("consent banner shown");
                        }
                    }));
                }
            }

            if let Some(accept_button) = dom::find_id(document, &config.accept_id) {
                let prefs = Rc::clone(&prefs);
                listeners.push(EventListener::new(&accept_button, "click", move |_| {
                    let classes = banner.as_ref().map(Element::class_list);
                    accept(&prefs, classes.as_ref());
                }));
            }

            if let Some(reject_button) = dom::find_id(document, &config.reject_id) {
                let reject_url = config.reject_url.clone();
                listeners.push(EventListener::new(&reject_button, "click", move |_| {
                    dom::navigate(&reject_url);
                }));
            }

            Self { _listeners: listeners }
        }
    }
}
