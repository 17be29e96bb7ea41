//! Collapsible sections driven by `data-accordion-target`.

#[cfg(test)]
#[path = "accordion_test.rs"]
mod accordion_test;

use crate::util::classes::{ClassList, HIDDEN};

pub const TRIGGER_SELECTOR: &str = "[data-accordion-target]";
pub const TARGET_ATTRIBUTE: &str = "data-accordion-target";
pub const ICON_ROTATED_CLASS: &str = "rotate-180";

/// Flip a section and its chevron. Returns whether the section is now open.
pub fn toggle_section(section: &impl ClassList, icon: Option<&impl ClassList>) -> bool {
    let open = !section.toggle(HIDDEN);
    if let Some(icon) = icon {
        icon.toggle(ICON_ROTATED_CLASS);
    }
    open
}

#[cfg(feature = "hydrate")]
pub use browser::Accordion;

#[cfg(feature = "hydrate")]
mod browser {
    use gloo_events::EventListener;
    use web_sys::{Document, Element};

    use super::*;
    use crate::util::dom;

    fn on_trigger(document: &Document, trigger: &Element) {
        let Some(target) = trigger.get_attribute(TARGET_ATTRIBUTE) else {
            return;
        };
        let Some(section) = dom::query(document, &target) else {
            log::warn!("accordion target {target} not found");
            return;
        };
        let icon = trigger.query_selector("svg").ok().flatten().map(|svg| svg.class_list());
        toggle_section(&section.class_list(), icon.as_ref());
    }

    /// Bound triggers; dropping it removes their listeners.
    pub struct Accordion {
        _listeners: Vec<EventListener>,
    }

    impl Accordion {
        pub fn bind(document: &Document) -> Self {
            let listeners = dom::query_all(document, TRIGGER_SELECTOR)
                .into_iter()
                .map(|trigger| {
                    let document = document.clone();
                    let target = trigger.clone();
                    EventListener::new(&trigger, "click", move |_| on_trigger(&document, &target))
                })
                .collect();
            Self { _listeners: listeners }
        }
    }
}
