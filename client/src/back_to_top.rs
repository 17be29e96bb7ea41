//! Back-to-top link that appears once the page has scrolled.

#[cfg(test)]
#[path = "back_to_top_test.rs"]
mod back_to_top_test;

pub fn should_show(scroll_y: f64, threshold_px: f64) -> bool {
    scroll_y > threshold_px
}

pub fn display_for(visible: bool) -> &'static str {
    if visible { "block" } else { "none" }
}

#[cfg(feature = "hydrate")]
pub use browser::BackToTop;

#[cfg(feature = "hydrate")]
mod browser {
    use gloo_events::{EventListener, EventListenerOptions};
    use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

    use super::*;
    use crate::config::BackToTopConfig;
    use crate::error::ClientError;
    use crate::util::dom;

    fn scroll_y(window: &Window) -> f64 {
        window.scroll_y().unwrap_or_else(|e| {
            log::debug!("scrollY unavailable: {}", dom::describe(&e));
            0.0
        })
    }

    /// Bound link; dropping it removes its listeners.
    pub struct BackToTop {
        _listeners: Vec<EventListener>,
    }

    impl BackToTop {
        /// `Ok(None)` when the page has no back-to-top link.
        ///
        /// # Errors
        ///
        /// Returns [`ClientError::WrongElement`] if the match is not an HTML element.
        pub fn bind(window: &Window, document: &Document, config: &BackToTopConfig) -> Result<Option<Self>, ClientError> {
            let Some(link) = dom::query(document, &config.selector) else {
                return Ok(None);
            };
            let link: HtmlElement = dom::cast(link, &config.selector, "HtmlElement")?;
            dom::set_style(&link, "display", display_for(should_show(scroll_y(window), config.threshold_px)));

            let mut listeners = Vec::new();

            let on_scroll = link.clone();
            let scroller = window.clone();
            let threshold_px = config.threshold_px;
            listeners.push(EventListener::new(window, "scroll", move |_| {
                let visible = should_show(scroll_y(&scroller), threshold_px);
                dom::set_style(&on_scroll, "display", display_for(visible));
            }));

            let scroller = window.clone();
            let options = EventListenerOptions::enable_prevent_default();
            listeners.push(EventListener::new_with_options(&link, "click", options, move |event| {
                event.prevent_default();
                let to_top = ScrollToOptions::new();
                to_top.set_top(0.0);
                to_top.set_behavior(ScrollBehavior::Smooth);
                scroller.scroll_to_with_scroll_to_options(&to_top);
            }));

            Ok(Some(Self { _listeners: listeners }))
        }
    }
}
