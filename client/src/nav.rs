//! Mobile navigation drawer.
//!
//! The open flag lives only for the page load. Each state maps to a fixed
//! set of inline styles on the hamburger lines, the backdrop layer, and the
//! link list, applied on the next animation frame.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part {
    TopLine,
    BottomLine,
    Layer,
    Links,
}

/// Inline style mutation: element, property, value.
pub type StyleRule = (Part, &'static str, &'static str);

const OPEN: &[StyleRule] = &[
    (Part::TopLine, "transform", "rotate(45deg) translateY(6px)"),
    (Part::BottomLine, "transform", "rotate(-45deg) translateY(-6px)"),
    (Part::Layer, "transform", "scaleY(1)"),
    (Part::Layer, "opacity", "1"),
    (Part::Links, "transform", "translateY(0)"),
    (Part::Links, "opacity", "1"),
    (Part::Links, "visibility", "visible"),
];

const CLOSED: &[StyleRule] = &[
    (Part::TopLine, "transform", "rotate(0) translateY(0)"),
    (Part::BottomLine, "transform", "rotate(0) translateY(0)"),
    (Part::Layer, "transform", "scaleY(0)"),
    (Part::Layer, "opacity", "0"),
    (Part::Links, "transform", "translateY(-20px)"),
    (Part::Links, "opacity", "0"),
    (Part::Links, "visibility", "hidden"),
];

/// Compositor hints set once at bind time.
pub const WILL_CHANGE: &[(Part, &str)] = &[
    (Part::TopLine, "transform"),
    (Part::BottomLine, "transform"),
    (Part::Layer, "transform, opacity"),
    (Part::Links, "transform, opacity"),
];

pub fn styles(open: bool) -> &'static [StyleRule] {
    if open { OPEN } else { CLOSED }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrawerState {
    open: bool,
}

impl DrawerState {
    /// Flip and return the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Close if open. Returns whether anything changed.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }
}

#[cfg(feature = "hydrate")]
pub use browser::{NavDrawer, NavElements};

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::Cell;
    use std::rc::Rc;

    use gloo_events::EventListener;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;
    use web_sys::{Document, Element, HtmlElement};

    use super::*;
    use crate::config::NavConfig;
    use crate::error::ClientError;
    use crate::util::dom;

    pub struct NavElements {
        pub button: Element,
        pub top_line: HtmlElement,
        pub bottom_line: HtmlElement,
        pub layer: HtmlElement,
        pub links: HtmlElement,
        pub link_items: Vec<Element>,
    }

    impl NavElements {
        /// `Ok(None)` when the page has no menu button.
        ///
        /// # Errors
        ///
        /// Returns [`ClientError::MissingElement`] if the button exists but
        /// any other drawer part does not.
        pub fn locate(document: &Document, config: &NavConfig) -> Result<Option<Self>, ClientError> {
            let Some(button) = dom::find_id(document, &config.menu_button_id) else {
                return Ok(None);
            };
            let group = dom::require_id(document, &config.links_group_id)?;
            Ok(Some(Self {
                button,
                top_line: dom::require_html(document, &config.top_line_id)?,
                bottom_line: dom::require_html(document, &config.bottom_line_id)?,
                layer: dom::require_html(document, &config.layer_id)?,
                links: dom::require_html(document, &config.links_id)?,
                link_items: dom::children(&group),
            }))
        }

        fn part(&self, part: Part) -> &HtmlElement {
            match part {
                Part::TopLine => &self.top_line,
                Part::BottomLine => &self.bottom_line,
                Part::Layer => &self.layer,
                Part::Links => &self.links,
            }
        }

        fn paint(&self, open: bool) {
            for (part, property, value) in styles(open) {
                dom::set_style(self.part(*part), property, value);
            }
        }
    }

    fn paint_next_frame(elements: &Rc<NavElements>, open: bool) {
        let for_frame = Rc::clone(elements);
        let callback = Closure::once_into_js(move || for_frame.paint(open));
        let scheduled = dom::window().map(|w| w.request_animation_frame(callback.unchecked_ref()));
        if !matches!(scheduled, Ok(Ok(_))) {
            elements.paint(open);
        }
    }

    /// Bound drawer; dropping it removes its listeners.
    pub struct NavDrawer {
        _listeners: Vec<EventListener>,
    }

    impl NavDrawer {
        pub fn bind(elements: NavElements) -> Self {
            for (part, hint) in WILL_CHANGE {
                dom::set_style(elements.part(*part), "will-change", hint);
            }

            let elements = Rc::new(elements);
            let state = Rc::new(Cell::new(DrawerState::default()));
            let mut listeners = Vec::new();

            {
                let elements_cb = Rc::clone(&elements);
                let state = Rc::clone(&state);
                listeners.push(EventListener::new(&elements.button, "click", move |_| {
                    let mut current = state.get();
                    let open = current.toggle();
                    state.set(current);
                    paint_next_frame(&elements_cb, open);
                }));
            }

            for link in &elements.link_items {
                let elements_cb = Rc::clone(&elements);
                let state = Rc::clone(&state);
                listeners.push(EventListener::new(link, "click", move |_| {
                    let mut current = state.get();
                    if current.close() {
                        state.set(current);
                        paint_next_frame(&elements_cb, false);
                    }
                }));
            }

            Self { _listeners: listeners }
        }
    }
}
