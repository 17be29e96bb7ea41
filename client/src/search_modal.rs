//! Search overlay: `Ctrl+K` opens, `Escape` or a backdrop click closes.

#[cfg(test)]
#[path = "search_modal_test.rs"]
mod search_modal_test;

use crate::util::classes::{ClassList, set_visible};

/// Applied to `<body>` while the overlay is open to stop background scrolling.
pub const SCROLL_LOCK_CLASS: &str = "overflow-hidden";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalCommand {
    Open,
    Close,
}

/// Keyboard shortcut mapping.
pub fn shortcut(key: &str, ctrl: bool) -> Option<ModalCommand> {
    match key {
        "Escape" => Some(ModalCommand::Close),
        "k" if ctrl => Some(ModalCommand::Open),
        _ => None,
    }
}

/// Class changes for `command` on the overlay and the body.
pub fn apply(modal: &impl ClassList, body: &impl ClassList, command: ModalCommand) {
    let open = command == ModalCommand::Open;
    set_visible(modal, open);
    body.set(SCROLL_LOCK_CLASS, open);
}

#[cfg(feature = "hydrate")]
pub use browser::SearchModal;

#[cfg(feature = "hydrate")]
mod browser {
    use std::rc::Rc;

    use gloo_events::{EventListener, EventListenerOptions};
    use wasm_bindgen::JsCast;
    use web_sys::{Document, Element, EventTarget, HtmlElement, KeyboardEvent};

    use super::*;
    use crate::config::SearchConfig;
    use crate::error::ClientError;
    use crate::util::dom;

    struct Overlay {
        modal: Element,
        input: Option<HtmlElement>,
        body: Option<HtmlElement>,
    }

    impl Overlay {
        fn run(&self, command: ModalCommand) {
            match &self.body {
                Some(body) => apply(&self.modal.class_list(), &body.class_list(), command),
                None => set_visible(&self.modal.class_list(), command == ModalCommand::Open),
            }
            if command == ModalCommand::Open {
                if let Some(input) = &self.input {
                    if let Err(e) = input.focus() {
                        log::debug!("search input focus failed: {}", dom::describe(&e));
                    }
                }
            }
        }
    }

    /// Bound overlay; dropping it removes its listeners.
    pub struct SearchModal {
        _listeners: Vec<EventListener>,
    }

    impl SearchModal {
        /// `Ok(None)` when the page has no overlay.
        ///
        /// # Errors
        ///
        /// Returns [`ClientError::WrongElement`] if the configured input is not an HTML element.
        pub fn bind(document: &Document, config: &SearchConfig) -> Result<Option<Self>, ClientError> {
            let Some(modal) = dom::find_id(document, &config.modal_id) else {
                return Ok(None);
            };
            let overlay = Rc::new(Overlay {
                modal: modal.clone(),
                input: dom::find_html(document, &config.input_id)?,
                body: document.body(),
            });

            let mut listeners = Vec::new();

            let keyboard = Rc::clone(&overlay);
            let options = EventListenerOptions::enable_prevent_default();
            listeners.push(EventListener::new_with_options(document, "keydown", options, move |event| {
                let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                if let Some(command) = shortcut(&event.key(), event.ctrl_key()) {
                    if command == ModalCommand::Open {
                        event.prevent_default();
                    }
                    keyboard.run(command);
                }
            }));

            let backdrop = Rc::clone(&overlay);
            listeners.push(EventListener::new(&modal, "click", move |event| {
                let modal_target: &EventTarget = backdrop.modal.as_ref();
                if event.target().as_ref() == Some(modal_target) {
                    backdrop.run(ModalCommand::Close);
                }
            }));

            Ok(Some(Self { _listeners: listeners }))
        }
    }
}
