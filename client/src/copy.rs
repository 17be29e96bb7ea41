//! `copy_code`, called from the inline `onclick` of code-block copy buttons.
//!
//! The button flashes a "Copied!" label for [`RESTORE_AFTER_MS`] and then
//! returns to the fixed copy label. Clicks while the flash is showing copy
//! again but do not start a second flash.

#[cfg(test)]
#[path = "copy_test.rs"]
mod copy_test;

use crate::util::classes::ClassList;

pub const COPIED_CLASS: &str = "copied";
pub const RESTORE_AFTER_MS: u32 = 2_000;

pub const COPY_LABEL: &str = concat!(
    r#"<svg xmlns="http://www.w3.org/2000/svg" class="h-4 w-4" fill="none" viewBox="0 0 24 24" stroke="currentColor">"#,
    r#"<path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M8 5H6a2 2 0 00-2 2v12a2 2 0 002 2h10a2 2 0 002-2v-1M8 5a2 2 0 002 2h2a2 2 0 002-2M8 5a2 2 0 012-2h2a2 2 0 012 2m0 0h2a2 2 0 012 2v3m2 4H10m0 0l3-3m-3 3l3 3" />"#,
    "</svg> Copy",
);

pub const COPIED_LABEL: &str = concat!(
    r#"<svg xmlns="http://www.w3.org/2000/svg" class="h-4 w-4" fill="none" viewBox="0 0 24 24" stroke="currentColor">"#,
    r#"<path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M5 13l4 4L19 7" />"#,
    "</svg> Copied!",
);

/// Start a flash. Returns the label to show, or `None` if one is already running.
pub fn begin_flash(button: &impl ClassList) -> Option<&'static str> {
    if button.contains(COPIED_CLASS) {
        return None;
    }
    button.add(COPIED_CLASS);
    Some(COPIED_LABEL)
}

/// End a flash. Returns the label to restore.
pub fn end_flash(button: &impl ClassList) -> &'static str {
    button.remove(COPIED_CLASS);
    COPY_LABEL
}

#[cfg(feature = "hydrate")]
pub use browser::copy_code;

#[cfg(feature = "hydrate")]
mod browser {
    use gloo_timers::callback::Timeout;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::{JsFuture, spawn_local};
    use web_sys::HtmlElement;

    use super::*;
    use crate::util::dom;

    fn show_copied(button: &HtmlElement) {
        let Some(label) = begin_flash(&button.class_list()) else {
            return;
        };
        button.set_inner_html(label);

        let button = button.clone();
        Timeout::new(RESTORE_AFTER_MS, move || {
            button.set_inner_html(end_flash(&button.class_list()));
        })
        .forget();
    }

    /// Copy the text of `#element_id` and flash the button label.
    #[wasm_bindgen]
    pub fn copy_code(element_id: &str, button: HtmlElement) {
        let text = match dom::document().map(|d| dom::find_id(&d, element_id)) {
            Ok(Some(element)) => element.text_content().unwrap_or_default(),
            Ok(None) => {
                log::warn!("copy source #{element_id} not found");
                return;
            }
            Err(e) => {
                log::warn!("copy failed: {e}");
                return;
            }
        };
        let clipboard = match dom::window() {
            Ok(window) => window.navigator().clipboard(),
            Err(e) => {
                log::warn!("copy failed: {e}");
                return;
            }
        };

        spawn_local(async move {
            match JsFuture::from(clipboard.write_text(&text)).await {
                Ok(_) => show_copied(&button),
                Err(e) => log::error!("failed to copy: {}", dom::describe(&e)),
            }
        });
    }
}
