//! Lazy syntax highlighting: highlight.js is only fetched on pages with code blocks.

use gloo_events::EventListener;
use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlScriptElement};

use crate::config::HighlightConfig;
use crate::error::ClientError;
use crate::util::dom;

const GLOBAL: &str = "hljs";
const ENTRY_POINT: &str = "highlightAll";

fn highlight_all() -> Result<(), JsValue> {
    let global = js_sys::global();
    let hljs = Reflect::get(&global, &JsValue::from_str(GLOBAL))?;
    let run: Function = Reflect::get(&hljs, &JsValue::from_str(ENTRY_POINT))?.dyn_into()?;
    run.call0(&hljs).map(drop)
}

/// Injected loader; dropping it detaches the `load` listener.
pub struct Highlighter {
    _on_load: EventListener,
}

impl Highlighter {
    /// `Ok(None)` when the page has no code blocks.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Dom`] if the script element cannot be created or appended.
    pub fn bind(document: &Document, config: &HighlightConfig) -> Result<Option<Self>, ClientError> {
        if dom::query(document, &config.code_selector).is_none() {
            return Ok(None);
        }
        let Some(body) = document.body() else {
            return Ok(None);
        };

        let script: HtmlScriptElement = dom::cast(dom::create(document, "script", &[])?, "script", "HtmlScriptElement")?;
        script.set_src(&config.script_url);

        let on_load = EventListener::once(&script, "load", |_| match highlight_all() {
            Ok(()) => log::debug!("code blocks highlighted"),
            Err(e) => log::warn!("highlight.js failed: {}", dom::describe(&e)),
        });
        body.append_child(&script).map_err(|e| ClientError::Dom(dom::describe(&e)))?;

        Ok(Some(Self { _on_load: on_load }))
    }
}
