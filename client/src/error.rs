//! Client error type.
//!
//! ERROR HANDLING
//! ==============
//! Controllers fail fast at bind time with [`ClientError::MissingElement`]
//! when a page carries part of a widget but not the rest. Runtime failures
//! (storage, fetch) are recovered where they happen and only logged.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    /// The page has no `window`/`document` (non-browser host).
    #[error("browser environment unavailable")]
    NoBrowser,

    /// A required element is absent.
    #[error("required element missing: {selector}")]
    MissingElement { selector: String },

    /// An element exists but is not the expected kind.
    #[error("element {selector} is not a {expected}")]
    WrongElement { selector: String, expected: &'static str },

    /// The page configuration document could not be parsed.
    #[error("config parse failed: {0}")]
    Config(String),

    /// A DOM call threw.
    #[error("dom call failed: {0}")]
    Dom(String),
}

impl ClientError {
    pub fn missing(selector: impl Into<String>) -> Self {
        Self::MissingElement { selector: selector.into() }
    }
}
