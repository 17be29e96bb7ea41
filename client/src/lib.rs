//! # genweb-client
//!
//! Browser behaviour for the statically generated blog, compiled to
//! WebAssembly. Pages are plain HTML; on load the client binds to the
//! markup it finds and leaves everything else alone.
//!
//! Every controller is split into a pure core that compiles and tests
//! natively and a `hydrate`-only binding that owns its DOM listeners.
//! Dropping a binding detaches it.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Element ids, storage keys, and tunables with page overrides |
//! | [`prefs`] | Typed `localStorage` access behind [`prefs::KeyValueStore`] |
//! | [`theme`] | Dark/light theme resolution, OS tracking, toggle |
//! | [`nav`] | Mobile navigation drawer |
//! | [`consent`] | Personal-data consent banner |
//! | [`language`] | Thai/English path mapping, redirect, switcher dropdown |
//! | [`search`] | Post index fetch, filtering, debounced rendering |
//! | [`search_modal`] | Search overlay open/close shortcuts |
//! | [`back_to_top`] | Scroll-dependent back-to-top link |
//! | [`accordion`] | `data-accordion-target` sections |
//! | [`article`] | Current category link marking |
//! | `highlight` | Lazy highlight.js loading (`hydrate` only) |
//! | [`copy`] | Copy button flash state; `copy_code` export (`hydrate` only) |
//! | `page` | Bootstrap and `teardown` (`hydrate` only) |
//! | [`util`] | Class-list seam and DOM helpers |
//! | [`error`] | Client error type |

pub mod accordion;
pub mod article;
pub mod back_to_top;
pub mod config;
pub mod consent;
pub mod copy;
pub mod error;
pub mod language;
pub mod nav;
pub mod prefs;
pub mod search;
pub mod search_modal;
pub mod theme;
pub mod util;

#[cfg(feature = "hydrate")]
pub mod highlight;
#[cfg(feature = "hydrate")]
mod page;

#[cfg(feature = "hydrate")]
pub use page::{start, teardown};

#[cfg(test)]
pub(crate) mod test_support;
