//! Utility helpers shared across the page controllers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `classes` is the seam between controller logic and the DOM class list so
//! visibility rules can be tested natively. `dom` holds the hydrate-only
//! element lookup and event glue.

pub mod classes;
#[cfg(feature = "hydrate")]
pub mod dom;
