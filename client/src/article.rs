//! Marks the category link that points at the current page.

#[cfg(test)]
#[path = "article_test.rs"]
mod article_test;

pub const LINK_SELECTOR: &str = ".category-link";
pub const PATH_ATTRIBUTE: &str = "data-path";
pub const ACTIVE_CLASSES: [&str; 4] = ["bg-blue-100", "dark:bg-gray-800", "text-blue-700", "font-bold"];

const INDEX_SUFFIX: &str = "/index.html";

/// Comparable form of a site path: no outer slashes, no trailing
/// `/index.html` (any case), lower-cased.
pub fn normalize_path(path: &str) -> String {
    let trimmed = path.trim_matches('/');
    let split = trimmed.len().saturating_sub(INDEX_SUFFIX.len());
    let without_index = match trimmed.get(split..) {
        Some(tail) if tail.eq_ignore_ascii_case(INDEX_SUFFIX) => &trimmed[..split],
        _ => trimmed,
    };
    without_index.to_lowercase()
}

pub fn is_current(link_path: &str, current_path: &str) -> bool {
    normalize_path(link_path) == normalize_path(current_path)
}

#[cfg(feature = "hydrate")]
pub use browser::mark_current_category;

#[cfg(feature = "hydrate")]
mod browser {
    use web_sys::Document;

    use super::*;
    use crate::util::classes::ClassList;
    use crate::util::dom;

    /// Returns how many links were marked.
    pub fn mark_current_category(document: &Document, pathname: &str) -> usize {
        let mut marked = 0;
        for link in dom::query_all(document, LINK_SELECTOR) {
            let link_path = link.get_attribute(PATH_ATTRIBUTE).unwrap_or_default();
            if is_current(&link_path, pathname) {
                let classes = link.class_list();
                for class in ACTIVE_CLASSES {
                    ClassList::add(&classes, class);
                }
                marked += 1;
            }
        }
        marked
    }
}
