//! Class-list abstraction.
//!
//! Implemented for `web_sys::DomTokenList` under `hydrate`, and by a plain
//! set in tests.

#[cfg(test)]
#[path = "classes_test.rs"]
mod classes_test;

/// Tailwind's visibility utility, used by every show/hide toggle.
pub const HIDDEN: &str = "hidden";

pub trait ClassList {
    fn add(&self, class: &str);
    fn remove(&self, class: &str);
    fn contains(&self, class: &str) -> bool;

    /// Add when `on`, remove otherwise.
    fn set(&self, class: &str, on: bool) {
        if on {
            self.add(class);
        } else {
            self.remove(class);
        }
    }

    /// Flip `class`; returns whether it is now present.
    fn toggle(&self, class: &str) -> bool {
        let next = !self.contains(class);
        self.set(class, next);
        next
    }
}

/// Show or hide via the `hidden` class.
pub fn set_visible(list: &impl ClassList, visible: bool) {
    list.set(HIDDEN, !visible);
}

#[cfg(feature = "hydrate")]
impl ClassList for web_sys::DomTokenList {
    fn add(&self, class: &str) {
        if let Err(e) = self.add_1(class) {
            log::debug!("classList.add({class}) failed: {e:?}");
        }
    }

    fn remove(&self, class: &str) {
        if let Err(e) = self.remove_1(class) {
            log::debug!("classList.remove({class}) failed: {e:?}");
        }
    }

    fn contains(&self, class: &str) -> bool {
        web_sys::DomTokenList::contains(self, class)
    }
}
