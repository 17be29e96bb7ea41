//! Shared fakes for native unit tests.

use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};

use crate::prefs::KeyValueStore;
use crate::util::classes::ClassList;

/// Key-value store backed by a map.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}

/// Class list backed by a set.
#[derive(Debug, Default)]
pub struct FakeClasses(RefCell<BTreeSet<String>>);

impl FakeClasses {
    pub fn with(classes: &[&str]) -> Self {
        Self(RefCell::new(classes.iter().map(|c| (*c).to_owned()).collect()))
    }

    pub fn snapshot(&self) -> BTreeSet<String> {
        self.0.borrow().clone()
    }
}

impl ClassList for FakeClasses {
    fn add(&self, class: &str) {
        self.0.borrow_mut().insert(class.to_owned());
    }

    fn remove(&self, class: &str) {
        self.0.borrow_mut().remove(class);
    }

    fn contains(&self, class: &str) -> bool {
        self.0.borrow().contains(class)
    }
}
