use super::*;
use crate::test_support::FakeClasses;

#[test]
fn set_adds_and_removes() {
    let list = FakeClasses::default();
    list.set("dark", true);
    assert!(list.contains("dark"));
    list.set("dark", false);
    assert!(!list.contains("dark"));
}

#[test]
fn toggle_reports_new_state() {
    let list = FakeClasses::default();
    assert!(list.toggle("rotate-180"));
    assert!(!list.toggle("rotate-180"));
}

#[test]
fn visibility_is_inverse_of_hidden_class() {
    let list = FakeClasses::with(&["py-2"]);
    assert!(!list.contains(HIDDEN));
    set_visible(&list, false);
    assert!(list.contains(HIDDEN));
    
    set_visible(&list, true);
    assert!(!list.contains(HIDDEN));
    assert!(list.contains("py-2"));
}
