use super::*;

use crate::test_support::FakeClasses;

#[test]
fn first_click_flashes_copied_label() {
    let button = FakeClasses::with(&["copy-button"]);
    assert_eq!(begin_flash(&button), Some(COPIED_LABEL));
    assert!(button.contains(COPIED_CLASS));
}

#[test]
fn click_during_flash_does_not_start_another() {
    let button = FakeClasses::default();
    assert!(begin_flash(&button).is_some());
    assert_eq!(begin_flash(&button), None);
    assert!(button.contains(COPIED_CLASS));
}

#[test]
fn end_restores_fixed_copy_label_even_after_repeat_clicks() {
    let button = FakeClasses::default();
    begin_flash(&button);
    begin_flash(&button);

    assert_eq!(end_flash(&button), COPY_LABEL);
    assert!(!button.contains(COPIED_CLASS));

    // The next click flashes again instead of sticking.
    assert_eq!(begin_flash(&button), Some(COPIED_LABEL));
}

#[test]
fn labels_differ() {
    assert!(COPY_LABEL.ends_with("Copy"));
    assert!(COPIED_LABEL.ends_with("Copied!"));
}
