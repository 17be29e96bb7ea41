use super::*;

use crate::test_support::FakeClasses;

#[test]
fn toggle_opens_collapsed_section_and_rotates_icon() {
    let section = FakeClasses::with(&[HIDDEN, "p-4"]);
    let icon = FakeClasses::default();

    assert!(toggle_section(&section, Some(&icon)));

    assert!(!section.contains(HIDDEN));
    assert!(section.contains("p-4"));
    assert!(icon.contains(ICON_ROTATED_CLASS));
}

#[test]
fn second_toggle_restores_both() {
    let section = FakeClasses::with(&[HIDDEN]);
    let icon = FakeClasses::default();

    toggle_section(&section, Some(&icon));
    assert!(!toggle_section(&section, Some(&icon)));

    assert!(section.contains(HIDDEN));
    assert!(icon.snapshot().is_empty());
}

#[test]
fn missing_icon_is_tolerated() {
    let section = FakeClasses::default();
    assert!(!toggle_section(&section, None::<&FakeClasses>));
    assert!(section.contains(HIDDEN));
}
