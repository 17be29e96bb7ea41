use super::*;

use crate::test_support::FakeClasses;
use crate::util::classes::HIDDEN;

#[test]
fn escape_closes_regardless_of_ctrl() {
    assert_eq!(shortcut("Escape", false), Some(ModalCommand::Close));
    assert_eq!(shortcut("Escape", true), Some(ModalCommand::Close));
}

#[test]
fn ctrl_k_opens() {
    assert_eq!(shortcut("k", true), Some(ModalCommand::Open));
}

#[test]
fn plain_k_and_other_keys_are_ignored() {
    assert_eq!(shortcut("k", false), None);
    assert_eq!(shortcut("j", true), None);
    assert_eq!(shortcut("Enter", false), None);
}

#[test]
fn open_shows_overlay_and_locks_scroll() {
    let modal = FakeClasses::with(&[HIDDEN, "fixed"]);
    let body = FakeClasses::default();

    apply(&modal, &body, ModalCommand::Open);

    assert!(!modal.contains(HIDDEN));
    assert!(modal.contains("fixed"));
    assert!(body.contains(SCROLL_LOCK_CLASS));
}

#[test]
fn close_hides_overlay_and_unlocks_scroll() {
    let modal = FakeClasses::default();
    let body = FakeClasses::with(&[SCROLL_LOCK_CLASS]);

    apply(&modal, &body, ModalCommand::Close);
    apply(&modal, &body, ModalCommand::Close);

    assert!(modal.contains(HIDDEN));
    assert!(!body.contains(SCROLL_LOCK_CLASS));
}
