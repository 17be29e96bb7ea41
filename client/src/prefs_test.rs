use super::*;

use crate::test_support::MemoryStore;

fn prefs() -> Preferences<MemoryStore> {
    Preferences::new(MemoryStore::default(), StorageKeys::default())
}

#[test]
fn empty_store_reads_as_absent() {
    let prefs = prefs();
    assert_eq!(prefs.theme(), None);
    assert_eq!(prefs.language(), None);
    assert!(!prefs.consent_accepted());
}

#[test]
fn theme_round_trips_under_template_key() {
    let prefs = prefs();
    prefs.set_theme(Theme::Dark);
    assert_eq!(prefs.store.get("theme-preference").as_deref(), Some("dark"));
    assert_eq!(prefs.theme(), Some(Theme::Dark));

    prefs.clear_theme();
    assert_eq!(prefs.theme(), None);
}

#[test]
fn unknown_stored_values_read_as_absent() {
    let prefs = prefs();
    prefs.store.set("theme-preference", "sepia");
    prefs.store.set("selectedLanguage", "fr");
    assert_eq!(prefs.theme(), None);
    assert_eq!(prefs.language(), None);
}

#[test]
fn language_is_stored_as_code() {
    let prefs = prefs();
    prefs.set_language(Language::En);
    assert_eq!(prefs.store.get("selectedLanguage").as_deref(), Some("en"));
    assert_eq!(prefs.language(), Some(Language::En));
}

#[test]
fn consent_is_stored_as_true_flag() {
    let prefs = prefs();
    prefs.accept_consent();
    assert!(prefs.consent_accepted());
    assert_eq!(prefs.store.get("pdpaAccepted").as_deref(), Some("true"));
}

#[test]
fn custom_keys_are_used() {
    let keys = StorageKeys { theme: "t".to_owned(), ..StorageKeys::default() };
    let prefs = Preferences::new(MemoryStore::default(), keys);
    prefs.set_theme(Theme::Light);
    assert_eq!(prefs.store.get("t").as_deref(), Some("light"));
    assert_eq!(prefs.store.get("theme-preference"), None);
}

#[test]
fn memory_store_remove_is_idempotent() {
    let store = MemoryStore::default();
    store.remove("missing");
    store.set("k", "v");
    store.remove("k");
    store.remove("k");
    assert_eq!(store.get("k"), None);
}
