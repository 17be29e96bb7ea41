use super::*;

#[test]
fn defaults_match_site_templates() {
    let config = ClientConfig::default();
    assert_eq!(config.storage.theme, "theme-preference");
    assert_eq!(config.storage.language, "selectedLanguage");
    assert_eq!(config.storage.consent, "pdpaAccepted");
    assert_eq!(config.search.index_url, "/releases.json");
    assert_eq!(config.search.debounce_ms, 300);
    assert_eq!(config.search.modal_id, "searchModal");
    assert_eq!(config.back_to_top.threshold_px, 100.0);
    assert!(config.search.clear_button_id.is_none());
}

#[test]
fn partial_override_keeps_other_defaults() {
    let config = ClientConfig::from_json(r#"{"search":{"debounce_ms":150,"clear_button_id":"searchClear"}}"#)
        .expect("config");
    assert_eq!(config.search.debounce_ms, 150);
    assert_eq!(config.search.clear_button_id.as_deref(), Some("searchClear"));
    assert_eq!(config.search.index_url, "/releases.json");
    assert_eq!(config.consent, ConsentConfig::default());
}

#[test]
fn empty_object_is_default() {
    assert_eq!(ClientConfig::from_json("{}").expect("config"), ClientConfig::default());
}

#[test]
fn malformed_json_is_config_error() {
    let err = ClientConfig::from_json("{search:").expect_err("should fail");
    assert!(matches!(err, ClientError::Config(_)));
}

#[test]
fn optional_json_falls_back_on_absence_blank_and_error() {
    assert_eq!(ClientConfig::from_optional_json(None), ClientConfig::default());
    assert_eq!(ClientConfig::from_optional_json(Some("   \n")), ClientConfig::default());
    assert_eq!(ClientConfig::from_optional_json(Some("42")), ClientConfig::default());
}

#[test]
fn language_containers_cover_all_template_variants() {
    let selectors = LanguageConfig::default().container_selectors;
    assert_eq!(selectors.len(), 4);
    assert!(selectors.iter().any(|s| s == "[data-language-switcher]"));
}
