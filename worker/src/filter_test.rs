use super::*;

const ORIGIN: &str = "https://genwebblog.com";

fn same_origin(path: &str) -> RequestTarget {
    RequestTarget::new(ORIGIN, path, format!("{ORIGIN}{path}"))
}

#[test]
fn same_origin_page_is_intercepted() {
    let config = WorkerConfig::default();
    assert_eq!(bypass_reason(&same_origin("/posts/hello.html"), ORIGIN, &config), None);
}

#[test]
fn cross_origin_is_bypassed() {
    let config = WorkerConfig::default();
    let target = RequestTarget::new(
        "https://fonts.example.com",
        "/font.woff2",
        "https://fonts.example.com/font.woff2",
    );
    assert_eq!(bypass_reason(&target, ORIGIN, &config), Some(Bypass::CrossOrigin));
}

#[test]
fn cdn_edge_path_is_bypassed() {
    let config = WorkerConfig::default();
    let target = same_origin("/cdn-cgi/challenge-platform/scripts/jsd/main.js");
    assert_eq!(bypass_reason(&target, ORIGIN, &config), Some(Bypass::PathPrefix));
}

#[test]
fn cdn_prefix_must_lead_the_path() {
    let config = WorkerConfig::default();
    assert_eq!(bypass_reason(&same_origin("/docs/cdn-cgi/notes.html"), ORIGIN, &config), None);
}

#[test]
fn analytics_and_ad_substrings_are_bypassed() {
    let config = WorkerConfig::default();
    for path in [
        "/pagead/js/adsbygoogle.js",
        "/googlesyndication/frame.html",
        "/cloudflareinsights/report",
        "/static/beacon.min.js",
    ] {
        assert_eq!(
            bypass_reason(&same_origin(path), ORIGIN, &config),
            Some(Bypass::UrlSubstring),
            "{path}"
        );
    }
}

#[test]
fn substring_match_covers_query_string() {
    let config = WorkerConfig::default();
    let target = RequestTarget::new(ORIGIN, "/script.js", format!("{ORIGIN}/script.js?src=adsbygoogle"));
    assert_eq!(bypass_reason(&target, ORIGIN, &config), Some(Bypass::UrlSubstring));
}

#[test]
fn cross_origin_wins_over_other_rules() {
    let config = WorkerConfig::default();
    let target = RequestTarget::new(
        "https://static.cloudflareinsights.com",
        "/beacon.min.js",
        "https://static.cloudflareinsights.com/beacon.min.js",
    );
    assert_eq!(bypass_reason(&target, ORIGIN, &config), Some(Bypass::CrossOrigin));
}

#[test]
fn custom_rules_are_honored() {
    let config = WorkerConfig {
        bypass_path_prefixes: vec!["/api/".to_owned()],
        bypass_url_substrings: Vec::new(),
        ..WorkerConfig::default()
    };
    assert_eq!(bypass_reason(&same_origin("/api/x"), ORIGIN, &config), Some(Bypass::PathPrefix));
    assert_eq!(bypass_reason(&same_origin("/cdn-cgi/x"), ORIGIN, &config), None);
}
