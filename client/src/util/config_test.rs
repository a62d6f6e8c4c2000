use super::*;

#[test]
fn meta_tag_wins() {
    assert_eq!(
        resolve_base_url(Some("https://api.academy.test/v1/".to_owned()), Some("/build")),
        "https://api.academy.test/v1"
    );
}

#[test]
fn blank_meta_falls_back_to_build_time_value() {
    assert_eq!(resolve_base_url(Some("  ".to_owned()), Some("/build/")), "/build");
}

#[test]
fn default_when_nothing_is_configured() {
    assert_eq!(resolve_base_url(None, None), DEFAULT_API_BASE_URL);
    assert_eq!(resolve_base_url(None, Some("/")), DEFAULT_API_BASE_URL);
}
