use super::*;

#[test]
fn exact_route_is_active() {
    assert!(is_active_path("/users", "/users"));
}

#[test]
fn child_route_keeps_parent_active() {
    assert!(is_active_path("/courses/12", "/courses"));
}

#[test]
fn shared_prefix_is_not_a_match() {
    assert!(!is_active_path("/users-archive", "/users"));
    assert!(!is_active_path("/dashboard", "/users"));
}

#[test]
fn every_nav_item_has_a_translated_label() {
    for &(_, key, _) in NAV_ITEMS {
        assert_ne!(tr(Language::En, key), key, "missing translation for {key}");
    }
}
