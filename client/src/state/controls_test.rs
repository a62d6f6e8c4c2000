use super::*;
use crate::net::types::Role;

// =============================================================
// SearchState
// =============================================================

#[test]
fn typing_does_not_commit_query() {
    let mut search = SearchState::default();
    search.set_term("rust");
    assert_eq!(search.term, "rust");
    assert_eq!(search.query, "");
}

#[test]
fn enter_commits_term() {
    let mut search = SearchState::default();
    search.set_term("rust");
    assert!(!search.on_key("a"));
    assert!(search.on_key("Enter"));
    assert_eq!(search.query, "rust");
    assert!(!search.on_key("Enter"));
}

#[test]
fn clear_resets_term_and_query() {
    let mut search = SearchState::default();
    search.set_term("rust");
    search.submit();
    search.clear();
    assert_eq!(search, SearchState::default());
}

// =============================================================
// FilterState
// =============================================================

#[test]
fn all_sentinel_clears_filter() {
    let mut filter = FilterState::<Role>::default();
    filter.select("admin");
    assert_eq!(filter.selected, Some(Role::Admin));
    filter.select("all");
    assert_eq!(filter.selected, None);
}

#[test]
fn unknown_filter_value_clears_filter() {
    let mut filter = FilterState::<u64>::default();
    filter.select("7");
    assert!(filter.is_active());
    filter.select("seven");
    assert!(!filter.is_active());
}

// =============================================================
// PaginationState
// =============================================================

#[test]
fn same_page_change_is_noop() {
    let mut pagination = PaginationState::default();
    assert_eq!(pagination.change_page(1), None);
    assert!(!pagination.changing);
}

#[test]
fn changing_flag_settles_only_for_latest_token() {
    let mut pagination = PaginationState::default();
    let first = pagination.change_page(2).unwrap();
    let second = pagination.change_page(3).unwrap();
    pagination.settle(first);
    assert!(pagination.changing);
    pagination.settle(second);
    assert!(!pagination.changing);
    assert_eq!(pagination.page, 3);
}

// =============================================================
// LoadingIndicator
// =============================================================

#[test]
fn indicator_stays_visible_until_settled() {
    let mut indicator = LoadingIndicator::default();
    assert_eq!(indicator.observe(true), None);
    assert!(indicator.visible);
    let token = indicator.observe(false).unwrap();
    assert!(indicator.visible);
    indicator.settle(token);
    assert!(!indicator.visible);
}

#[test]
fn refetch_before_settle_keeps_indicator_visible() {
    let mut indicator = LoadingIndicator::default();
    indicator.observe(true);
    let token = indicator.observe(false).unwrap();
    indicator.observe(true);
    indicator.settle(token);
    assert!(indicator.visible);
}

#[test]
fn idle_indicator_needs_no_settle() {
    let mut indicator = LoadingIndicator::default();
    assert_eq!(indicator.observe(false), None);
}

// =============================================================
// page_window
// =============================================================

use PageSlot::{Ellipsis, Page};

#[test]
fn window_for_small_totals_lists_every_page() {
    assert_eq!(page_window(1, 1), vec![Page(1)]);
    assert_eq!(page_window(2, 3), vec![Page(1), Page(2), Page(3)]);
}

#[test]
fn window_in_the_middle_has_both_ellipses() {
    assert_eq!(page_window(5, 10), vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]);
}

#[test]
fn window_at_edges() {
    assert_eq!(page_window(1, 10), vec![Page(1), Page(2), Ellipsis, Page(10)]);
    assert_eq!(page_window(10, 10), vec![Page(1), Ellipsis, Page(9), Page(10)]);
    assert_eq!(page_window(3, 10), vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(10)]);
}

#[test]
fn window_clamps_out_of_range_current() {
    assert_eq!(page_window(9, 2), vec![Page(1), Page(2)]);
}
