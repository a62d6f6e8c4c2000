//! Search, filter, pagination and loading-indicator interaction state.
//!
//! DESIGN
//! ======
//! Each primitive is a small state machine with no knowledge of the others.
//! Resetting the page when a search or filter changes is the owning screen's
//! job. Timers live in the view layer: the primitives hand out tokens and only
//! the newest token may settle a transient flag.

#[cfg(test)]
#[path = "controls_test.rs"]
mod controls_test;

use std::str::FromStr;

/// Delay before a transient loading flag clears.
pub const SETTLE_DELAY_MS: u32 = 300;

/// Sentinel select value meaning "no filter".
pub const ALL: &str = "all";

/// Live search input (`term`) and the committed query that drives fetches.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchState {
    pub term: String,
    pub query: String,
}

impl SearchState {
    pub fn set_term(&mut self, term: &str) {
        self.term = term.to_owned();
    }

    /// Commit the current term. Returns `true` when the query changed.
    pub fn submit(&mut self) -> bool {
        if self.query == self.term {
            return false;
        }
        self.query.clone_from(&self.term);
        true
    }

    /// Keyboard handler: Enter commits.
    pub fn on_key(&mut self, key: &str) -> bool {
        key == "Enter" && self.submit()
    }

    pub fn clear(&mut self) {
        self.term.clear();
        self.query.clear();
    }
}

/// Single-select filter where the `"all"` sentinel means no filter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterState<T> {
    pub selected: Option<T>,
}

impl<T> Default for FilterState<T> {
    fn default() -> Self {
        Self { selected: None }
    }
}

impl<T: FromStr> FilterState<T> {
    /// Apply a raw select value. Blank, `"all"` and unparseable values clear
    /// the filter.
    pub fn select(&mut self, raw: &str) {
        let raw = raw.trim();
        self.selected = if raw.is_empty() || raw == ALL { None } else { raw.parse().ok() };
    }
}

impl<T> FilterState<T> {
    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn is_active(&self) -> bool {
        self.selected.is_some()
    }
}

/// Current page plus a transient "page is changing" flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaginationState {
    pub page: u32,
    pub changing: bool,
    token: u64,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self { page: 1, changing: false, token: 0 }
    }
}

impl PaginationState {
    /// Move to `page`. Returns the settle token to pass to [`Self::settle`]
    /// after [`SETTLE_DELAY_MS`], or `None` when already on that page.
    pub fn change_page(&mut self, page: u32) -> Option<u64> {
        if page == self.page {
            return None;
        }
        self.page = page;
        self.changing = true;
        self.token += 1;
        Some(self.token)
    }

    /// Clear the changing flag unless a newer change has started.
    pub fn settle(&mut self, token: u64) {
        if token == self.token {
            self.changing = false;
        }
    }

    /// Back to page 1 without raising the changing flag.
    pub fn reset(&mut self) {
        self.page = 1;
    }
}

/// Loading overlay that shows while fetching and hides a short delay after
/// fetching stops.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadingIndicator {
    pub visible: bool,
    token: u64,
}

impl LoadingIndicator {
    /// Feed the current fetch state. Returns a settle token when the overlay
    /// should hide after the delay.
    pub fn observe(&mut self, fetching: bool) -> Option<u64> {
        self.token += 1;
        if fetching {
            self.visible = true;
            return None;
        }
        self.visible.then_some(self.token)
    }

    pub fn settle(&mut self, token: u64) {
        if token == self.token {
            self.visible = false;
        }
    }
}

/// One slot of the pagination bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageSlot {
    Page(u32),
    Ellipsis,
}

/// Page buttons to show: the first page, the current page with its direct
/// neighbours, and the last page, with ellipses over the gaps.
pub fn page_window(current: u32, total: u32) -> Vec<PageSlot> {
    let total = total.max(1);
    let current = current.clamp(1, total);
    let low = current.saturating_sub(1).max(1);
    let high = current.saturating_add(1).min(total);

    let mut slots = Vec::new();
    if low > 1 {
        slots.push(PageSlot::Page(1));
        if low > 2 {
            slots.push(PageSlot::Ellipsis);
        }
    }
    slots.extend((low..=high).map(PageSlot::Page));
    if high < total {
        if high + 1 < total {
            slots.push(PageSlot::Ellipsis);
        }
        slots.push(PageSlot::Page(total));
    }
    slots
}
