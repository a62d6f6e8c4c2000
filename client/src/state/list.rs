//! List-state controller shared by the courses and users screens.
//!
//! SYSTEM CONTEXT
//! ==============
//! A list screen owns one `ListState` behind an `RwSignal`. The screen feeds
//! it server pages (through the shared [`QueryCache`]) and user interaction
//! (search, filters, page changes); the state derives the rows to render.
//!
//! DESIGN
//! ======
//! Two paging modes exist:
//! - `Server`: search and filters are request parameters, so the visible rows
//!   are exactly the current server page.
//! - `Client`: the first page is shown immediately while the remaining pages
//!   are aggregated in ascending order. Filtering and slicing then run over the
//!   whole dataset.
//!
//! Every load takes a generation number from [`ListState::begin_load`]. Results
//! carrying an older generation are dropped, so a slow response can never
//! overwrite the outcome of a newer query.

#[cfg(test)]
#[path = "list_test.rs"]
mod list_test;

use crate::net::error::ApiError;
use crate::query::cache::{Fetch, QueryCache, QueryKey};

/// One page of a paged resource.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_items: u64,
    pub total_pages: u32,
    /// 1-based, always within `1..=total_pages`.
    pub page_index: u32,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total_items: u64, page_size: u32, page_index: u32) -> Self {
        let total_pages = page_count(total_items, page_size);
        Self { items, total_items, total_pages, page_index: page_index.clamp(1, total_pages) }
    }

    /// Build a page from server-reported counters. A zero page count is
    /// recomputed from `total_items`.
    pub fn from_server(items: Vec<T>, total_items: u64, total_pages: u32, current_page: u32, page_size: u32) -> Self {
        let total_pages = if total_pages == 0 { page_count(total_items, page_size) } else { total_pages };
        Self { items, total_items, total_pages, page_index: current_page.clamp(1, total_pages) }
    }
}

/// Number of pages needed for `total_items`; never less than one.
pub fn page_count(total_items: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 1;
    }
    let pages = total_items.div_ceil(u64::from(page_size)).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Rows `[(page-1)*page_size, page*page_size)` of `rows`.
pub fn slice_page<T: Clone>(rows: &[T], page: u32, page_size: u32) -> Vec<T> {
    let size = page_size as usize;
    let start = (page.max(1) as usize - 1).saturating_mul(size);
    rows.iter().skip(start).take(size).cloned().collect()
}

/// Union of every fetched page of a resource, in ascending page order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AggregateDataset<T> {
    pub items: Vec<T>,
    pub total_pages: u32,
    pub failed_pages: Vec<u32>,
    last_page: u32,
    complete: bool,
}

impl<T> AggregateDataset<T> {
    pub fn from_first_page(first: Page<T>) -> Self {
        Self {
            items: first.items,
            total_pages: first.total_pages,
            failed_pages: Vec::new(),
            last_page: 1,
            complete: first.total_pages <= 1,
        }
    }

    /// Pages still to be fetched after the first one.
    pub fn remaining_pages(&self) -> std::ops::RangeInclusive<u32> {
        (self.last_page + 1)..=self.total_pages
    }

    /// Append the next page's rows.
    pub fn append(&mut self, items: Vec<T>) {
        self.items.extend(items);
        self.last_page += 1;
    }

    /// Record that the next page could not be fetched.
    pub fn skip(&mut self, page: u32) {
        self.failed_pages.push(page);
        self.last_page += 1;
    }

    pub fn finish(&mut self) {
        self.complete = true;
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }
}

/// Free-text search over a row.
pub trait Searchable {
    /// `needle` is already trimmed and lowercased and never empty.
    fn matches_search(&self, needle: &str) -> bool;
}

/// Case-insensitive substring test against a lowercased needle.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Exact-match row predicate with an "all" state that matches everything.
pub trait RowFilter<T> {
    fn matches(&self, row: &T) -> bool;
    fn is_cleared(&self) -> bool;
}

impl<T> RowFilter<T> for () {
    fn matches(&self, _row: &T) -> bool {
        true
    }

    fn is_cleared(&self) -> bool {
        true
    }
}

/// User-controlled query over a list. Every mutation other than a page change
/// sends the user back to page 1.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListQuery<F> {
    pub page: u32,
    pub page_size: u32,
    pub search_term: String,
    pub filter: F,
}

impl<F: Default> ListQuery<F> {
    pub fn new(page_size: u32) -> Self {
        Self { page: 1, page_size: page_size.max(1), search_term: String::new(), filter: F::default() }
    }

    pub fn set_search_term(&mut self, term: &str) {
        self.search_term = term.to_owned();
        self.page = 1;
    }

    pub fn set_filter(&mut self, filter: F) {
        self.filter = filter;
        self.page = 1;
    }

    pub fn clear_filters(&mut self) {
        self.search_term.clear();
        self.filter = F::default();
        self.page = 1;
    }

    /// Lowercased, trimmed search term, or `None` when blank.
    pub fn needle(&self) -> Option<String> {
        let needle = self.search_term.trim().to_lowercase();
        (!needle.is_empty()).then_some(needle)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PagingMode {
    /// Rows are the current server page.
    Server,
    /// Rows are sliced from the client-side aggregate.
    Client,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListStatus {
    Loading,
    Ready,
    Failed(ApiError),
}

/// Derived view state of one list screen.
#[derive(Clone, Debug)]
pub struct ListState<T, F> {
    pub mode: PagingMode,
    pub query: ListQuery<F>,
    pub status: ListStatus,
    generation: u64,
    current: Option<Page<T>>,
    dataset: Option<AggregateDataset<T>>,
}

impl<T, F> ListState<T, F>
where
    T: Clone + Searchable,
    F: Default + RowFilter<T>,
{
    pub fn new(mode: PagingMode, page_size: u32) -> Self {
        Self {
            mode,
            query: ListQuery::new(page_size),
            status: ListStatus::Loading,
            generation: 0,
            current: None,
            dataset: None,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Start a new load and return its generation. Previously shown rows stay
    /// visible until the result arrives.
    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.status = ListStatus::Loading;
        if self.mode == PagingMode::Client {
            self.dataset = None;
        }
        self.generation
    }

    fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }

    /// Apply a loaded page. Returns `false` if the load was superseded.
    pub fn apply_page(&mut self, generation: u64, page: Page<T>) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        self.current = Some(page);
        self.status = ListStatus::Ready;
        true
    }

    /// Install the finished aggregate. Returns `false` if superseded.
    pub fn apply_dataset(&mut self, generation: u64, dataset: AggregateDataset<T>) -> bool {
        if !self.is_current(generation) || self.mode != PagingMode::Client {
            return false;
        }
        self.dataset = Some(dataset);
        true
    }

    /// Record a failed load. Returns `false` if superseded.
    pub fn fail(&mut self, generation: u64, error: ApiError) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        self.current = None;
        self.dataset = None;
        self.status = ListStatus::Failed(error);
        true
    }

    pub fn is_loading(&self) -> bool {
        self.status == ListStatus::Loading
    }

    pub fn error(&self) -> Option<&ApiError> {
        match &self.status {
            ListStatus::Failed(error) => Some(error),
            _ => None,
        }
    }

    pub fn aggregation_complete(&self) -> bool {
        self.dataset.as_ref().is_some_and(AggregateDataset::is_complete)
    }

    /// Pages that could not be aggregated.
    pub fn failed_pages(&self) -> &[u32] {
        self.dataset.as_ref().map_or(&[], |d| d.failed_pages.as_slice())
    }

    /// Rows before filtering: the aggregate once complete, otherwise the
    /// loaded page.
    pub fn source_rows(&self) -> &[T] {
        if self.error().is_some() {
            return &[];
        }
        if let Some(dataset) = self.dataset.as_ref().filter(|d| d.is_complete()) {
            return &dataset.items;
        }
        self.current.as_ref().map_or(&[], |page| page.items.as_slice())
    }

    /// Item count reported by the server for the whole resource.
    pub fn total_items(&self) -> u64 {
        self.current.as_ref().map_or(0, |page| page.total_items)
    }

    pub fn filtered_rows(&self) -> Vec<T> {
        let rows = self.source_rows();
        if self.mode == PagingMode::Server {
            return rows.to_vec();
        }
        let needle = self.query.needle();
        rows.iter()
            .filter(|row| needle.as_deref().is_none_or(|n| row.matches_search(n)))
            .filter(|row| self.query.filter.matches(row))
            .cloned()
            .collect()
    }

    pub fn visible_rows(&self) -> Vec<T> {
        let filtered = self.filtered_rows();
        match self.mode {
            PagingMode::Server => filtered,
            PagingMode::Client => slice_page(&filtered, self.query.page, self.query.page_size),
        }
    }

    pub fn total_pages(&self) -> u32 {
        match self.mode {
            PagingMode::Server => self.current.as_ref().map_or(1, |page| page.total_pages),
            PagingMode::Client => page_count(self.filtered_rows().len() as u64, self.query.page_size),
        }
    }

    pub fn set_search_term(&mut self, term: &str) {
        self.query.set_search_term(term);
    }

    pub fn set_filter(&mut self, filter: F) {
        self.query.set_filter(filter);
    }

    pub fn clear_filters(&mut self) {
        self.query.clear_filters();
    }

    pub fn has_active_filters(&self) -> bool {
        self.query.needle().is_some() || !self.query.filter.is_cleared()
    }

    /// Move to `page`. Out-of-range pages and the current page are rejected.
    pub fn set_page(&mut self, page: u32) -> bool {
        if page < 1 || page > self.total_pages() || page == self.query.page {
            return false;
        }
        self.query.page = page;
        true
    }

    /// Pages adjacent to the current one that exist.
    pub fn neighbor_pages(&self) -> Vec<u32> {
        let page = self.query.page;
        let last = self.total_pages();
        [page.checked_sub(1), page.checked_add(1)]
            .into_iter()
            .flatten()
            .filter(|p| (1..=last).contains(p))
            .collect()
    }
}

/// A paged remote resource addressed through the shared cache.
pub trait PageSource<T>: Clone + 'static {
    fn cache_key(&self, page: u32) -> QueryKey;
    fn fetch_page(&self, page: u32) -> Fetch<Page<T>>;
}

/// Load `page`, served from the cache when possible.
///
/// # Errors
///
/// Returns the [`ApiError`] of the underlying request.
pub async fn load_page<T, S>(cache: &QueryCache<Page<T>>, source: &S, page: u32) -> Result<Page<T>, ApiError>
where
    T: Clone + 'static,
    S: PageSource<T>,
{
    let fetcher = source.clone();
    cache.fetch(source.cache_key(page), move || fetcher.fetch_page(page)).await
}

/// Fetch every page after `first` in ascending order, one at a time. Failed
/// pages are logged and skipped.
///
/// # Errors
///
/// Stops at the first [`ApiError::Unauthorized`]; later pages would fail the
/// same way.
pub async fn aggregate_remaining<T, S>(
    cache: &QueryCache<Page<T>>,
    source: &S,
    first: Page<T>,
) -> Result<AggregateDataset<T>, ApiError>
where
    T: Clone + 'static,
    S: PageSource<T>,
{
    let mut dataset = AggregateDataset::from_first_page(first);
    for page in dataset.remaining_pages() {
        match load_page(cache, source, page).await {
            Ok(loaded) => dataset.append(loaded.items),
            Err(ApiError::Unauthorized) => return Err(ApiError::Unauthorized),
            Err(e) => {
                leptos::logging::warn!("aggregation skipped page: page={page} error={e}");
                dataset.skip(page);
            }
        }
    }
    dataset.finish();
    Ok(dataset)
}

/// Warm the cache for `pages` without waiting.
pub fn prefetch_pages<T, S>(cache: &QueryCache<Page<T>>, source: &S, pages: &[u32])
where
    T: Clone + 'static,
    S: PageSource<T>,
{
    for &page in pages {
        let fetcher = source.clone();
        cache.prefetch(source.cache_key(page), move || fetcher.fetch_page(page));
    }
}
