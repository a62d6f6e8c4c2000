//! Keyed remote-data cache with staleness, eviction, prefetch and request
//! coalescing.
//!
//! DESIGN
//! ======
//! One `QueryCache<T>` exists per resource type and is shared by every page
//! that reads that resource. Entries are fresh for `stale_time_ms`; after that
//! they are still served while a background refresh runs. Entries unused for
//! `gc_time_ms` are evicted on the next access. Identical concurrent requests
//! join a single in-flight future, so only one network call is made per key.
//!
//! The cache runs on the single UI thread: state lives behind `Rc<RefCell<_>>`
//! and no borrow is held across an `.await`.

#[cfg(test)]
#[path = "cache_test.rs"]
mod cache_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use futures::FutureExt;
use futures::future::{LocalBoxFuture, Shared};

use super::clock::{Clock, SystemClock};
use crate::net::error::ApiError;

/// Default freshness window: 5 minutes.
pub const STALE_TIME_MS: u64 = 5 * 60 * 1000;
/// Default eviction window for unused entries: 10 minutes.
pub const GC_TIME_MS: u64 = 10 * 60 * 1000;

/// A pending request producing a cacheable value.
pub type Fetch<T> = LocalBoxFuture<'static, Result<T, ApiError>>;

/// Runs detached background work (prefetches, stale refreshes).
pub type Spawner = Rc<dyn Fn(LocalBoxFuture<'static, ()>)>;

type InFlight<T> = Shared<Fetch<T>>;

/// Hierarchical cache key, e.g. `courses:4:2:20:rust`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QueryKey(Vec<String>);

impl QueryKey {
    pub fn new(root: &str) -> Self {
        Self(vec![root.to_owned()])
    }

    #[must_use]
    pub fn with(mut self, part: impl ToString) -> Self {
        self.0.push(part.to_string());
        self
    }

    /// Whether `prefix` names this key or one of its ancestors.
    pub fn starts_with(&self, prefix: &QueryKey) -> bool {
        self.0.starts_with(&prefix.0)
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(":"))
    }
}

/// Timing policy of a cache.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QueryConfig {
    pub stale_time_ms: u64,
    pub gc_time_ms: u64,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self { stale_time_ms: STALE_TIME_MS, gc_time_ms: GC_TIME_MS }
    }
}

struct Entry<T> {
    value: T,
    fetched_at: u64,
    last_used: u64,
    invalidated: bool,
}

impl<T> Entry<T> {
    fn is_fresh(&self, now: u64, stale_time_ms: u64) -> bool {
        !self.invalidated && now.saturating_sub(self.fetched_at) < stale_time_ms
    }
}

struct Inner<T> {
    entries: HashMap<QueryKey, Entry<T>>,
    in_flight: HashMap<QueryKey, InFlight<T>>,
    /// Bumped by `clear`; requests started in an older epoch never store.
    epoch: u64,
}

enum Lookup<T> {
    Fresh(T),
    Stale(T),
    Missing,
}

/// Shared request cache for one resource type.
pub struct QueryCache<T> {
    inner: Rc<RefCell<Inner<T>>>,
    clock: Rc<dyn Clock>,
    spawner: Spawner,
    config: QueryConfig,
}

impl<T> Clone for QueryCache<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
            clock: Rc::clone(&self.clock),
            spawner: Rc::clone(&self.spawner),
            config: self.config,
        }
    }
}

impl<T: Clone + 'static> QueryCache<T> {
    /// Cache on the wall clock, spawning background work on the Leptos
    /// executor.
    pub fn new(config: QueryConfig) -> Self {
        let spawner: Spawner = Rc::new(|task: LocalBoxFuture<'static, ()>| leptos::task::spawn_local(task));
        Self::with_parts(config, Rc::new(SystemClock), spawner)
    }

    pub fn with_parts(config: QueryConfig, clock: Rc<dyn Clock>, spawner: Spawner) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner { entries: HashMap::new(), in_flight: HashMap::new(), epoch: 0 })),
            clock,
            spawner,
            config,
        }
    }

    pub fn config(&self) -> QueryConfig {
        self.config
    }

    /// Cached value for `key` regardless of staleness.
    pub fn peek(&self, key: &QueryKey) -> Option<T> {
        match self.lookup(key) {
            Lookup::Fresh(value) | Lookup::Stale(value) => Some(value),
            Lookup::Missing => None,
        }
    }

    pub fn is_fresh(&self, key: &QueryKey) -> bool {
        let now = self.clock.now_ms();
        self.inner
            .borrow()
            .entries
            .get(key)
            .is_some_and(|entry| entry.is_fresh(now, self.config.stale_time_ms))
    }

    pub fn is_fetching(&self, key: &QueryKey) -> bool {
        self.inner.borrow().in_flight.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resolve `key`: fresh entries are returned as-is, stale entries are
    /// returned while a refresh runs in the background, and misses wait for
    /// the network (joining an identical in-flight request if one exists).
    ///
    /// # Errors
    ///
    /// Returns the fetcher's error on a miss. Errors are never cached.
    pub async fn fetch<F>(&self, key: QueryKey, fetcher: F) -> Result<T, ApiError>
    where
        F: FnOnce() -> Fetch<T> + 'static,
    {
        match self.lookup(&key) {
            Lookup::Fresh(value) => Ok(value),
            Lookup::Stale(value) => {
                self.prefetch(key, fetcher);
                Ok(value)
            }
            Lookup::Missing => self.join_or_start(key, fetcher).await,
        }
    }

    /// Start a detached fetch for `key` unless it is fresh or already in
    /// flight.
    pub fn prefetch<F>(&self, key: QueryKey, fetcher: F)
    where
        F: FnOnce() -> Fetch<T> + 'static,
    {
        if self.is_fresh(&key) || self.is_fetching(&key) {
            return;
        }
        let label = key.to_string();
        let running = self.join_or_start(key, fetcher);
        (self.spawner)(
            async move {
                if let Err(e) = running.await {
                    leptos::logging::warn!("background fetch failed: key={label} error={e}");
                }
            }
            .boxed_local(),
        );
    }

    /// Store `value` as a freshly fetched entry.
    pub fn set(&self, key: QueryKey, value: T) {
        let now = self.clock.now_ms();
        self.inner
            .borrow_mut()
            .entries
            .insert(key, Entry { value, fetched_at: now, last_used: now, invalidated: false });
    }

    /// Mark every entry under `prefix` stale. Returns how many were marked.
    pub fn invalidate(&self, prefix: &QueryKey) -> usize {
        let mut inner = self.inner.borrow_mut();
        let mut marked = 0;
        for (key, entry) in &mut inner.entries {
            if key.starts_with(prefix) {
                entry.invalidated = true;
                marked += 1;
            }
        }
        marked
    }

    pub fn remove(&self, key: &QueryKey) {
        self.inner.borrow_mut().entries.remove(key);
    }

    /// Drop all entries and forget in-flight requests. Requests already
    /// running still resolve their own waiters but no longer store results,
    /// and later fetches of the same key start fresh.
    pub fn clear(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.entries.clear();
        inner.in_flight.clear();
        inner.epoch += 1;
    }

    /// Evict entries unused for longer than the GC window. Returns how many
    /// were evicted.
    pub fn collect_garbage(&self) -> usize {
        let now = self.clock.now_ms();
        let gc_time_ms = self.config.gc_time_ms;
        let mut inner = self.inner.borrow_mut();
        let before = inner.entries.len();
        inner
            .entries
            .retain(|_, entry| now.saturating_sub(entry.last_used) < gc_time_ms);
        before - inner.entries.len()
    }

    fn lookup(&self, key: &QueryKey) -> Lookup<T> {
        self.collect_garbage();
        let now = self.clock.now_ms();
        let mut inner = self.inner.borrow_mut();
        let Some(entry) = inner.entries.get_mut(key) else {
            return Lookup::Missing;
        };
        entry.last_used = now;
        if entry.is_fresh(now, self.config.stale_time_ms) {
            Lookup::Fresh(entry.value.clone())
        } else {
            Lookup::Stale(entry.value.clone())
        }
    }

    fn join_or_start<F>(&self, key: QueryKey, fetcher: F) -> InFlight<T>
    where
        F: FnOnce() -> Fetch<T> + 'static,
    {
        if let Some(running) = self.inner.borrow().in_flight.get(&key) {
            return running.clone();
        }

        let inner = Rc::clone(&self.inner);
        let clock = Rc::clone(&self.clock);
        let store_key = key.clone();
        let epoch = self.inner.borrow().epoch;
        let running = async move {
            let result = fetcher().await;
            let now = clock.now_ms();
            let mut inner = inner.borrow_mut();
            if inner.epoch != epoch {
                return result;
            }
            inner.in_flight.remove(&store_key);
            if let Ok(value) = &result {
                inner.entries.insert(
                    store_key,
                    Entry { value: value.clone(), fetched_at: now, last_used: now, invalidated: false },
                );
            }
            result
        }
        .boxed_local()
        .shared();

        self.inner.borrow_mut().in_flight.insert(key, running.clone());
        running
    }
}
