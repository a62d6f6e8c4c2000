//! Reactive binding of a single cached resource to a signal.
//!
//! Screens that show one resource (dashboard metrics, settings, categories)
//! hold a `RwSignal<Remote<T>>` and fill it through [`spawn_query`]. Paged
//! lists go through `state::list` instead.

#[cfg(test)]
#[path = "remote_test.rs"]
mod remote_test;

use leptos::prelude::*;

use super::cache::{Fetch, QueryCache, QueryKey};
use crate::net::error::ApiError;
use crate::state::auth::AuthState;

/// Load state of one remote resource.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Remote<T> {
    #[default]
    Loading,
    Ready(T),
    Failed(ApiError),
}

impl<T> Remote<T> {
    pub fn from_result(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(e) => Self::Failed(e),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }
}

/// Resolve `key` through `cache` and publish the outcome into `target`.
/// A 401 also expires the session.
pub fn spawn_query<T, F>(
    cache: QueryCache<T>,
    key: QueryKey,
    fetcher: F,
    target: RwSignal<Remote<T>>,
    auth: RwSignal<AuthState>,
) where
    T: Clone + Send + Sync + 'static,
    F: FnOnce() -> Fetch<T> + 'static,
{
    if let Some(value) = cache.peek(&key).filter(|_| cache.is_fresh(&key)) {
        target.set(Remote::Ready(value));
        return;
    }
    leptos::task::spawn_local(async move {
        let result = cache.fetch(key.clone(), fetcher).await;
        if let Err(e) = &result {
            leptos::logging::warn!("query failed: key={key} error={e}");
            crate::util::auth::expire_on_unauthorized(auth, e);
        }
        target.set(Remote::from_result(result));
    });
}
