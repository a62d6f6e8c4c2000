//! Remote-data caching shared by every screen.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages read REST resources through these caches instead of calling the API
//! directly, so repeated visits, prefetches and concurrent readers collapse
//! into one request per key.

pub mod cache;
pub mod clock;
pub mod remote;

use leptos::prelude::{LocalStorage, StoredValue};

use crate::net::types::{Category, Course, CourseStats, Growth, Overview, Settings, User};
use crate::state::list::Page;
use cache::{QueryCache, QueryConfig};

/// One cache per resource type, created once for the whole app.
#[derive(Clone)]
pub struct QueryCaches {
    pub courses: QueryCache<Page<Course>>,
    pub categories: QueryCache<Vec<Category>>,
    pub users: QueryCache<Page<User>>,
    pub overview: QueryCache<Overview>,
    pub growth: QueryCache<Growth>,
    pub course_stats: QueryCache<CourseStats>,
    pub settings: QueryCache<Settings>,
}

impl QueryCaches {
    pub fn new(config: QueryConfig) -> Self {
        Self {
            courses: QueryCache::new(config),
            categories: QueryCache::new(config),
            users: QueryCache::new(config),
            overview: QueryCache::new(config),
            growth: QueryCache::new(config),
            course_stats: QueryCache::new(config),
            settings: QueryCache::new(config),
        }
    }

    /// Drop every cached resource, e.g. after logout.
    pub fn clear(&self) {
        self.courses.clear();
        self.categories.clear();
        self.users.clear();
        self.overview.clear();
        self.growth.clear();
        self.course_stats.clear();
        self.settings.clear();
    }
}

/// Context handle for the caches. `Rc`-based caches live in local storage
/// because they never leave the UI thread.
pub type SharedCaches = StoredValue<QueryCaches, LocalStorage>;
