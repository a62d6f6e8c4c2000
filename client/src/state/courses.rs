//! Courses screen state: server-side filters, the paged course source and the
//! header copy derived from the active filters.

#[cfg(test)]
#[path = "courses_test.rs"]
mod courses_test;

use futures::FutureExt;

use super::list::{ListQuery, ListState, Page, PageSource, PagingMode, RowFilter, Searchable, contains_ignore_case};
use crate::net::api::{ApiClient, CourseQuery};
use crate::net::types::{Category, Course};
use crate::query::cache::{Fetch, QueryKey};

/// Courses per server page.
pub const COURSES_PAGE_SIZE: u32 = 20;

/// Category filter; `None` means all categories.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CourseFilters {
    pub category_id: Option<u64>,
}

impl RowFilter<Course> for CourseFilters {
    fn matches(&self, course: &Course) -> bool {
        self.category_id.is_none_or(|id| course.category_id == id)
    }

    fn is_cleared(&self) -> bool {
        self.category_id.is_none()
    }
}

impl Searchable for Course {
    fn matches_search(&self, needle: &str) -> bool {
        contains_ignore_case(&self.title, needle) || contains_ignore_case(&self.description, needle)
    }
}

pub type CoursesList = ListState<Course, CourseFilters>;

pub fn courses_list() -> CoursesList {
    ListState::new(PagingMode::Server, COURSES_PAGE_SIZE)
}

/// `/courses` pages for one committed search and category.
#[derive(Clone, Debug)]
pub struct CoursesSource {
    pub client: ApiClient,
    pub category_id: Option<u64>,
    pub search: String,
    pub page_size: u32,
}

impl CoursesSource {
    pub fn for_query(client: ApiClient, query: &ListQuery<CourseFilters>) -> Self {
        Self {
            client,
            category_id: query.filter.category_id,
            search: query.search_term.trim().to_owned(),
            page_size: query.page_size,
        }
    }

    fn request(&self, page: u32) -> CourseQuery {
        CourseQuery { category_id: self.category_id, page, limit: self.page_size, search: self.search.clone() }
    }
}

impl PageSource<Course> for CoursesSource {
    fn cache_key(&self, page: u32) -> QueryKey {
        let category = self.category_id.map_or_else(|| "all".to_owned(), |id| id.to_string());
        QueryKey::new("courses").with(category).with(page).with(self.page_size).with(&self.search)
    }

    fn fetch_page(&self, page: u32) -> Fetch<Page<Course>> {
        let client = self.client.clone();
        let request = self.request(page);
        async move {
            let response = client.fetch_courses(&request).await?;
            Ok(response.into_page(request.limit))
        }
        .boxed_local()
    }
}

pub fn categories_key() -> QueryKey {
    QueryKey::new("categories")
}

pub fn category_name(categories: &[Category], id: Option<u64>) -> Option<&str> {
    let id = id?;
    categories.iter().find(|c| c.id == id).map(|c| c.name.as_str())
}

/// Title and subtitle of the courses header. A selected category wins over a
/// search query.
pub fn course_header(category: Option<&str>, search: &str) -> (String, String) {
    let search = search.trim();
    if let Some(name) = category {
        (name.to_owned(), format!("Browse {name} courses"))
    } else if !search.is_empty() {
        (format!("Search Results for \"{search}\""), format!("Showing courses matching \"{search}\""))
    } else {
        ("All Courses".to_owned(), "Browse all available courses".to_owned())
    }
}
