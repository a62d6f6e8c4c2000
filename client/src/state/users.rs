//! Users screen state: client-side filters and the paged user source.
//!
//! The users API has no search or filter parameters, so the screen runs the
//! list controller in client mode and filters the aggregated dataset locally.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use std::str::FromStr;

use futures::FutureExt;

use super::list::{ListState, Page, PageSource, PagingMode, RowFilter, Searchable, contains_ignore_case};
use crate::net::api::ApiClient;
use crate::net::types::{Role, User};
use crate::query::cache::{Fetch, QueryKey};

/// Users per server page.
pub const USERS_PAGE_SIZE: u32 = 30;

impl FromStr for Role {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "teacher" => Ok(Self::Teacher),
            "student" => Ok(Self::Student),
            _ => Err(()),
        }
    }
}

/// Account status filter values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UserStatus {
    Active,
    Inactive,
}

impl UserStatus {
    pub fn matches(self, user: &User) -> bool {
        user.active == (self == Self::Active)
    }
}

impl FromStr for UserStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            _ => Err(()),
        }
    }
}

/// Role and status predicates; `None` matches every user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UserFilters {
    pub role: Option<Role>,
    pub status: Option<UserStatus>,
}

impl RowFilter<User> for UserFilters {
    fn matches(&self, user: &User) -> bool {
        self.role.is_none_or(|role| user.role() == role) && self.status.is_none_or(|status| status.matches(user))
    }

    fn is_cleared(&self) -> bool {
        self.role.is_none() && self.status.is_none()
    }
}

impl Searchable for User {
    fn matches_search(&self, needle: &str) -> bool {
        contains_ignore_case(&self.first_name, needle)
            || contains_ignore_case(&self.last_name, needle)
            || contains_ignore_case(&self.email, needle)
    }
}

pub type UsersList = ListState<User, UserFilters>;

pub fn users_list() -> UsersList {
    ListState::new(PagingMode::Client, USERS_PAGE_SIZE)
}

/// `/users` pages addressed by page number.
#[derive(Clone, Debug)]
pub struct UsersSource {
    pub client: ApiClient,
    pub page_size: u32,
}

impl UsersSource {
    pub fn new(client: ApiClient) -> Self {
        Self { client, page_size: USERS_PAGE_SIZE }
    }
}

impl PageSource<User> for UsersSource {
    fn cache_key(&self, page: u32) -> QueryKey {
        QueryKey::new("users").with(page).with(self.page_size)
    }

    fn fetch_page(&self, page: u32) -> Fetch<Page<User>> {
        let client = self.client.clone();
        let page_size = self.page_size;
        async move {
            let response = client.fetch_users(page, page_size).await?;
            Ok(response.into_page(page_size))
        }
        .boxed_local()
    }
}

/// "Showing X of Y filtered users (Total: Z)" counters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UsersSummary {
    pub showing: usize,
    pub filtered: usize,
    pub total: u64,
}

pub fn summarize(list: &UsersList) -> UsersSummary {
    UsersSummary {
        showing: list.visible_rows().len(),
        filtered: list.filtered_rows().len(),
        total: list.total_items(),
    }
}
