//! REST API client for the course-platform backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only called from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. A 401 maps to
//! [`ApiError::Unauthorized`] so callers can expire the session; bodies are
//! decoded through [`super::envelope::decode`] regardless of whether the
//! endpoint wraps its payload.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{
    Category, Course, CourseDraft, CourseStats, Growth, Overview, PaginatedCourses, Settings, SettingsPatch,
    UsersResponse,
};
use crate::state::auth::Session;

/// Filters and paging for `GET /courses`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct CourseQuery {
    pub category_id: Option<u64>,
    pub page: u32,
    pub limit: u32,
    pub search: String,
}

/// Handle carrying the API base URL and the bearer token of the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self { base_url: base_url.trim_end_matches('/').to_owned(), token: None }
    }

    #[must_use]
    pub fn with_token(mut self, token: &str) -> Self {
        self.token = Some(token.to_owned());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    #[cfg(any(test, feature = "hydrate"))]
    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Exchange credentials for a session via `POST /auth/login`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] with the server message for invalid
    /// credentials, or a transport/decode error.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use super::types::{LoginPayload, LoginRequest};

            let request = gloo_net::http::Request::post(&self.endpoint("auth/login"))
                .json(&LoginRequest { email, password })
                .map_err(|e| ApiError::Network(e.to_string()))?;
            let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
            if let Some(err) = ApiError::from_status(status) {
                return Err(rejection_message(&body).map_or(err, ApiError::Rejected));
            }
            let payload: LoginPayload = super::envelope::decode(&body)?;
            Ok(Session::new(payload.token, payload.user))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, password);
            Err(ApiError::Unavailable)
        }
    }

    /// Fetch one page of courses.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request or decode fails.
    pub async fn fetch_courses(&self, query: &CourseQuery) -> Result<PaginatedCourses, ApiError> {
        self.get_with_params("courses/", &courses_params(query)).await
    }

    /// Fetch a single course by id.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request or decode fails.
    pub async fn fetch_course(&self, course_id: u64) -> Result<Course, ApiError> {
        self.get_with_params(&course_path(course_id), &[]).await
    }

    /// Create a course.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request or decode fails.
    pub async fn create_course(&self, draft: &CourseDraft) -> Result<Course, ApiError> {
        self.send_json(Method::Post, "courses/", draft).await
    }

    /// Update fields of an existing course.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request or decode fails.
    pub async fn update_course(&self, course_id: u64, draft: &CourseDraft) -> Result<Course, ApiError> {
        self.send_json(Method::Put, &course_path(course_id), draft).await
    }

    /// Delete a course.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails.
    pub async fn delete_course(&self, course_id: u64) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = self
                .authorized(gloo_net::http::Request::delete(&self.endpoint(&course_path(course_id))))
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            ApiError::from_status(resp.status()).map_or(Ok(()), Err)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = course_id;
            Err(ApiError::Unavailable)
        }
    }

    /// Fetch all course categories.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request or decode fails.
    pub async fn fetch_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.get_with_params("categories/", &[]).await
    }

    /// Fetch one page of users.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request or decode fails.
    pub async fn fetch_users(&self, page: u32, limit: u32) -> Result<UsersResponse, ApiError> {
        self.get_with_params("users", &users_params(page, limit)).await
    }

    /// Fetch the dashboard headline metrics.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request or decode fails.
    pub async fn fetch_overview(&self) -> Result<Overview, ApiError> {
        self.get_with_params("overview/", &[]).await
    }

    /// Fetch monthly student growth.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request or decode fails.
    pub async fn fetch_growth(&self) -> Result<Growth, ApiError> {
        self.get_with_params("overview/growth", &[]).await
    }

    /// Fetch the popular / top-rated course rankings.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request or decode fails.
    pub async fn fetch_course_stats(&self) -> Result<CourseStats, ApiError> {
        self.get_with_params("overview/courses", &[]).await
    }

    /// Fetch tenant settings.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request or decode fails.
    pub async fn fetch_settings(&self) -> Result<Settings, ApiError> {
        self.get_with_params("settings/", &[]).await
    }

    /// Update tenant settings and return the stored result.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request or decode fails.
    pub async fn update_settings(&self, patch: &SettingsPatch) -> Result<Settings, ApiError> {
        self.send_json(Method::Put, "settings/", patch).await
    }

    #[cfg(feature = "hydrate")]
    fn authorized(&self, builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
        match self.token.as_deref() {
            Some(token) => builder.header("Authorization", &bearer(token)),
            None => builder,
        }
    }

    async fn get_with_params<T>(&self, path: &str, params: &[(&'static str, String)]) -> Result<T, ApiError>
    where
        T: serde::de::DeserializeOwned,
    {
        #[cfg(feature = "hydrate")]
        {
            let mut builder = self.authorized(gloo_net::http::Request::get(&self.endpoint(path)));
            if !params.is_empty() {
                builder = builder.query(params.iter().map(|(k, v)| (*k, v.as_str())));
            }
            let resp = builder.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
            read_body(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, params);
            Err(ApiError::Unavailable)
        }
    }

    async fn send_json<B, T>(&self, method: Method, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: serde::Serialize,
        T: serde::de::DeserializeOwned,
    {
        #[cfg(feature = "hydrate")]
        {
            let url = self.endpoint(path);
            let builder = match method {
                Method::Post => gloo_net::http::Request::post(&url),
                Method::Put => gloo_net::http::Request::put(&url),
            };
            let request = self
                .authorized(builder)
                .json(body)
                .map_err(|e| ApiError::Network(e.to_string()))?;
            let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
            read_body(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (method, path, body);
            Err(ApiError::Unavailable)
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Method {
    Post,
    Put,
}

#[cfg(feature = "hydrate")]
async fn read_body<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if let Some(err) = ApiError::from_status(resp.status()) {
        return Err(err);
    }
    let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
    super::envelope::decode(&body)
}

/// `Authorization` header value for `token`.
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

fn course_path(course_id: u64) -> String {
    format!("courses/{course_id}/")
}

/// Query parameters for `GET /courses`; empty filters are omitted.
pub fn courses_params(query: &CourseQuery) -> Vec<(&'static str, String)> {
    let mut params = vec![("page", query.page.max(1).to_string()), ("limit", query.limit.to_string())];
    if let Some(category_id) = query.category_id {
        params.push(("categoryId", category_id.to_string()));
    }
    let search = query.search.trim();
    if !search.is_empty() {
        params.push(("search", search.to_owned()));
    }
    params
}

pub fn users_params(page: u32, limit: u32) -> Vec<(&'static str, String)> {
    vec![("page", page.max(1).to_string()), ("limit", limit.to_string())]
}

/// Extract the `message` of a failed envelope, used to surface login errors
/// that arrive with a 4xx status.
pub fn rejection_message(body: &str) -> Option<String> {
    #[derive(serde::Deserialize)]
    struct Failure {
        #[serde(default)]
        success: bool,
        message: Option<String>,
    }

    let failure: Failure = serde_json::from_str(body).ok()?;
    if failure.success {
        return None;
    }
    failure.message.filter(|m| !m.trim().is_empty())
}
