//! Wire DTOs for the course-platform REST API.
//!
//! DESIGN
//! ======
//! Field names mirror the JSON the API emits (camelCase for resources,
//! snake_case for the overview metrics) so serde stays the only mapping
//! layer. Paged responses are converted into the generic [`Page`] before
//! they reach list state.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::state::list::Page;

/// A platform user as listed on the users screen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Numeric user identifier.
    pub id: u64,
    /// Login email address.
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// Numeric role: 1 admin, 2 teacher, 3 student.
    pub role_id: u32,
    /// ISO 8601 creation timestamp.
    pub created_at: String,
    /// Whether the account is enabled.
    pub active: bool,
}

impl User {
    /// Display name as "First Last".
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_owned()
    }

    pub fn role(&self) -> Role {
        Role::from_id(self.role_id)
    }
}

/// Platform roles keyed by `roleId`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Teacher,
    Student,
    Unknown,
}

impl Role {
    pub fn from_id(role_id: u32) -> Self {
        match role_id {
            1 => Self::Admin,
            2 => Self::Teacher,
            3 => Self::Student,
            _ => Self::Unknown,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Teacher => "Teacher",
            Self::Student => "Student",
            Self::Unknown => "Unknown",
        }
    }
}

/// The signed-in administrator as returned by `/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub id: u64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// Role name as a free-form string (e.g. `"admin"`).
    #[serde(default)]
    pub role: String,
}

/// Payload of a successful login.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginPayload {
    pub token: String,
    pub user: SessionUser,
}

/// Credentials posted to `/auth/login`.
#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// A course listed on the courses screen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// ISO 8601 creation timestamp.
    pub created_at: String,
    pub category_id: u64,
    #[serde(default)]
    pub is_featured: bool,
}

/// Writable course fields for create/update calls.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
}

/// A course category used by the category filter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// One page of `/courses`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedCourses {
    pub courses: Vec<Course>,
    pub total_pages: u32,
    pub current_page: u32,
    pub total_courses: u64,
}

impl PaginatedCourses {
    pub fn into_page(self, page_size: u32) -> Page<Course> {
        Page::from_server(
            self.courses,
            self.total_courses,
            self.total_pages,
            self.current_page,
            page_size,
        )
    }
}

/// One page of `/users`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsersResponse {
    pub users: Vec<User>,
    pub total_pages: u32,
    pub current_page: u32,
    pub total_users: u64,
}

impl UsersResponse {
    pub fn into_page(self, page_size: u32) -> Page<User> {
        Page::from_server(
            self.users,
            self.total_users,
            self.total_pages,
            self.current_page,
            page_size,
        )
    }
}

/// Headline metrics from `/overview`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Overview {
    pub teachers: u64,
    pub active_teachers: u64,
    pub inactive_teachers: u64,
    pub students: u64,
    pub active_students: u64,
    pub inactive_students: u64,
    /// Decimal string, e.g. `"12500.50"`.
    pub total_revenue: String,
    pub total_revenue_current_month: String,
    pub total_courses: u64,
    pub avg_course_rating: f64,
    pub total_enrollments: u64,
    pub total_enrollments_current_month: u64,
}

/// Monthly student growth from `/overview/growth`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Growth {
    #[serde(default)]
    pub growth: Vec<GrowthPoint>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthPoint {
    /// Calendar month, 1-based.
    pub month: u32,
    pub year: i32,
    pub student_count: u64,
    /// Decimal string; the API sends either a number or a string.
    #[serde(default, deserialize_with = "amount_text")]
    pub total_revenue: String,
}

fn amount_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Amount {
        Text(String),
        Number(serde_json::Number),
        Missing(()),
    }

    Ok(match Amount::deserialize(deserializer)? {
        Amount::Text(text) => text,
        Amount::Number(number) => number.to_string(),
        Amount::Missing(()) => String::new(),
    })
}

/// Course rankings from `/overview/courses`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseStats {
    pub courses: CourseRankings,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRankings {
    #[serde(default)]
    pub most_popular: Vec<RankedCourse>,
    #[serde(default)]
    pub top_rated: Vec<RankedCourse>,
}

/// A course entry in a dashboard ranking. Exactly one of the counters is
/// populated depending on the ranking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedCourse {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub enrollment_count: Option<u64>,
    #[serde(default)]
    pub review_count: Option<u64>,
}

impl RankedCourse {
    pub fn metric(&self) -> u64 {
        self.enrollment_count.or(self.review_count).unwrap_or(0)
    }
}

/// Tenant settings from `/settings`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub logo_url: String,
    #[serde(default)]
    pub default_language: String,
    #[serde(default)]
    pub timezone: String,
    #[serde(default)]
    pub theme_color: String,
    #[serde(default)]
    pub created_at: String,
}

/// Partial settings update sent with `PUT /settings`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme_color: Option<String>,
}

impl SettingsPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Overlay the patch on `base`, leaving untouched fields as they are.
    pub fn apply_to(&self, base: &Settings) -> Settings {
        let pick = |patched: &Option<String>, current: &String| patched.clone().unwrap_or_else(|| current.clone());
        Settings {
            id: base.id,
            name: pick(&self.name, &base.name),
            email: pick(&self.email, &base.email),
            website: pick(&self.website, &base.website),
            logo_url: pick(&self.logo_url, &base.logo_url),
            default_language: pick(&self.default_language, &base.default_language),
            timezone: pick(&self.timezone, &base.timezone),
            theme_color: pick(&self.theme_color, &base.theme_color),
            created_at: base.created_at.clone(),
        }
    }
}
