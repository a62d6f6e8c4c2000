//! Network layer for the course-platform REST API.
//!
//! ARCHITECTURE
//! ============
//! `types` defines the wire DTOs, `envelope` normalizes wrapped/bare bodies,
//! `api` issues the HTTP calls, and `error` is the single failure type they
//! all share.

pub mod api;
pub mod envelope;
pub mod error;
pub mod types;
