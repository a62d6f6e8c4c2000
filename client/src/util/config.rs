//! Client runtime configuration.
//!
//! The API base URL comes from the `admin-api-base-url` meta tag the host
//! renders into the page, then from `ADMIN_API_BASE_URL` at build time, then
//! `/api`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Name of the meta tag carrying the API base URL.
pub const API_BASE_META: &str = "admin-api-base-url";
pub const DEFAULT_API_BASE_URL: &str = "/api";

/// Resolved client configuration, provided as context by `App`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
}

impl ClientConfig {
    pub fn resolve() -> Self {
        Self { api_base_url: resolve_base_url(meta_base_url(), option_env!("ADMIN_API_BASE_URL")) }
    }
}

/// First non-blank candidate with trailing slashes removed.
pub fn resolve_base_url(meta: Option<String>, build_time: Option<&str>) -> String {
    meta.as_deref()
        .into_iter()
        .chain(build_time)
        .map(normalize_base_url)
        .find(|url| !url.is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_owned())
}

pub fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}

fn meta_base_url() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let document = web_sys::window()?.document()?;
        let meta = document
            .query_selector(&format!("meta[name=\"{API_BASE_META}\"]"))
            .ok()
            .flatten()?;
        meta.get_attribute("content")
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
