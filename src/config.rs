//! Host configuration read from the environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use admin_ui::util::config::{DEFAULT_API_BASE_URL, normalize_base_url};

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {value}")]
    InvalidPort { value: String },
}

/// Settings for the SSR host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// REST API base URL handed to the browser.
    pub api_base_url: String,
}

impl HostConfig {
    /// Load from process env, after `.env` if present.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a variable is set but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a variable is set but malformed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = parse_port(lookup("PORT").as_deref())?;
        let api_base_url = lookup("ADMIN_API_BASE_URL")
            .map(|raw| normalize_base_url(&raw))
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_owned());
        Ok(Self { port, api_base_url })
    }
}

/// Parse `PORT`, defaulting when unset or blank.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidPort`] for anything that is not a `u16`.
pub fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value.parse().map_err(|_| ConfigError::InvalidPort { value: value.to_owned() }),
    }
}
