//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes apply identical unauthenticated-redirect behavior, and
//! every screen that calls the API ends the session on a 401 the same way.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::state::auth::{AuthState, BrowserSessionStore, GuardDecision};
use crate::util::config::ClientConfig;

/// Route of the login screen.
pub const LOGIN_PATH: &str = "/";
/// Landing route after login.
pub const HOME_PATH: &str = "/dashboard";

/// Whether a protected route should leave for the login screen.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    state.guard() == GuardDecision::Redirect
}

/// Redirect to the login screen whenever auth has resolved without a session.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate(LOGIN_PATH, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}

/// Read the persisted session once the app is running in the browser.
pub fn init_session(auth: RwSignal<AuthState>) {
    auth.update(|state| state.init(&BrowserSessionStore));
}

/// Expire the session if `error` is a 401. Returns whether it was.
pub fn expire_on_unauthorized(auth: RwSignal<AuthState>, error: &ApiError) -> bool {
    if !error.is_unauthorized() {
        return false;
    }
    leptos::logging::warn!("session rejected by server; signing out");
    auth.update(|state| state.expire(&BrowserSessionStore));
    true
}

/// API client for the current session.
pub fn api_client(auth: RwSignal<AuthState>, config: &ClientConfig) -> ApiClient {
    auth.with_untracked(|state| state.client(&config.api_base_url))
}
