//! Email and password login screen.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::state::auth::{AuthState, AuthStatus, BrowserSessionStore};
use crate::util::auth::HOME_PATH;
use crate::util::config::ClientConfig;

const MISSING_FIELDS: &str = "Enter both email and password.";

/// Trimmed email plus the raw password, or the inline validation message.
pub fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS);
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Inline message for a failed login attempt.
pub fn login_error_message(error: &ApiError) -> String {
    match error {
        ApiError::Rejected(message) if !message.trim().is_empty() => message.clone(),
        ApiError::Unauthorized | ApiError::Rejected(_) => "Invalid email or password.".to_owned(),
        ApiError::Network(_) | ApiError::Unavailable => "Unable to reach the server. Try again.".to_owned(),
        ApiError::Status { .. } | ApiError::Decode(_) => "Login failed. Try again.".to_owned(),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let config = expect_context::<ClientConfig>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    {
        let navigate = navigate.clone();
        Effect::new(move || {
            if auth.with(|state| state.status == AuthStatus::Authenticated) {
                navigate(HOME_PATH, NavigateOptions { replace: true, ..NavigateOptions::default() });
            }
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let (email_value, password_value) = match validate_login_input(&email.get_untracked(), &password.get_untracked()) {
            Ok(input) => input,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);

        let client = ApiClient::new(&config.api_base_url);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match client.login(&email_value, &password_value).await {
                Ok(session) => {
                    auth.update(|state| state.login(session, &BrowserSessionStore));
                    navigate(HOME_PATH, NavigateOptions::default());
                }
                Err(e) => {
                    leptos::logging::warn!("login failed: {e}");
                    error.set(Some(login_error_message(&e)));
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Academy Admin"</h1>
                <p class="login-card__subtitle">"Sign in to manage your platform"</p>
                <form class="login-form" on:submit=on_submit>
                    <label class="login-label" for="login-email">"Email"</label>
                    <input
                        id="login-email"
                        class="login-input"
                        type="email"
                        autocomplete="username"
                        placeholder="admin@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <label class="login-label" for="login-password">"Password"</label>
                    <input
                        id="login-password"
                        class="login-input"
                        type="password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <Show when=move || error.with(Option::is_some)>
                    <p class="login-message login-message--error" role="alert">
                        {move || error.get().unwrap_or_default()}
                    </p>
                </Show>
            </div>
        </div>
    }
}
