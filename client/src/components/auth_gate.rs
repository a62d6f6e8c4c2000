//! Route guard for authenticated screens.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps every protected page. While the session is still unknown only a
//! loading indicator renders; without a session the visitor is sent to the
//! login screen; otherwise the page renders.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::loading_spinner::LoadingSpinner;
use crate::state::auth::{AuthState, GuardDecision};
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn AuthGate(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    view! {
        <Show
            when=move || auth.with(|state| state.guard() == GuardDecision::Render)
            fallback=|| view! { <LoadingSpinner/> }
        >
            {children()}
        </Show>
    }
}
