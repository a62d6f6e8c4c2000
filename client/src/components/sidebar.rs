//! Collapsible navigation sidebar with the signed-in user and logout.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::query::{QueryCaches, SharedCaches};
use crate::state::auth::{AuthState, BrowserSessionStore};
use crate::util::auth::LOGIN_PATH;
use crate::util::i18n::{Language, tr};

/// Navigation entries as `(path, label key, icon)`.
const NAV_ITEMS: &[(&str, &str, &str)] = &[
    ("/dashboard", "nav.dashboard", "☰"),
    ("/users", "nav.users", "👥"),
    ("/courses", "nav.courses", "📚"),
    ("/settings", "nav.settings", "⚙"),
];

/// Whether `path` is the current route or one of its children.
pub fn is_active_path(current: &str, path: &str) -> bool {
    current == path || current.strip_prefix(path).is_some_and(|rest| rest.starts_with('/'))
}

#[component]
pub fn Sidebar(collapsed: RwSignal<bool>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let caches = expect_context::<SharedCaches>();
    let language = expect_context::<RwSignal<Language>>();
    let pathname = use_location().pathname;
    let navigate = use_navigate();

    let user_name = move || {
        auth.with(|state| {
            state
                .user()
                .map(|u| format!("{} {}", u.first_name, u.last_name).trim().to_owned())
                .unwrap_or_default()
        })
    };

    let on_logout = move |_| {
        auth.update(|state| state.logout(&BrowserSessionStore));
        caches.with_value(QueryCaches::clear);
        navigate(LOGIN_PATH, NavigateOptions::default());
    };

    view! {
        <aside class="sidebar" class:sidebar--collapsed=move || collapsed.get() aria-label="Sidebar navigation">
            <div class="sidebar__header">
                <Show when=move || !collapsed.get()>
                    <h2 class="sidebar__brand">"Academy Admin"</h2>
                </Show>
                <button
                    class="sidebar__toggle"
                    on:click=move |_| collapsed.update(|c| *c = !*c)
                    aria-expanded=move || (!collapsed.get()).to_string()
                    aria-label=move || {
                        tr(language.get(), if collapsed.get() { "nav.expand" } else { "nav.collapse" })
                    }
                >
                    {move || if collapsed.get() { "›" } else { "‹" }}
                </button>
                <Show when=move || !collapsed.get()>
                    <p class="sidebar__user">{user_name}</p>
                </Show>
            </div>

            <nav class="sidebar__nav" aria-label="Main navigation">
                {NAV_ITEMS
                    .iter()
                    .map(|&(path, key, icon)| {
                        let active = move || pathname.with(|current| is_active_path(current, path));
                        view! {
                            <a
                                href=path
                                class="sidebar__item"
                                class:sidebar__item--active=active
                                aria-current=move || active().then_some("page")
                            >
                                <span class="sidebar__icon" aria-hidden="true">{icon}</span>
                                <span class="sidebar__label" class:sr-only=move || collapsed.get()>
                                    {move || tr(language.get(), key)}
                                </span>
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>

            <div class="sidebar__footer">
                <button class="sidebar__logout" on:click=on_logout aria-label="Logout">
                    <span class="sidebar__icon" aria-hidden="true">"⎋"</span>
                    <Show when=move || !collapsed.get()>
                        <span class="sidebar__label">{move || tr(language.get(), "nav.logout")}</span>
                    </Show>
                </button>
            </div>
        </aside>
    }
}
