//! User directory with live search and role/status filters.
//!
//! SYSTEM CONTEXT
//! ==============
//! The users API only pages, so the screen shows page 1 as soon as it arrives
//! and then aggregates the remaining pages in the background. Search and
//! filters run locally against whatever rows are loaded, switching to the full
//! dataset once aggregation finishes.

use leptos::prelude::*;

use crate::components::error_screen::ErrorScreen;
use crate::components::loading_spinner::LoadingSpinner;
use crate::components::pagination::PaginationBar;
use crate::net::types::{Role, User};
use crate::query::SharedCaches;
use crate::state::auth::AuthState;
use crate::state::controls::{ALL, FilterState};
use crate::state::list::{aggregate_remaining, load_page};
use crate::state::users::{UserFilters, UserStatus, UsersSource, summarize, users_list};
use crate::util::auth::{api_client, expire_on_unauthorized};
use crate::util::config::ClientConfig;
use crate::util::format::format_date;
use crate::util::i18n::{Language, tr};

const ROLE_OPTIONS: &[(&str, Role)] = &[("admin", Role::Admin), ("teacher", Role::Teacher), ("student", Role::Student)];

#[component]
pub fn UsersPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let caches = expect_context::<SharedCaches>();
    let config = expect_context::<ClientConfig>();
    let language = expect_context::<RwSignal<Language>>();

    let list = RwSignal::new(users_list());
    let role = RwSignal::new(FilterState::<Role>::default());
    let status = RwSignal::new(FilterState::<UserStatus>::default());

    let generation = list.try_update(|l| l.begin_load()).unwrap_or_default();
    let source = UsersSource::new(api_client(auth, &config));
    let cache = caches.with_value(|c| c.users.clone());
    leptos::task::spawn_local(async move {
        let first = match load_page(&cache, &source, 1).await {
            Ok(first) => first,
            Err(e) => {
                leptos::logging::warn!("users load failed: {e}");
                expire_on_unauthorized(auth, &e);
                list.update(|l| {
                    l.fail(generation, e);
                });
                return;
            }
        };
        if !list.try_update(|l| l.apply_page(generation, first.clone())).unwrap_or(false) {
            return;
        }
        let dataset = match aggregate_remaining(&cache, &source, first).await {
            Ok(dataset) => dataset,
            Err(e) => {
                leptos::logging::warn!("users aggregation stopped: {e}");
                expire_on_unauthorized(auth, &e);
                return;
            }
        };
        if !dataset.failed_pages.is_empty() {
            leptos::logging::warn!("users aggregation incomplete: failed_pages={:?}", dataset.failed_pages);
        }
        list.update(|l| {
            l.apply_dataset(generation, dataset);
        });
    });

    let apply_filters = move || {
        let filters = UserFilters {
            role: role.with_untracked(|r| r.selected),
            status: status.with_untracked(|s| s.selected),
        };
        list.update(|l| l.set_filter(filters));
    };

    let on_role = move |ev: leptos::ev::Event| {
        role.update(|r| r.select(&event_target_value(&ev)));
        apply_filters();
    };
    let on_status = move |ev: leptos::ev::Event| {
        status.update(|s| s.select(&event_target_value(&ev)));
        apply_filters();
    };
    let on_page = Callback::new(move |page: u32| {
        list.update(|l| {
            l.set_page(page);
        });
    });

    let summary_text = move || {
        let summary = list.with(summarize);
        format!(
            "Showing {} of {} filtered users (Total: {})",
            summary.showing, summary.filtered, summary.total
        )
    };
    let current_page = Signal::derive(move || list.with(|l| l.query.page));
    let total_pages = Signal::derive(move || list.with(|l| l.total_pages()));

    view! {
        <div class="users-page">
            <header class="users-page__header">
                <h1>{move || tr(language.get(), "users.title")}</h1>
                <p class="users-page__summary">{summary_text}</p>
                <Show when=move || list.with(|l| !l.is_loading() && l.error().is_none() && !l.aggregation_complete())>
                    <p class="users-page__aggregating">{move || tr(language.get(), "users.loadingAll")}</p>
                </Show>
            </header>

            <div class="users-page__controls">
                <input
                    class="users-page__search"
                    type="search"
                    placeholder=move || tr(language.get(), "users.search")
                    prop:value=move || list.with(|l| l.query.search_term.clone())
                    on:input=move |ev| list.update(|l| l.set_search_term(&event_target_value(&ev)))
                />
                <select class="users-page__role" on:change=on_role>
                    <option value=ALL>{move || tr(language.get(), "users.allRoles")}</option>
                    {ROLE_OPTIONS
                        .iter()
                        .map(|&(value, r)| view! { <option value=value>{r.label()}</option> })
                        .collect::<Vec<_>>()}
                </select>
                <select class="users-page__status" on:change=on_status>
                    <option value=ALL>{move || tr(language.get(), "users.allStatuses")}</option>
                    <option value="active">{move || tr(language.get(), "users.active")}</option>
                    <option value="inactive">{move || tr(language.get(), "users.inactive")}</option>
                </select>
            </div>

            {move || {
                if list.with(|l| l.error().is_some()) {
                    let title = Signal::derive(move || tr(language.get(), "users.title").to_owned());
                    return view! { <ErrorScreen title=title/> }.into_any();
                }
                if list.with(|l| l.is_loading()) {
                    return view! { <LoadingSpinner/> }.into_any();
                }
                view! {
                    <table class="users-table">
                        <thead>
                            <tr>
                                <th>{move || tr(language.get(), "users.name")}</th>
                                <th>{move || tr(language.get(), "users.email")}</th>
                                <th>{move || tr(language.get(), "users.role")}</th>
                                <th>{move || tr(language.get(), "users.status")}</th>
                                <th>{move || tr(language.get(), "users.created")}</th>
                            </tr>
                        </thead>
                        <tbody>{move || user_rows(language, list.with(|l| l.visible_rows()))}</tbody>
                    </table>
                    <PaginationBar current=current_page total=total_pages on_change=on_page/>
                }
                    .into_any()
            }}
        </div>
    }
}

fn user_rows(language: RwSignal<Language>, rows: Vec<User>) -> AnyView {
    if rows.is_empty() {
        return view! {
            <tr class="users-table__empty">
                <td colspan="5">{move || tr(language.get(), "users.empty")}</td>
            </tr>
        }
        .into_any();
    }
    rows.into_iter()
        .map(|user| {
            let active = user.active;
            let status_key = if active { "users.active" } else { "users.inactive" };
            view! {
                <tr>
                    <td>{user.full_name()}</td>
                    <td>{user.email.clone()}</td>
                    <td>{user.role().label()}</td>
                    <td>
                        <span class="status-badge" class:status-badge--active=active>
                            {move || tr(language.get(), status_key)}
                        </span>
                    </td>
                    <td>{format_date(&user.created_at)}</td>
                </tr>
            }
        })
        .collect::<Vec<_>>()
        .into_any()
}
