//! Course catalogue: server-paged listing with search and category filter.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every committed search, category change or page change produces a new
//! `ListQuery`. One effect turns the query into a page load through the
//! shared course cache and then warms the neighbouring pages. Results of a
//! superseded query are dropped by the list's generation check.

use futures::FutureExt;
use leptos::prelude::*;

use crate::components::course_card::CourseCard;
use crate::components::error_screen::ErrorScreen;
use crate::components::pagination::PaginationBar;
use crate::net::types::Category;
use crate::query::SharedCaches;
use crate::query::remote::{Remote, spawn_query};
use crate::state::auth::AuthState;
use crate::state::controls::{ALL, FilterState, LoadingIndicator, PaginationState, SearchState};
use crate::state::courses::{
    CourseFilters, CoursesSource, categories_key, category_name, course_header, courses_list,
};
use crate::state::list::{load_page, prefetch_pages};
use crate::util::auth::{api_client, expire_on_unauthorized};
use crate::util::config::ClientConfig;
use crate::util::i18n::{Language, tr};
use crate::util::timer::after_settle_delay;

#[component]
pub fn CoursesPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let caches = expect_context::<SharedCaches>();
    let config = expect_context::<ClientConfig>();
    let language = expect_context::<RwSignal<Language>>();

    let list = RwSignal::new(courses_list());
    let search = RwSignal::new(SearchState::default());
    let category = RwSignal::new(FilterState::<u64>::default());
    let pagination = RwSignal::new(PaginationState::default());
    let indicator = RwSignal::new(LoadingIndicator::default());
    let categories = RwSignal::new(Remote::<Vec<Category>>::Loading);

    {
        let client = api_client(auth, &config);
        let cache = caches.with_value(|c| c.categories.clone());
        spawn_query(
            cache,
            categories_key(),
            move || async move { client.fetch_categories().await }.boxed_local(),
            categories,
            auth,
        );
    }

    let query = Memo::new(move |_| list.with(|l| l.query.clone()));

    {
        let config = config.clone();
        Effect::new(move || {
            let query = query.get();
            let generation = list.try_update(|l| l.begin_load()).unwrap_or_default();
            let source = CoursesSource::for_query(api_client(auth, &config), &query);
            let cache = caches.with_value(|c| c.courses.clone());
            leptos::task::spawn_local(async move {
                match load_page(&cache, &source, query.page).await {
                    Ok(page) => {
                        if list.try_update(|l| l.apply_page(generation, page)).unwrap_or(false) {
                            let neighbours = list.with_untracked(|l| l.neighbor_pages());
                            prefetch_pages(&cache, &source, &neighbours);
                        }
                    }
                    Err(e) => {
                        leptos::logging::warn!("courses load failed: page={} error={e}", query.page);
                        expire_on_unauthorized(auth, &e);
                        list.update(|l| {
                            l.fail(generation, e);
                        });
                    }
                }
            });
        });
    }

    Effect::new(move || {
        let fetching = list.with(|l| l.is_loading());
        if let Some(token) = indicator.try_update(|i| i.observe(fetching)).flatten() {
            after_settle_delay(move || indicator.update(|i| i.settle(token)));
        }
    });

    let apply_search = move |changed: Option<bool>| {
        if changed.unwrap_or(false) {
            let committed = search.with_untracked(|s| s.query.clone());
            list.update(|l| l.set_search_term(&committed));
            pagination.update(PaginationState::reset);
        }
    };
    let commit_search = move || apply_search(search.try_update(SearchState::submit));

    let on_category = move |ev: leptos::ev::Event| {
        category.update(|c| c.select(&event_target_value(&ev)));
        let selected = category.with_untracked(|c| c.selected);
        list.update(|l| l.set_filter(CourseFilters { category_id: selected }));
        pagination.update(PaginationState::reset);
    };

    let on_clear = move |_| {
        search.update(SearchState::clear);
        category.update(FilterState::clear);
        list.update(|l| l.clear_filters());
        pagination.update(PaginationState::reset);
    };

    let on_page = Callback::new(move |page: u32| {
        if !list.try_update(|l| l.set_page(page)).unwrap_or(false) {
            return;
        }
        if let Some(token) = pagination.try_update(|p| p.change_page(page)).flatten() {
            after_settle_delay(move || pagination.update(|p| p.settle(token)));
        }
    });

    let category_list = move || categories.with(|c| c.value().cloned().unwrap_or_default());
    let header = Memo::new(move |_| {
        let cats = category_list();
        let selected = list.with(|l| l.query.filter.category_id);
        let committed = list.with(|l| l.query.search_term.clone());
        course_header(category_name(&cats, selected), &committed)
    });
    let current_page = Signal::derive(move || list.with(|l| l.query.page));
    let total_pages = Signal::derive(move || list.with(|l| l.total_pages()));

    view! {
        <div class="courses-page">
            <header class="courses-page__header">
                <h1>{move || header.get().0}</h1>
                <p class="courses-page__subtitle">{move || header.get().1}</p>
            </header>

            <div class="courses-page__controls">
                <input
                    class="courses-page__search"
                    type="search"
                    placeholder=move || tr(language.get(), "courses.search")
                    prop:value=move || search.with(|s| s.term.clone())
                    on:input=move |ev| search.update(|s| s.set_term(&event_target_value(&ev)))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        let key = ev.key();
                        if key == "Enter" {
                            ev.prevent_default();
                        }
                        apply_search(search.try_update(|s| s.on_key(&key)));
                    }
                />
                <button class="courses-page__search-button" on:click=move |_| commit_search()>
                    {move || tr(language.get(), "courses.searchButton")}
                </button>
                <select
                    class="courses-page__category"
                    on:change=on_category
                    prop:value=move || {
                        category.with(|c| c.selected.map_or_else(|| ALL.to_owned(), |id| id.to_string()))
                    }
                >
                    <option value=ALL>{move || tr(language.get(), "courses.allCategories")}</option>
                    {move || {
                        category_list()
                            .into_iter()
                            .map(|c| view! { <option value=c.id.to_string()>{c.name}</option> })
                            .collect::<Vec<_>>()
                    }}
                </select>
                <Show when=move || list.with(|l| l.has_active_filters())>
                    <button class="courses-page__clear" on:click=on_clear>
                        {move || tr(language.get(), "courses.clearAll")}
                    </button>
                </Show>
            </div>

            <Show
                when=move || list.with(|l| l.error().is_none())
                fallback=move || {
                    view! {
                        <ErrorScreen title=Signal::derive(move || tr(language.get(), "courses.title").to_owned())/>
                    }
                }
            >
                <p class="courses-page__total">
                    {move || format!("{}: {}", tr(language.get(), "courses.total"), list.with(|l| l.total_items()))}
                </p>
                <div
                    class="courses-page__grid"
                    class:courses-page__grid--loading=move || indicator.with(|i| i.visible)
                    class:courses-page__grid--changing=move || pagination.with(|p| p.changing)
                    aria-busy=move || indicator.with(|i| i.visible).to_string()
                >
                    <Show when=move || indicator.with(|i| i.visible)>
                        <p class="courses-page__loading">{move || tr(language.get(), "courses.loading")}</p>
                    </Show>
                    {move || {
                        let cats = category_list();
                        let rows = list.with(|l| l.visible_rows());
                        if rows.is_empty() && !list.with(|l| l.is_loading()) {
                            return view! {
                                <p class="courses-page__empty">{move || tr(language.get(), "courses.empty")}</p>
                            }
                                .into_any();
                        }
                        rows.into_iter()
                            .map(|course| {
                                let name = category_name(&cats, Some(course.category_id)).map(str::to_owned);
                                match name {
                                    Some(name) => view! { <CourseCard course=course category=name/> }.into_any(),
                                    None => view! { <CourseCard course=course/> }.into_any(),
                                }
                            })
                            .collect::<Vec<_>>()
                            .into_any()
                    }}
                </div>
                <PaginationBar current=current_page total=total_pages on_change=on_page/>
            </Show>
        </div>
    }
}
