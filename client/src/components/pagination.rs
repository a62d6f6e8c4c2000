//! Pagination bar: previous/next plus a windowed row of page buttons.

use leptos::prelude::*;

use crate::state::controls::{PageSlot, page_window};
use crate::util::i18n::{Language, tr};

#[component]
pub fn PaginationBar(
    #[prop(into)] current: Signal<u32>,
    #[prop(into)] total: Signal<u32>,
    on_change: Callback<u32>,
) -> impl IntoView {
    let language = expect_context::<RwSignal<Language>>();
    let at_first = move || current.get() <= 1;
    let at_last = move || current.get() >= total.get();

    view! {
        <Show when=move || { total.get() > 1 }>
            <nav class="pagination" aria-label="Pagination">
                <button
                    class="pagination__step"
                    disabled=at_first
                    on:click=move |_| on_change.run(current.get_untracked().saturating_sub(1).max(1))
                >
                    {move || tr(language.get(), "pagination.previous")}
                </button>
                {move || {
                    page_window(current.get(), total.get())
                        .into_iter()
                        .map(|slot| match slot {
                            PageSlot::Page(page) => {
                                let is_current = move || current.get() == page;
                                view! {
                                    <button
                                        class="pagination__page"
                                        class:pagination__page--current=is_current
                                        aria-current=move || is_current().then_some("page")
                                        on:click=move |_| on_change.run(page)
                                    >
                                        {page}
                                    </button>
                                }
                                    .into_any()
                            }
                            PageSlot::Ellipsis => {
                                view! { <span class="pagination__gap">"…"</span> }.into_any()
                            }
                        })
                        .collect::<Vec<_>>()
                }}
                <button
                    class="pagination__step"
                    disabled=at_last
                    on:click=move |_| on_change.run(current.get_untracked() + 1)
                >
                    {move || tr(language.get(), "pagination.next")}
                </button>
            </nav>
        </Show>
    }
}
