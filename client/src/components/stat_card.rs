//! Dashboard headline metric card.

use leptos::prelude::*;

#[component]
pub fn StatCard(
    #[prop(into)] title: Signal<String>,
    #[prop(into)] value: Signal<String>,
    #[prop(optional, into)] detail: Option<Signal<String>>,
) -> impl IntoView {
    view! {
        <article class="stat-card">
            <h3 class="stat-card__title">{move || title.get()}</h3>
            <p class="stat-card__value">{move || value.get()}</p>
            {detail.map(|detail| view! { <p class="stat-card__detail">{move || detail.get()}</p> })}
        </article>
    }
}
