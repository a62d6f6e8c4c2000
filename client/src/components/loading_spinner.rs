//! Full-area loading indicator.

use leptos::prelude::*;

use crate::util::i18n::{Language, tr};

#[component]
pub fn LoadingSpinner(#[prop(optional, into)] label: Option<String>) -> impl IntoView {
    let language = expect_context::<RwSignal<Language>>();
    let text = move || label.clone().unwrap_or_else(|| tr(language.get(), "loading").to_owned());

    view! {
        <div class="loading-spinner" role="status" aria-live="polite">
            <span class="loading-spinner__wheel" aria-hidden="true"></span>
            <span class="loading-spinner__label">{text}</span>
        </div>
    }
}
