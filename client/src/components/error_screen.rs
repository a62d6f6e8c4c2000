//! Generic "error loading X" panel shown when a screen's data fails to load.

use leptos::prelude::*;

use crate::util::i18n::{Language, tr};

#[component]
pub fn ErrorScreen(#[prop(into)] title: Signal<String>) -> impl IntoView {
    let language = expect_context::<RwSignal<Language>>();

    view! {
        <div class="error-screen" role="alert">
            <h1 class="error-screen__title">{move || title.get()}</h1>
            <p class="error-screen__message">{move || tr(language.get(), "errorLoading")}</p>
        </div>
    }
}
