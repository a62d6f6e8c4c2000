//! Tenant settings screen with a view/edit toggle.
//!
//! SYSTEM CONTEXT
//! ==============
//! Settings are read through the shared cache. Edits accumulate in a draft
//! that is overlaid on the fetched values; saving PUTs the merged record,
//! refreshes the cache and applies the saved default language to the UI.

use futures::FutureExt;
use leptos::prelude::*;

use crate::components::error_screen::ErrorScreen;
use crate::components::loading_spinner::LoadingSpinner;
use crate::net::types::Settings;
use crate::query::SharedCaches;
use crate::query::cache::QueryKey;
use crate::query::remote::{Remote, spawn_query};
use crate::state::auth::AuthState;
use crate::state::settings::{LANGUAGES, SettingsEditor, SettingsField, TIMEZONES, field_value, option_label};
use crate::util::auth::{api_client, expire_on_unauthorized};
use crate::util::config::ClientConfig;
use crate::util::format::format_date;
use crate::util::i18n::{Language, save_language, tr};

pub fn settings_key() -> QueryKey {
    QueryKey::new("settings")
}

/// Outcome banner after a save attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Notice {
    Saved,
    Failed,
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let caches = expect_context::<SharedCaches>();
    let config = StoredValue::new(expect_context::<ClientConfig>());
    let language = expect_context::<RwSignal<Language>>();

    let settings = RwSignal::new(Remote::<Settings>::Loading);
    let editor = RwSignal::new(SettingsEditor::default());
    let notice = RwSignal::new(None::<Notice>);

    {
        let client = config.with_value(|c| api_client(auth, c));
        let cache = caches.with_value(|c| c.settings.clone());
        spawn_query(
            cache,
            settings_key(),
            move || async move { client.fetch_settings().await }.boxed_local(),
            settings,
            auth,
        );
    }

    let shown = Memo::new(move |_| {
        let base = settings.with(|s| s.value().cloned())?;
        Some(editor.with(|e| if e.editing { e.merged(&base) } else { base }))
    });

    let on_save = move |_| {
        let Some(base) = settings.with_untracked(|s| s.value().cloned()) else {
            return;
        };
        if editor.with_untracked(|e| e.saving) {
            return;
        }
        let payload = editor.with_untracked(|e| e.save_payload(&base));
        editor.update(|e| e.saving = true);
        notice.set(None);

        let client = config.with_value(|c| api_client(auth, c));
        let cache = caches.with_value(|c| c.settings.clone());
        leptos::task::spawn_local(async move {
            match client.update_settings(&payload).await {
                Ok(saved) => {
                    cache.set(settings_key(), saved.clone());
                    if let Some(lang) = Language::from_code(&saved.default_language) {
                        language.set(lang);
                        save_language(lang);
                    }
                    settings.set(Remote::Ready(saved));
                    editor.update(|e| e.finish_save(true));
                    notice.set(Some(Notice::Saved));
                }
                Err(e) => {
                    leptos::logging::warn!("settings update failed: {e}");
                    expire_on_unauthorized(auth, &e);
                    cache.invalidate(&settings_key());
                    editor.update(|ed| ed.finish_save(false));
                    notice.set(Some(Notice::Failed));
                }
            }
        });
    };

    let text_field = move |field: SettingsField, label_key: &'static str, input_type: &'static str| {
        view! {
            <div class="settings-field">
                <label class="settings-field__label">{move || tr(language.get(), label_key)}</label>
                <Show
                    when=move || editor.with(|e| e.editing)
                    fallback=move || {
                        view! {
                            <p class="settings-field__value">
                                {move || shown.with(|s| s.as_ref().map(|s| field_value(s, field).to_owned()))}
                            </p>
                        }
                    }
                >
                    <input
                        class="settings-field__input"
                        type=input_type
                        prop:value=move || {
                            shown.with(|s| s.as_ref().map(|s| field_value(s, field).to_owned()).unwrap_or_default())
                        }
                        on:input=move |ev| editor.update(|e| e.set_field(field, event_target_value(&ev)))
                    />
                </Show>
            </div>
        }
    };

    let select_field = move |field: SettingsField,
                             label_key: &'static str,
                             placeholder_key: &'static str,
                             options: &'static [(&'static str, &'static str)]| {
        let current = move || shown.with(|s| s.as_ref().map(|s| field_value(s, field).to_owned()).unwrap_or_default());
        view! {
            <div class="settings-field">
                <label class="settings-field__label">{move || tr(language.get(), label_key)}</label>
                <Show
                    when=move || editor.with(|e| e.editing)
                    fallback=move || {
                        view! {
                            <p class="settings-field__value">{move || option_label(options, &current()).to_owned()}</p>
                        }
                    }
                >
                    <select
                        class="settings-field__input"
                        prop:value=current
                        on:change=move |ev| editor.update(|e| e.set_field(field, event_target_value(&ev)))
                    >
                        <option value="" disabled=true>{move || tr(language.get(), placeholder_key)}</option>
                        {options
                            .iter()
                            .map(|&(value, label)| view! { <option value=value>{label}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </Show>
            </div>
        }
    };

    view! {
        <div class="settings-page">
            {move || match settings.get() {
                Remote::Loading => view! { <LoadingSpinner/> }.into_any(),
                Remote::Failed(_) => {
                    let title = Signal::derive(move || tr(language.get(), "settings.title").to_owned());
                    view! { <ErrorScreen title=title/> }.into_any()
                }
                Remote::Ready(loaded) => {
                    let created = format_date(&loaded.created_at);
                    view! {
                        <header class="settings-page__header">
                            <h1>{move || tr(language.get(), "settings.title")}</h1>
                            <div class="settings-page__actions">
                                <Show
                                    when=move || editor.with(|e| e.editing)
                                    fallback=move || {
                                        view! {
                                            <button class="btn" on:click=move |_| editor.update(SettingsEditor::begin)>
                                                {move || tr(language.get(), "edit")}
                                            </button>
                                        }
                                    }
                                >
                                    <button
                                        class="btn btn--secondary"
                                        disabled=move || editor.with(|e| e.saving)
                                        on:click=move |_| editor.update(SettingsEditor::cancel)
                                    >
                                        {move || tr(language.get(), "cancel")}
                                    </button>
                                    <button
                                        class="btn btn--primary"
                                        disabled=move || editor.with(|e| e.saving)
                                        on:click=on_save
                                    >
                                        {move || tr(language.get(), "save")}
                                    </button>
                                </Show>
                            </div>
                        </header>
                        {move || {
                            notice.get().map(|n| {
                                let (title, body, class) = match n {
                                    Notice::Saved => ("updated", "updatedDescription", "notice notice--success"),
                                    Notice::Failed => ("updateFailed", "updateFailedDescription", "notice notice--error"),
                                };
                                view! {
                                    <div class=class role="status">
                                        <strong>{move || tr(language.get(), title)}</strong>
                                        <p>{move || tr(language.get(), body)}</p>
                                    </div>
                                }
                            })
                        }}
                        <section class="settings-page__form">
                            {text_field(SettingsField::Name, "settings.company", "text")}
                            {text_field(SettingsField::Email, "settings.email", "email")}
                            {text_field(SettingsField::Website, "settings.website", "url")}
                            {text_field(SettingsField::LogoUrl, "settings.logo", "url")}
                            {select_field(SettingsField::DefaultLanguage, "settings.language", "settings.selectLanguage", LANGUAGES)}
                            {select_field(SettingsField::Timezone, "settings.timezone", "settings.selectTimezone", TIMEZONES)}
                            {text_field(SettingsField::ThemeColor, "settings.themeColor", "text")}
                            <div
                                class="settings-page__swatch"
                                style=move || {
                                    let color = shown.with(|s| s.as_ref().map(|s| s.theme_color.clone()).unwrap_or_default());
                                    format!("background-color: {color}")
                                }
                                title=move || tr(language.get(), "settings.enterHexColor")
                            ></div>
                            <p class="settings-page__created">
                                {move || tr(language.get(), "settings.createdAt")}": "{created}
                            </p>
                        </section>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
