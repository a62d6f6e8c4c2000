//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::auth_gate::AuthGate;
use crate::components::layout::Layout;
use crate::pages::{
    courses::CoursesPage, dashboard::DashboardPage, login::LoginPage, settings::SettingsPage, users::UsersPage,
};
use crate::query::cache::QueryConfig;
use crate::query::{QueryCaches, SharedCaches};
use crate::state::auth::AuthState;
use crate::util::auth::{api_client, init_session};
use crate::util::config::{API_BASE_META, ClientConfig};
use crate::util::i18n::{Language, LanguageSource, load_saved_language, resolve_initial_language, save_language};

/// HTML shell rendered on the server for SSR + hydration. `api_base_url` is
/// handed to the browser through a meta tag.
pub fn shell(options: LeptosOptions, api_base_url: String) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=API_BASE_META content=api_base_url/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session, caches, language and client config to every route.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let caches: SharedCaches = StoredValue::new_local(QueryCaches::new(QueryConfig::default()));
    let language = RwSignal::new(Language::default());
    let config = ClientConfig::resolve();

    provide_context(auth);
    provide_context(caches);
    provide_context(language);
    provide_context(config.clone());

    // Effects only run in the browser, after hydration.
    Effect::new(move || {
        init_session(auth);
        let saved = load_saved_language();
        let client = api_client(auth, &config);
        leptos::task::spawn_local(async move {
            let (initial, source) = resolve_initial_language(saved.as_deref(), || client.fetch_settings()).await;
            if source == LanguageSource::Settings {
                save_language(initial);
            }
            language.set(initial);
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/academy-admin.css"/>
        <Title text="Academy Admin"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LoginPage/>
                <Route
                    path=StaticSegment("dashboard")
                    view=|| view! { <AuthGate><Layout><DashboardPage/></Layout></AuthGate> }
                />
                <Route
                    path=StaticSegment("courses")
                    view=|| view! { <AuthGate><Layout><CoursesPage/></Layout></AuthGate> }
                />
                <Route
                    path=StaticSegment("users")
                    view=|| view! { <AuthGate><Layout><UsersPage/></Layout></AuthGate> }
                />
                <Route
                    path=StaticSegment("settings")
                    view=|| view! { <AuthGate><Layout><SettingsPage/></Layout></AuthGate> }
                />
            </Routes>
        </Router>
    }
}
