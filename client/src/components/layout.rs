//! Authenticated page frame: sidebar plus content area.

use leptos::prelude::*;

use crate::components::sidebar::Sidebar;

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let collapsed = RwSignal::new(false);

    view! {
        <div class="layout">
            <Sidebar collapsed=collapsed/>
            <main class="layout__content" class:layout__content--wide=move || collapsed.get()>
                {children()}
            </main>
        </div>
    }
}
