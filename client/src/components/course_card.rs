//! Course tile on the courses screen.

use leptos::prelude::*;

use crate::net::types::Course;
use crate::util::format::format_date;
use crate::util::i18n::{Language, tr};

#[component]
pub fn CourseCard(course: Course, #[prop(optional, into)] category: Option<String>) -> impl IntoView {
    let language = expect_context::<RwSignal<Language>>();
    let featured = course.is_featured;
    let created = format_date(&course.created_at);

    view! {
        <article class="course-card" class:course-card--featured=featured>
            <header class="course-card__header">
                <h3 class="course-card__title">{course.title}</h3>
                <Show when=move || featured>
                    <span class="course-card__badge">{move || tr(language.get(), "courses.featured")}</span>
                </Show>
            </header>
            <p class="course-card__description">{course.description}</p>
            <footer class="course-card__meta">
                {category.map(|name| view! { <span class="course-card__category">{name}</span> })}
                <time class="course-card__date" datetime=course.created_at>{created}</time>
            </footer>
        </article>
    }
}
