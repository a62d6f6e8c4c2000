//! Ranked course list for the dashboard (most popular, top rated).

use leptos::prelude::*;

use crate::net::types::RankedCourse;

#[component]
pub fn CourseRankings(
    #[prop(into)] title: Signal<String>,
    #[prop(into)] unit: Signal<String>,
    courses: Vec<RankedCourse>,
) -> impl IntoView {
    view! {
        <section class="course-rankings">
            <h2 class="course-rankings__title">{move || title.get()}</h2>
            <ol class="course-rankings__list">
                {courses
                    .into_iter()
                    .map(|course| {
                        let metric = course.metric();
                        view! {
                            <li class="course-rankings__item">
                                <span class="course-rankings__name">{course.title}</span>
                                <span class="course-rankings__metric">
                                    {move || format!("{metric} {}", unit.get())}
                                </span>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ol>
        </section>
    }
}
