//! Metrics overview: headline stat cards, growth and revenue charts, course rankings.
//!
//! SYSTEM CONTEXT
//! ==============
//! Landing route after login. Its three resources load independently through
//! the shared caches; any one failing replaces the screen with the error panel.

use futures::FutureExt;
use leptos::prelude::*;

use crate::components::course_rankings::CourseRankings;
use crate::components::error_screen::ErrorScreen;
use crate::components::growth_chart::GrowthChart;
use crate::components::loading_spinner::LoadingSpinner;
use crate::components::revenue_chart::RevenueChart;
use crate::components::stat_card::StatCard;
use crate::net::types::{CourseStats, Growth, Overview};
use crate::query::SharedCaches;
use crate::query::cache::QueryKey;
use crate::query::remote::{Remote, spawn_query};
use crate::state::auth::AuthState;
use crate::util::auth::api_client;
use crate::util::config::ClientConfig;
use crate::util::format::format_money;
use crate::util::i18n::{Language, tr};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let caches = expect_context::<SharedCaches>();
    let config = expect_context::<ClientConfig>();
    let language = expect_context::<RwSignal<Language>>();

    let overview = RwSignal::new(Remote::<Overview>::Loading);
    let growth = RwSignal::new(Remote::<Growth>::Loading);
    let stats = RwSignal::new(Remote::<CourseStats>::Loading);

    let client = api_client(auth, &config);
    caches.with_value(|c| {
        let fetcher = client.clone();
        spawn_query(
            c.overview.clone(),
            QueryKey::new("overview"),
            move || async move { fetcher.fetch_overview().await }.boxed_local(),
            overview,
            auth,
        );
        let fetcher = client.clone();
        spawn_query(
            c.growth.clone(),
            QueryKey::new("overview").with("growth"),
            move || async move { fetcher.fetch_growth().await }.boxed_local(),
            growth,
            auth,
        );
        let fetcher = client;
        spawn_query(
            c.course_stats.clone(),
            QueryKey::new("overview").with("courses"),
            move || async move { fetcher.fetch_course_stats().await }.boxed_local(),
            stats,
            auth,
        );
    });

    let any_failed = move || overview.with(Remote::is_error) || growth.with(Remote::is_error) || stats.with(Remote::is_error);
    let any_loading =
        move || overview.with(Remote::is_loading) || growth.with(Remote::is_loading) || stats.with(Remote::is_loading);
    let t = move |key: &'static str| Signal::derive(move || tr(language.get(), key).to_owned());

    view! {
        <div class="dashboard-page">
            {move || {
                if any_failed() {
                    return view! { <ErrorScreen title=t("dashboard.title")/> }.into_any();
                }
                if any_loading() {
                    return view! { <LoadingSpinner/> }.into_any();
                }
                let (Some(o), Some(g), Some(s)) = (
                    overview.with(|r| r.value().cloned()),
                    growth.with(|r| r.value().cloned()),
                    stats.with(|r| r.value().cloned()),
                ) else {
                    return view! { <LoadingSpinner/> }.into_any();
                };
                dashboard_body(language, o, g, s).into_any()
            }}
        </div>
    }
}

fn dashboard_body(language: RwSignal<Language>, o: Overview, g: Growth, s: CourseStats) -> impl IntoView {
    let t = move |key: &'static str| Signal::derive(move || tr(language.get(), key).to_owned());
    let active_teachers = o.active_teachers;
    let active_students = o.active_students;
    let month_enrollments = o.total_enrollments_current_month;
    let month_revenue = format_money(&o.total_revenue_current_month);
    let avg_rating = o.avg_course_rating;

    view! {
        <header class="dashboard-page__header">
            <h1>{move || tr(language.get(), "dashboard.title")}</h1>
        </header>
        <section class="dashboard-page__stats">
            <StatCard
                title=t("dashboard.teachers")
                value=o.teachers.to_string()
                detail=Signal::derive(move || {
                    format!("{active_teachers} {}", tr(language.get(), "dashboard.active"))
                })
            />
            <StatCard
                title=t("dashboard.students")
                value=o.students.to_string()
                detail=Signal::derive(move || {
                    format!("{active_students} {}", tr(language.get(), "dashboard.active"))
                })
            />
            <StatCard
                title=t("dashboard.courses")
                value=o.total_courses.to_string()
                detail=Signal::derive(move || {
                    format!("{}: {:.1}", tr(language.get(), "dashboard.avgRating"), avg_rating)
                })
            />
            <StatCard
                title=t("dashboard.revenue")
                value=format!("${}", format_money(&o.total_revenue))
                detail=Signal::derive(move || {
                    format!("${month_revenue} {}", tr(language.get(), "dashboard.thisMonth"))
                })
            />
            <StatCard
                title=t("dashboard.enrollments")
                value=o.total_enrollments.to_string()
                detail=Signal::derive(move || {
                    format!("{month_enrollments} {}", tr(language.get(), "dashboard.thisMonth"))
                })
            />
        </section>
        <section class="dashboard-page__charts">
            <GrowthChart title=t("dashboard.growth") points=g.growth.clone()/>
            <RevenueChart title=t("dashboard.revenueTrend") points=g.growth/>
        </section>
        <section class="dashboard-page__rankings">
            <CourseRankings
                title=t("dashboard.mostPopular")
                unit=t("dashboard.enrolled")
                courses=s.courses.most_popular
            />
            <CourseRankings
                title=t("dashboard.topRated")
                unit=t("dashboard.reviews")
                courses=s.courses.top_rated
            />
        </section>
    }
}
