//! Monthly student growth as a simple bar chart.

#[cfg(test)]
#[path = "growth_chart_test.rs"]
mod growth_chart_test;

use leptos::prelude::*;

use crate::net::types::GrowthPoint;

/// One rendered bar.
#[derive(Clone, Debug, PartialEq)]
pub struct GrowthBar {
    pub label: String,
    pub count: u64,
    /// Height relative to the tallest bar, `0.0..=100.0`.
    pub height_pct: f64,
}

/// Bars in chronological order, scaled to the largest month.
#[allow(clippy::cast_precision_loss)]
pub fn growth_bars(points: &[GrowthPoint]) -> Vec<GrowthBar> {
    let mut sorted: Vec<&GrowthPoint> = points.iter().collect();
    sorted.sort_by_key(|p| (p.year, p.month));
    let max = sorted.iter().map(|p| p.student_count).max().unwrap_or(0);

    sorted
        .into_iter()
        .map(|p| GrowthBar {
            label: format!("{}/{}", p.month, p.year),
            count: p.student_count,
            height_pct: if max == 0 { 0.0 } else { p.student_count as f64 * 100.0 / max as f64 },
        })
        .collect()
}

#[component]
pub fn GrowthChart(#[prop(into)] title: Signal<String>, points: Vec<GrowthPoint>) -> impl IntoView {
    let bars = growth_bars(&points);

    view! {
        <section class="growth-chart">
            <h2 class="growth-chart__title">{move || title.get()}</h2>
            <div class="growth-chart__bars" role="list">
                {bars
                    .into_iter()
                    .map(|bar| {
                        let style = format!("height: {:.1}%", bar.height_pct);
                        let title = format!("{}: {}", bar.label, bar.count);
                        view! {
                            <div class="growth-chart__column" role="listitem" title=title>
                                <span class="growth-chart__count">{bar.count}</span>
                                <div class="growth-chart__bar" style=style></div>
                                <span class="growth-chart__label">{bar.label}</span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
