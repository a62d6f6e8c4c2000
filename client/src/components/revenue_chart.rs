//! Monthly revenue as an SVG line, drawn beside the growth bars.

#[cfg(test)]
#[path = "revenue_chart_test.rs"]
mod revenue_chart_test;

use leptos::prelude::*;

use crate::net::types::GrowthPoint;
use crate::util::format::format_money;

/// One month on the revenue line.
#[derive(Clone, Debug, PartialEq)]
pub struct RevenuePoint {
    pub label: String,
    pub amount: f64,
    /// Formatted for display, e.g. `$1,250.50`.
    pub display: String,
    /// Height relative to the best month, `0.0..=100.0`.
    pub height_pct: f64,
}

/// Points in chronological order, scaled to the best month. Missing or
/// unparseable revenue counts as zero.
pub fn revenue_points(points: &[GrowthPoint]) -> Vec<RevenuePoint> {
    let mut sorted: Vec<&GrowthPoint> = points.iter().collect();
    sorted.sort_by_key(|p| (p.year, p.month));
    let amounts: Vec<f64> = sorted.iter().map(|p| parse_amount(&p.total_revenue)).collect();
    let max = amounts.iter().copied().fold(0.0_f64, f64::max);

    sorted
        .into_iter()
        .zip(amounts)
        .map(|(p, amount)| RevenuePoint {
            label: format!("{}/{}", p.month, p.year),
            amount,
            display: format!("${}", format_money(&format!("{amount:.2}"))),
            height_pct: if max > 0.0 { amount.max(0.0) * 100.0 / max } else { 0.0 },
        })
        .collect()
}

fn parse_amount(raw: &str) -> f64 {
    let amount = raw.trim().parse::<f64>().unwrap_or(0.0);
    if amount.is_finite() { amount } else { 0.0 }
}

/// SVG `points` attribute for a `0 0 100 100` view box, months spread
/// evenly left to right. A single month sits in the middle.
#[allow(clippy::cast_precision_loss)]
pub fn polyline(points: &[RevenuePoint]) -> String {
    let step = if points.len() > 1 { 100.0 / (points.len() - 1) as f64 } else { 0.0 };
    points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let x = if points.len() > 1 { i as f64 * step } else { 50.0 };
            format!("{x:.1},{:.1}", 100.0 - p.height_pct)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[component]
pub fn RevenueChart(#[prop(into)] title: Signal<String>, points: Vec<GrowthPoint>) -> impl IntoView {
    let points = revenue_points(&points);
    let line = polyline(&points);

    view! {
        <section class="revenue-chart">
            <h2 class="revenue-chart__title">{move || title.get()}</h2>
            <svg class="revenue-chart__plot" viewBox="0 0 100 100" preserveAspectRatio="none">
                <polyline class="revenue-chart__line" points=line fill="none"></polyline>
            </svg>
            <ol class="revenue-chart__months">
                {points
                    .into_iter()
                    .map(|p| {
                        let title = format!("{}: {}", p.label, p.display);
                        view! {
                            <li class="revenue-chart__month" title=title>
                                <span class="revenue-chart__label">{p.label}</span>
                                <span class="revenue-chart__amount">{p.display}</span>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ol>
        </section>
    }
}
