use super::*;

fn point(month: u32, year: i32, total_revenue: &str) -> GrowthPoint {
    GrowthPoint { month, year, student_count: 0, total_revenue: total_revenue.to_owned() }
}

#[test]
fn revenue_series_is_chronological_and_scaled_to_best_month() {
    let points = revenue_points(&[point(2, 2024, "500"), point(12, 2023, "2000"), point(1, 2024, "1000.25")]);
    let labels: Vec<&str> = points.iter().map(|p| p.label.as_str()).collect();
    assert_eq!(labels, ["12/2023", "1/2024", "2/2024"]);
    assert_eq!(points[0].amount, 2000.0);
    assert_eq!(points[1].display, "$1,000.25");
    assert_eq!(points[0].height_pct, 100.0);
    assert_eq!(points[2].height_pct, 25.0);
}

#[test]
fn missing_or_garbled_revenue_counts_as_zero() {
    let points = revenue_points(&[point(1, 2024, ""), point(2, 2024, "n/a"), point(3, 2024, "100")]);
    let amounts: Vec<f64> = points.iter().map(|p| p.amount).collect();
    assert_eq!(amounts, [0.0, 0.0, 100.0]);
    assert_eq!(points[0].display, "$0.00");
    assert_eq!(points[0].height_pct, 0.0);
}

#[test]
fn zero_revenue_months_draw_a_flat_line() {
    let points = revenue_points(&[point(1, 2024, "0"), point(2, 2024, "0")]);
    assert_eq!(polyline(&points), "0.0,100.0 100.0,100.0");
}

#[test]
fn line_spreads_months_across_the_plot() {
    let points = revenue_points(&[point(1, 2024, "100"), point(2, 2024, "50"), point(3, 2024, "0")]);
    assert_eq!(polyline(&points), "0.0,0.0 50.0,50.0 100.0,100.0");
}

#[test]
fn single_month_sits_in_the_middle() {
    let points = revenue_points(&[point(5, 2024, "10")]);
    assert_eq!(polyline(&points), "50.0,0.0");
}

#[test]
fn no_points_no_line() {
    assert!(revenue_points(&[]).is_empty());
    assert_eq!(polyline(&[]), "");
}
