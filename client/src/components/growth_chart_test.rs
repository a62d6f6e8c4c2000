use super::*;

fn point(month: u32, year: i32, student_count: u64) -> GrowthPoint {
    GrowthPoint { month, year, student_count, total_revenue: String::new() }
}

#[test]
fn bars_are_chronological_and_scaled_to_peak() {
    let bars = growth_bars(&[point(2, 2024, 50), point(12, 2023, 100), point(1, 2024, 25)]);
    let labels: Vec<&str> = bars.iter().map(|b| b.label.as_str()).collect();
    assert_eq!(labels, ["12/2023", "1/2024", "2/2024"]);
    assert_eq!(bars[0].height_pct, 100.0);
    assert_eq!(bars[1].height_pct, 25.0);
    assert_eq!(bars[2].height_pct, 50.0);
}

#[test]
fn all_zero_months_render_flat() {
    let bars = growth_bars(&[point(3, 2024, 0), point(4, 2024, 0)]);
    assert!(bars.iter().all(|b| b.height_pct == 0.0));
}

#[test]
fn no_points_no_bars() {
    assert!(growth_bars(&[]).is_empty());
}
