use super::*;

#[test]
fn dates_render_short_month_day_year() {
    assert_eq!(format_date("2024-03-05"), "Mar 5, 2024");
    assert_eq!(format_date("2024-03-05T10:15:00Z"), "Mar 5, 2024");
    assert_eq!(format_date("2023-12-31T23:59:59.123+00:00"), "Dec 31, 2023");
}

#[test]
fn timestamps_without_offset_use_their_date_part() {
    assert_eq!(format_date("2024-11-20T08:00:00"), "Nov 20, 2024");
}

#[test]
fn empty_and_garbage_dates() {
    assert_eq!(format_date(""), "");
    assert_eq!(format_date("   "), "");
    assert_eq!(format_date("yesterday"), "yesterday");
}

#[test]
fn money_gets_separators_and_cents() {
    assert_eq!(format_money("12500.5"), "12,500.50");
    assert_eq!(format_money("999"), "999.00");
    assert_eq!(format_money("1234567.891"), "1,234,567.89");
    assert_eq!(format_money("0"), "0.00");
    assert_eq!(format_money("-1500"), "-1,500.00");
}

#[test]
fn unparseable_money_is_unchanged() {
    assert_eq!(format_money("n/a"), "n/a");
}
