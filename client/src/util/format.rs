//! Display formatting for dates and money.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

/// Render an ISO timestamp or date as `Mar 5, 2024`.
///
/// Timestamps render in their own offset. Empty input renders empty and
/// anything unparseable is returned unchanged.
pub fn format_date(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return String::new();
    }
    parse_date(raw)
        .and_then(|date| date.format(format_description!("[month repr:short] [day padding:none], [year]")).ok())
        .unwrap_or_else(|| raw.to_owned())
}

fn parse_date(raw: &str) -> Option<Date> {
    if let Ok(timestamp) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(timestamp.date());
    }
    let day = raw.get(..10)?;
    Date::parse(day, format_description!("[year]-[month]-[day]")).ok()
}

/// Render a decimal amount with thousands separators and two decimals,
/// e.g. `"12500.5"` as `12,500.50`. Unparseable input is returned unchanged.
pub fn format_money(raw: &str) -> String {
    let Ok(amount) = raw.trim().parse::<f64>() else {
        return raw.to_owned();
    };
    if !amount.is_finite() {
        return raw.to_owned();
    }
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}{}.{cents}", group_thousands(whole))
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
