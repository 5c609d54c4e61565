use std::fmt::Write as _;

use chrono::{Datelike as _, NaiveDate, TimeDelta};

pub const DEFAULT_DAY_FORMAT: &str = "%b %d";

fn relative_label(date: NaiveDate, today: NaiveDate) -> Option<&'static str> {
    match date.signed_duration_since(today) {
        d if d == TimeDelta::zero() => Some("today"),
        d if d == TimeDelta::days(-1) => Some("yesterday"),
        d if d == TimeDelta::days(1) => Some("tomorrow"),
        _ => None,
    }
}

/// "today", "yesterday" or "tomorrow" relative to `today`; otherwise `date` rendered
/// with the strftime `format`.
#[must_use]
pub fn naturalday(date: NaiveDate, today: NaiveDate, format: &str) -> String {
    relative_label(date, today).map_or_else(|| render(date, format), str::to_string)
}

/// Like [`naturalday`], adding the year for dates outside the current one.
#[must_use]
pub fn naturaldate(date: NaiveDate, today: NaiveDate) -> String {
    if let Some(label) = relative_label(date, today) {
        return label.to_string();
    }
    if date.year() == today.year() {
        render(date, DEFAULT_DAY_FORMAT)
    } else {
        render(date, "%b %d %Y")
    }
}

/// Invalid strftime patterns fall back to the ISO date.
fn render(date: NaiveDate, format: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(format)).is_err() {
        log::debug!("invalid date format `{format}`, using ISO form");
        return date.to_string();
    }
    out
}
