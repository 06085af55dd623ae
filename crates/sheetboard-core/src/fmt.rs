//! Display formatting shared by the table views.

use chrono::{Datelike, NaiveDate};

/// `YYYY-MM-DD`.
pub fn day(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// `MM/DD'YY`, the compact form the summary view uses for last-transaction
/// dates.
pub fn short_day(date: NaiveDate) -> String {
    format!("{:02}/{:02}'{:02}", date.month(), date.day(), date.year() % 100)
}

/// `YYYY-MM`, the key the month filter compares against.
pub fn month(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

/// Whole-unit amounts; the dashboard never shows cents.
pub fn amount(value: f64) -> String {
    format!("{value:.0}")
}
