//! Timeline column (tick) generation.
//!
//! Columns are the axis boundaries the bars are positioned against. They
//! are regenerated from the current range and view mode on every pass --
//! never cached -- which keeps generation a pure function of its inputs.

use chrono::{Datelike, Duration, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::range::DateRange;

/// Temporal granularity of the column axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Days,
    Weeks,
    Months,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Days => "days",
            Self::Weeks => "weeks",
            Self::Months => "months",
        }
    }

    /// The next tick after `date` in this granularity.
    ///
    /// Month stepping uses calendar arithmetic: the day-of-month is
    /// clamped to the target month's last valid day (Jan 31 -> Feb 28),
    /// never a fixed 30-day add.
    pub fn advance(&self, date: NaiveDate) -> NaiveDate {
        match self {
            Self::Days => date + Duration::days(1),
            Self::Weeks => date + Duration::days(7),
            Self::Months => date
                .checked_add_months(Months::new(1))
                .unwrap_or(NaiveDate::MAX),
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "days" => Ok(Self::Days),
            "weeks" => Ok(Self::Weeks),
            "months" => Ok(Self::Months),
            other => Err(format!("unknown view mode: {other}")),
        }
    }
}

/// How many day columns to emit in [`ViewMode::Days`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DayWindow {
    /// One column per day across the whole range.
    SpanDerived,
    /// Exactly this many columns from the range start, for a denser
    /// short view.
    Fixed(u32),
}

impl Default for DayWindow {
    fn default() -> Self {
        Self::SpanDerived
    }
}

/// Generate the tick sequence for a range at the given granularity.
///
/// The first tick is `range.min_date`; ticks then advance until the next
/// one would exceed `range.max_date`. The result is strictly increasing
/// and never empty (`min == max` still yields the single boundary tick).
pub fn generate_columns(range: &DateRange, mode: ViewMode) -> Vec<NaiveDate> {
    generate_columns_with(range, mode, DayWindow::default())
}

/// [`generate_columns`] with an explicit day-window policy.
pub fn generate_columns_with(
    range: &DateRange,
    mode: ViewMode,
    day_window: DayWindow,
) -> Vec<NaiveDate> {
    if mode == ViewMode::Days {
        if let DayWindow::Fixed(count) = day_window {
            let count = count.max(1);
            return (0..count)
                .map(|i| range.min_date + Duration::days(i as i64))
                .collect();
        }
    }

    let mut columns = Vec::new();
    let mut current = range.min_date;
    while current <= range.max_date {
        columns.push(current);
        current = mode.advance(current);
    }
    columns
}

/// Header label for a tick, matching the chart header: days "Jul 1",
/// weeks "Week N" (week-of-month), months "Jul 2025".
pub fn column_label(date: NaiveDate, mode: ViewMode) -> String {
    match mode {
        ViewMode::Days => date.format("%b %-d").to_string(),
        ViewMode::Weeks => format!("Week {}", (date.day() + 6) / 7),
        ViewMode::Months => date.format("%b %Y").to_string(),
    }
}
