//! Visible date span derivation.
//!
//! The chart window is the min/max over every scheduled item, padded on
//! both sides so bars never touch the chart edge. With nothing scheduled
//! the window falls back to a fixed 30-day span starting today, so column
//! generation always has a non-empty range to work with.

use chrono::{Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::TimelineItem;

/// Days of padding added on each side of the computed span.
pub const DEFAULT_PADDING_DAYS: i64 = 7;

/// Length of the fallback window when no item has a full schedule.
pub const FALLBACK_WINDOW_DAYS: i64 = 30;

/// An inclusive, already-padded date window. `min_date <= max_date` holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub min_date: NaiveDate,
    pub max_date: NaiveDate,
}

impl DateRange {
    pub fn new(min_date: NaiveDate, max_date: NaiveDate) -> Self {
        Self { min_date, max_date }
    }

    /// Whole days between the endpoints.
    pub fn span_days(&self) -> i64 {
        (self.max_date - self.min_date).num_days()
    }
}

/// Derives the visible window from a set of items.
pub struct RangeCalculator {
    padding_days: i64,
}

impl RangeCalculator {
    /// Create a calculator with the default padding.
    pub fn new() -> Self {
        Self {
            padding_days: DEFAULT_PADDING_DAYS,
        }
    }

    /// Set the padding applied on each side of the span.
    pub fn with_padding(mut self, days: i64) -> Self {
        self.padding_days = days;
        self
    }

    /// Compute the window, using the current date for the empty fallback.
    pub fn compute(&self, items: &[TimelineItem]) -> DateRange {
        self.compute_at(items, Utc::now().date_naive())
    }

    /// Compute the window with an explicit "today" for the fallback.
    ///
    /// Items missing either date are skipped; they are not an error.
    pub fn compute_at<'a>(
        &self,
        items: impl IntoIterator<Item = &'a TimelineItem>,
        today: NaiveDate,
    ) -> DateRange {
        let mut bounds: Option<(NaiveDate, NaiveDate)> = None;

        for (start, end) in items.into_iter().filter_map(TimelineItem::date_span) {
            bounds = Some(match bounds {
                None => (start.min(end), start.max(end)),
                Some((min, max)) => (min.min(start).min(end), max.max(start).max(end)),
            });
        }

        match bounds {
            Some((min, max)) => DateRange::new(
                min - Duration::days(self.padding_days),
                max + Duration::days(self.padding_days),
            ),
            None => DateRange::new(today, today + Duration::days(FALLBACK_WINDOW_DAYS)),
        }
    }
}

impl Default for RangeCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience wrapper with default padding.
pub fn timeline_range(items: &[TimelineItem]) -> DateRange {
    RangeCalculator::new().compute(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Status;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn item(id: &str, start: NaiveDate, end: NaiveDate) -> TimelineItem {
        TimelineItem::new(id, id, Status::Pending).with_dates(start, end)
    }

    #[test]
    fn pads_span_on_both_sides() {
        let items = vec![
            item("1", date(2025, 7, 1), date(2025, 7, 10)),
            item("2", date(2025, 7, 3), date(2025, 7, 8)),
        ];
        let range = RangeCalculator::new().compute_at(&items, date(2025, 1, 1));
        assert_eq!(range.min_date, date(2025, 6, 24));
        assert_eq!(range.max_date, date(2025, 7, 17));
    }

    #[test]
    fn empty_board_falls_back_to_thirty_days() {
        let today = date(2025, 7, 20);
        let range = RangeCalculator::new().compute_at(&[], today);
        assert_eq!(range.min_date, today);
        assert_eq!(range.max_date, date(2025, 8, 19));
        assert_eq!(range.span_days(), FALLBACK_WINDOW_DAYS);
    }

    #[test]
    fn unscheduled_items_are_skipped() {
        let mut unscheduled = TimelineItem::new("3", "no dates", Status::Pending);
        unscheduled.start_date = Some(date(2025, 1, 1)); // end missing

        let items = vec![unscheduled, item("1", date(2025, 7, 1), date(2025, 7, 10))];
        let range = RangeCalculator::new().compute_at(&items, date(2025, 1, 1));
        assert_eq!(range.min_date, date(2025, 6, 24));
        assert_eq!(range.max_date, date(2025, 7, 17));
    }

    #[test]
    fn all_unscheduled_uses_fallback() {
        let items = vec![TimelineItem::new("1", "a", Status::Pending)];
        let today = date(2025, 3, 5);
        let range = RangeCalculator::new().compute_at(&items, today);
        assert_eq!(range.min_date, today);
    }

    #[test]
    fn custom_padding() {
        let items = vec![item("1", date(2025, 7, 1), date(2025, 7, 10))];
        let range = RangeCalculator::new()
            .with_padding(3)
            .compute_at(&items, date(2025, 1, 1));
        assert_eq!(range.min_date, date(2025, 6, 28));
        assert_eq!(range.max_date, date(2025, 7, 13));
    }

    #[test]
    fn inverted_item_dates_still_order_the_range() {
        // end < start on an item must not produce an inverted window
        let items = vec![item("1", date(2025, 7, 10), date(2025, 7, 1))];
        let range = RangeCalculator::new().compute_at(&items, date(2025, 1, 1));
        assert!(range.min_date <= range.max_date);
        assert_eq!(range.min_date, date(2025, 6, 24));
        assert_eq!(range.max_date, date(2025, 7, 17));
    }

    #[test]
    fn compute_uses_today_for_fallback() {
        let range = timeline_range(&[]);
        let today = Utc::now().date_naive();
        // allow the date to roll over mid-test
        assert!((range.min_date - today).num_days().abs() <= 1);
        assert_eq!(range.span_days(), FALLBACK_WINDOW_DAYS);
    }
}
