//! Board statistics for the dashboard header cards.

use serde::{Deserialize, Serialize};

use crate::entity::{Status, TimelineItem};

/// Status counts over a set of items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSummary {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
    pub pending: usize,
    /// Items with both dates set, i.e. rows the chart can place.
    pub scheduled: usize,
}

impl StatusSummary {
    /// Completed share in percent, 0 for an empty board.
    pub fn completion_percent(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        ((self.completed * 100) / self.total) as u8
    }
}

/// Count items by status.
pub fn summarize(items: &[TimelineItem]) -> StatusSummary {
    let mut summary = StatusSummary {
        total: items.len(),
        ..StatusSummary::default()
    };

    for item in items {
        match item.status {
            Status::Completed => summary.completed += 1,
            Status::InProgress => summary.in_progress += 1,
            Status::Pending => summary.pending += 1,
        }
        if item.is_scheduled() {
            summary.scheduled += 1;
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn counts_by_status() {
        let d = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
        let items = vec![
            TimelineItem::new("1", "a", Status::Completed).with_dates(d, d),
            TimelineItem::new("2", "b", Status::InProgress).with_dates(d, d),
            TimelineItem::new("3", "c", Status::Pending),
            TimelineItem::new("4", "d", Status::Completed),
        ];

        let summary = summarize(&items);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.completed, 2);
        assert_eq!(summary.in_progress, 1);
        assert_eq!(summary.pending, 1);
        assert_eq!(summary.scheduled, 2);
        assert_eq!(summary.completion_percent(), 50);
    }

    #[test]
    fn empty_board_is_all_zero() {
        let summary = summarize(&[]);
        assert_eq!(summary, StatusSummary::default());
        assert_eq!(summary.completion_percent(), 0);
    }
}
