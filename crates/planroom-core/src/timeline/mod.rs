//! Timeline layout engine.
//!
//! This module provides:
//! - Visible date range derivation from dated items
//! - Column (tick) generation at day/week/month granularity
//! - Bar geometry mapping date intervals to pixel rectangles
//! - View state (zoom, granularity, filter, selection)
//!
//! Data flows one way: items -> range -> columns -> bars. Every step is
//! a pure function of its inputs; nothing here mutates the items.

mod columns;
mod layout;
mod range;
mod view;

pub use columns::{column_label, generate_columns, generate_columns_with, DayWindow, ViewMode};
pub use layout::{
    BarLayout, BarRect, LayoutMode, BASE_COLUMN_WIDTH, DEFAULT_FILL_RATIO, MIN_BAR_WIDTH,
};
pub use range::{
    timeline_range, DateRange, RangeCalculator, DEFAULT_PADDING_DAYS, FALLBACK_WINDOW_DAYS,
};
pub use view::{clamp_zoom, StatusFilter, ViewState, MAX_ZOOM, MIN_ZOOM, ZOOM_STEP};

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::{Status, TimelineItem};

/// Where the status filter is applied.
///
/// The two placements render differently: filtering before range
/// computation shrinks the window to the visible items, filtering rows
/// only keeps the window stable and leaves gaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterScope {
    /// Filter before range computation; the window tracks visible items.
    Range,
    /// Compute the window from all items; filter rendered rows only.
    Rows,
}

impl Default for FilterScope {
    fn default() -> Self {
        Self::Range
    }
}

/// Layout knobs for one chart pass.
#[derive(Debug, Clone)]
pub struct ChartConfig {
    pub padding_days: i64,
    pub layout_mode: LayoutMode,
    pub day_window: DayWindow,
    pub filter_scope: FilterScope,
    pub min_bar_width: f64,
    pub fill_ratio: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            padding_days: DEFAULT_PADDING_DAYS,
            layout_mode: LayoutMode::default(),
            day_window: DayWindow::default(),
            filter_scope: FilterScope::default(),
            min_bar_width: MIN_BAR_WIDTH,
            fill_ratio: DEFAULT_FILL_RATIO,
        }
    }
}

/// One positioned chart row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartRow {
    pub item_id: String,
    pub title: String,
    pub status: Status,
    pub progress: u8,
    pub bar: BarRect,
    /// Inner completion sub-bar; same origin, width scaled by progress.
    pub fill: BarRect,
}

/// A fully computed chart: range, axis ticks, and positioned rows.
///
/// Recomputed from scratch on every pass; holds no references into the
/// input items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartPlan {
    pub range: DateRange,
    pub columns: Vec<NaiveDate>,
    pub column_width: f64,
    pub rows: Vec<ChartRow>,
}

/// Run the full pipeline: filter, range, columns, per-item bars.
pub fn plan_chart(items: &[TimelineItem], view: &ViewState, config: &ChartConfig) -> ChartPlan {
    plan_chart_at(items, view, config, Utc::now().date_naive())
}

/// [`plan_chart`] with an explicit "today" for the empty-board fallback.
pub fn plan_chart_at(
    items: &[TimelineItem],
    view: &ViewState,
    config: &ChartConfig,
    today: NaiveDate,
) -> ChartPlan {
    let visible: Vec<&TimelineItem> = items
        .iter()
        .filter(|item| view.status_filter.matches(item.status))
        .collect();

    let calculator = RangeCalculator::new().with_padding(config.padding_days);
    let range = match config.filter_scope {
        FilterScope::Range => calculator.compute_at(visible.iter().copied(), today),
        FilterScope::Rows => calculator.compute_at(items, today),
    };
    let columns = generate_columns_with(&range, view.view_mode, config.day_window);

    let layout = BarLayout::new(view.zoom_level())
        .with_mode(config.layout_mode)
        .with_min_bar_width(config.min_bar_width)
        .with_fill_ratio(config.fill_ratio);

    let rows = visible
        .iter()
        .filter_map(|item| {
            let (start, end) = item.date_span()?;
            let bar = layout.position(start, end, &columns);
            Some(ChartRow {
                item_id: item.id.clone(),
                title: item.title.clone(),
                status: item.status,
                progress: item.progress_clamped(),
                bar,
                fill: bar.progress_fill(item.progress_clamped()),
            })
        })
        .collect();

    ChartPlan {
        range,
        columns,
        column_width: layout.column_width(),
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn board() -> Vec<TimelineItem> {
        vec![
            TimelineItem::new("1", "Project Planning", Status::Completed)
                .with_dates(date(2025, 7, 1), date(2025, 7, 10))
                .with_progress(100),
            TimelineItem::new("2", "Database Setup", Status::Pending)
                .with_dates(date(2025, 7, 15), date(2025, 7, 28)),
        ]
    }

    #[test]
    fn weekly_chart_end_to_end() {
        let view = ViewState::new(); // weeks, zoom 1
        let plan = plan_chart_at(&board(), &view, &ChartConfig::default(), date(2025, 1, 1));

        assert_eq!(plan.range.min_date, date(2025, 6, 24));
        assert_eq!(plan.range.max_date, date(2025, 8, 4));
        assert_eq!(plan.columns.len(), 6);
        assert_eq!(plan.column_width, 120.0);

        // item 1 starts exactly on the 07-01 tick (index 1), item 2 on
        // the 07-15 tick (index 3)
        assert_eq!(plan.rows[0].bar.left, 120.0);
        assert_eq!(plan.rows[1].bar.left, 360.0);

        // completed item renders a full fill bar
        assert_eq!(plan.rows[0].fill.width, plan.rows[0].bar.width);
    }

    #[test]
    fn filter_scope_range_shrinks_window() {
        let mut view = ViewState::new();
        view.set_status_filter(StatusFilter::Only(Status::Pending));

        let config = ChartConfig::default(); // FilterScope::Range
        let plan = plan_chart_at(&board(), &view, &config, date(2025, 1, 1));

        assert_eq!(plan.rows.len(), 1);
        assert_eq!(plan.range.min_date, date(2025, 7, 8));
        assert_eq!(plan.range.max_date, date(2025, 8, 4));
    }

    #[test]
    fn filter_scope_rows_keeps_window() {
        let mut view = ViewState::new();
        view.set_status_filter(StatusFilter::Only(Status::Pending));

        let config = ChartConfig {
            filter_scope: FilterScope::Rows,
            ..ChartConfig::default()
        };
        let plan = plan_chart_at(&board(), &view, &config, date(2025, 1, 1));

        assert_eq!(plan.rows.len(), 1);
        // window still spans the completed item
        assert_eq!(plan.range.min_date, date(2025, 6, 24));
    }

    #[test]
    fn unscheduled_items_render_no_row() {
        let mut items = board();
        items.push(TimelineItem::new("3", "Someday", Status::Pending));

        let plan = plan_chart_at(
            &items,
            &ViewState::new(),
            &ChartConfig::default(),
            date(2025, 1, 1),
        );
        assert_eq!(plan.rows.len(), 2);
    }

    #[test]
    fn empty_board_still_plans_a_window() {
        let plan = plan_chart_at(
            &[],
            &ViewState::new(),
            &ChartConfig::default(),
            date(2025, 7, 20),
        );
        assert!(plan.rows.is_empty());
        assert!(!plan.columns.is_empty());
        assert_eq!(plan.range.min_date, date(2025, 7, 20));
    }
}
