//! Bar geometry: mapping date intervals onto chart pixels.
//!
//! Two sizing strategies are supported. Duration-ratio scales the bar by
//! its share of the whole visible span; column-count snaps the bar to the
//! columns it touches and leaves a gutter between rows. Both guarantee a
//! visible, clickable bar: `left >= 0` and `width > 0` for every input,
//! including inverted or out-of-range intervals, which clamp instead of
//! erroring.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unzoomed column width in pixels.
pub const BASE_COLUMN_WIDTH: f64 = 120.0;

/// Floor for bar width, so zero-duration items stay visible.
pub const MIN_BAR_WIDTH: f64 = 60.0;

/// Share of a column a bar occupies in column-count mode; the rest is
/// gutter.
pub const DEFAULT_FILL_RATIO: f64 = 0.8;

/// Bar sizing strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutMode {
    /// Width proportional to the interval's share of the visible span.
    DurationRatio,
    /// Width spans the columns the interval touches, scaled by the fill
    /// ratio and centered in the gutter.
    ColumnCount,
}

impl LayoutMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DurationRatio => "duration-ratio",
            Self::ColumnCount => "column-count",
        }
    }
}

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayoutMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "duration-ratio" => Ok(Self::DurationRatio),
            "column-count" => Ok(Self::ColumnCount),
            other => Err(format!("unknown layout mode: {other}")),
        }
    }
}

impl Default for LayoutMode {
    fn default() -> Self {
        Self::DurationRatio
    }
}

/// Horizontal extent of one rendered bar, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarRect {
    pub left: f64,
    pub width: f64,
}

impl BarRect {
    /// The inner fill sub-bar for a completion percentage. Same origin,
    /// width scaled by `progress/100` (progress clamped to 100).
    pub fn progress_fill(&self, progress: u8) -> BarRect {
        BarRect {
            left: self.left,
            width: self.width * f64::from(progress.min(100)) / 100.0,
        }
    }
}

/// Maps date intervals onto bar rectangles for a given column sequence.
pub struct BarLayout {
    column_width: f64,
    mode: LayoutMode,
    min_bar_width: f64,
    fill_ratio: f64,
}

impl BarLayout {
    /// Duration-ratio layout at the given zoom level.
    pub fn new(zoom_level: f64) -> Self {
        Self {
            column_width: BASE_COLUMN_WIDTH * zoom_level,
            mode: LayoutMode::default(),
            min_bar_width: MIN_BAR_WIDTH,
            fill_ratio: DEFAULT_FILL_RATIO,
        }
    }

    pub fn with_mode(mut self, mode: LayoutMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_min_bar_width(mut self, width: f64) -> Self {
        self.min_bar_width = width;
        self
    }

    pub fn with_fill_ratio(mut self, ratio: f64) -> Self {
        self.fill_ratio = ratio;
        self
    }

    /// Effective column width in pixels (base width x zoom).
    pub fn column_width(&self) -> f64 {
        self.column_width
    }

    /// Compute the bar rectangle for one interval.
    pub fn position(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        columns: &[NaiveDate],
    ) -> BarRect {
        if columns.is_empty() {
            return BarRect {
                left: 0.0,
                width: self.min_bar_width,
            };
        }

        let start_index = last_index_at_or_before(columns, start);

        match self.mode {
            LayoutMode::DurationRatio => {
                let duration_ms = (end - start).num_milliseconds();
                let total_span_ms =
                    (*columns.last().unwrap() - columns[0]).num_milliseconds();

                // Inverted intervals yield a negative ratio; degenerate
                // single-column spans a zero denominator. Both land on
                // the minimum-width floor.
                let width = if total_span_ms > 0 {
                    let ratio = duration_ms as f64 / total_span_ms as f64;
                    (self.column_width * ratio).max(self.min_bar_width)
                } else {
                    self.min_bar_width
                };

                BarRect {
                    left: start_index as f64 * self.column_width,
                    width,
                }
            }
            LayoutMode::ColumnCount => {
                let end_index = last_index_at_or_before(columns, end).max(start_index);
                let span = (end_index - start_index + 1) as f64;
                let gutter = self.column_width * (1.0 - self.fill_ratio) / 2.0;
                BarRect {
                    left: start_index as f64 * self.column_width + gutter,
                    width: span * self.column_width * self.fill_ratio,
                }
            }
        }
    }
}

/// Greatest index whose column is `<= date`, or 0 when the date precedes
/// every column.
fn last_index_at_or_before(columns: &[NaiveDate], date: NaiveDate) -> usize {
    columns
        .iter()
        .rposition(|c| *c <= date)
        .unwrap_or(0)
}
