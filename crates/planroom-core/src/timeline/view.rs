//! View state: zoom, granularity, status filter, selection.
//!
//! Owned by the presentation host and mutated only through the
//! operations here. Nothing downstream is cached against it -- columns
//! and bars are recomputed from scratch after every change, so there are
//! no invalidation rules to get wrong.

use std::fmt;
use std::str::FromStr;

use crate::entity::Status;

use super::columns::ViewMode;
use super::layout::BASE_COLUMN_WIDTH;

/// Zoom bounds and step, as multiples of the base column width.
pub const MIN_ZOOM: f64 = 0.5;
pub const MAX_ZOOM: f64 = 2.0;
pub const ZOOM_STEP: f64 = 0.25;

/// Which items participate in rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    Only(Status),
}

impl StatusFilter {
    pub fn matches(&self, status: Status) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == status,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(status) => status.as_str(),
        }
    }
}

impl Default for StatusFilter {
    fn default() -> Self {
        Self::All
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(Self::All);
        }
        s.parse::<Status>().map(Self::Only)
    }
}

/// Ephemeral chart controls. No combination of values is illegal; every
/// mutation clamps rather than rejects.
#[derive(Debug, Clone)]
pub struct ViewState {
    zoom_level: f64,
    pub view_mode: ViewMode,
    pub status_filter: StatusFilter,
    selected: Option<String>,
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            zoom_level: 1.0,
            view_mode: ViewMode::Weeks,
            status_filter: StatusFilter::All,
            selected: None,
        }
    }

    pub fn zoom_level(&self) -> f64 {
        self.zoom_level
    }

    /// Set the zoom directly; snaps to the 0.25 grid and clamps.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom_level = clamp_zoom(zoom);
    }

    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom_level + ZOOM_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom_level - ZOOM_STEP);
    }

    pub fn reset_zoom(&mut self) {
        self.zoom_level = 1.0;
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    pub fn set_status_filter(&mut self, filter: StatusFilter) {
        self.status_filter = filter;
    }

    /// Effective column width in pixels under the current zoom.
    pub fn column_width(&self) -> f64 {
        BASE_COLUMN_WIDTH * self.zoom_level
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Toggle selection: selecting the current item clears it, any other
    /// item replaces it.
    pub fn toggle_selected(&mut self, item_id: &str) {
        if self.selected.as_deref() == Some(item_id) {
            self.selected = None;
        } else {
            self.selected = Some(item_id.to_string());
        }
    }

    pub fn clear_selected(&mut self) {
        self.selected = None;
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

/// Snap to the 0.25 grid, then clamp to [0.5, 2.0].
pub fn clamp_zoom(zoom: f64) -> f64 {
    let snapped = (zoom / ZOOM_STEP).round() * ZOOM_STEP;
    snapped.clamp(MIN_ZOOM, MAX_ZOOM)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::TimelineItem;

    #[test]
    fn zoom_in_steps_and_hits_ceiling() {
        let mut view = ViewState::new();
        view.zoom_in();
        assert_eq!(view.zoom_level(), 1.25);
        for _ in 0..10 {
            view.zoom_in();
        }
        assert_eq!(view.zoom_level(), MAX_ZOOM);
    }

    #[test]
    fn zoom_out_steps_and_hits_floor() {
        let mut view = ViewState::new();
        for _ in 0..10 {
            view.zoom_out();
        }
        assert_eq!(view.zoom_level(), MIN_ZOOM);
    }

    #[test]
    fn reset_returns_to_unit_zoom() {
        let mut view = ViewState::new();
        view.zoom_in();
        view.zoom_in();
        view.reset_zoom();
        assert_eq!(view.zoom_level(), 1.0);
    }

    #[test]
    fn set_zoom_snaps_and_clamps() {
        assert_eq!(clamp_zoom(0.1), MIN_ZOOM);
        assert_eq!(clamp_zoom(5.0), MAX_ZOOM);
        assert_eq!(clamp_zoom(1.3), 1.25);
        assert_eq!(clamp_zoom(1.0), 1.0);
    }

    #[test]
    fn column_width_tracks_zoom() {
        let mut view = ViewState::new();
        assert_eq!(view.column_width(), 120.0);
        view.zoom_in();
        assert_eq!(view.column_width(), 150.0);
    }

    #[test]
    fn selection_toggles() {
        let mut view = ViewState::new();
        view.toggle_selected("4");
        assert_eq!(view.selected(), Some("4"));
        view.toggle_selected("7");
        assert_eq!(view.selected(), Some("7"));
        view.toggle_selected("7");
        assert_eq!(view.selected(), None);
    }

    #[test]
    fn filter_parses_all_and_statuses() {
        assert_eq!("all".parse::<StatusFilter>().unwrap(), StatusFilter::All);
        assert_eq!(
            "completed".parse::<StatusFilter>().unwrap(),
            StatusFilter::Only(Status::Completed)
        );
        assert!("bogus".parse::<StatusFilter>().is_err());
    }

    #[test]
    fn filter_is_exclusive() {
        let items = vec![
            TimelineItem::new("1", "a", Status::Completed),
            TimelineItem::new("2", "b", Status::Pending),
            TimelineItem::new("3", "c", Status::Completed),
            TimelineItem::new("4", "d", Status::InProgress),
        ];
        let filter = StatusFilter::Only(Status::Completed);
        let kept: Vec<_> = items.iter().filter(|i| filter.matches(i.status)).collect();
        assert_eq!(kept.len(), 2);
        assert!(kept.iter().all(|i| i.status == Status::Completed));
    }
}
