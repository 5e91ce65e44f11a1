//! Task and project records placed on the timeline.
//!
//! Items arrive as JSON records from an upstream source (camelCase keys,
//! ISO-8601 date strings). Dates are parsed leniently: a missing or
//! malformed date string becomes `None`, which simply drops the item out
//! of range and column participation -- the chart must always render.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Completion status of a task or project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    Pending,
    /// Some upstream sources call this state "active".
    #[serde(alias = "active")]
    InProgress,
    Completed,
}

impl Status {
    /// All statuses, in display order.
    pub const ALL: [Status; 3] = [Status::Pending, Status::InProgress, Status::Completed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "in-progress" | "active" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            other => Err(format!("unknown status: {other}")),
        }
    }
}

/// Priority of a task, used for badges and sorting only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A task or project record rendered as one timeline row.
///
/// `start_date`/`end_date` may be absent (projects without a schedule);
/// such items are excluded from range/column computation but still count
/// toward status statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineItem {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub assigned_to: Option<String>,
    #[serde(default)]
    pub priority: Option<Priority>,
    pub status: Status,
    #[serde(default, deserialize_with = "lenient_date")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient_date")]
    pub end_date: Option<NaiveDate>,
    /// Completion percentage in 0..=100, drives the inner fill bar.
    #[serde(default)]
    pub progress: u8,
    /// Ids of prerequisite items.
    #[serde(default)]
    pub dependencies: Vec<String>,
    /// Display color, e.g. "#3B82F6".
    #[serde(default)]
    pub color: Option<String>,
}

impl TimelineItem {
    /// Create a minimal item without a schedule.
    pub fn new(id: impl Into<String>, title: impl Into<String>, status: Status) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            assigned_to: None,
            priority: None,
            status,
            start_date: None,
            end_date: None,
            progress: 0,
            dependencies: Vec::new(),
            color: None,
        }
    }

    /// Set the date interval.
    pub fn with_dates(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    /// Set the completion percentage.
    pub fn with_progress(mut self, progress: u8) -> Self {
        self.progress = progress;
        self
    }

    /// Both dates present, so the item participates in layout.
    pub fn is_scheduled(&self) -> bool {
        self.start_date.is_some() && self.end_date.is_some()
    }

    /// The item's date interval, if fully specified.
    pub fn date_span(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((self.start_date?, self.end_date?))
    }

    /// Progress clamped to 0..=100.
    pub fn progress_clamped(&self) -> u8 {
        self.progress.min(100)
    }
}

/// Parse an ISO-8601 calendar date, also accepting a full RFC 3339
/// timestamp (the date part is kept).
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive())
}

fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_date))
}
