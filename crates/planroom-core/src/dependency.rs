//! Dependency links between timeline items.
//!
//! Links are directional: `from_task` must finish (or start) before
//! `to_task`, per the link kind. The chart itself does not reschedule
//! anything based on links; they feed the detail panel and reports.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of dependency between two items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DependencyKind {
    FinishToStart,
    StartToStart,
    FinishToFinish,
    StartToFinish,
}

impl DependencyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FinishToStart => "finish-to-start",
            Self::StartToStart => "start-to-start",
            Self::FinishToFinish => "finish-to-finish",
            Self::StartToFinish => "start-to-finish",
        }
    }
}

impl fmt::Display for DependencyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DependencyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "finish-to-start" => Ok(Self::FinishToStart),
            "start-to-start" => Ok(Self::StartToStart),
            "finish-to-finish" => Ok(Self::FinishToFinish),
            "start-to-finish" => Ok(Self::StartToFinish),
            other => Err(format!("unknown dependency kind: {other}")),
        }
    }
}

impl Default for DependencyKind {
    fn default() -> Self {
        Self::FinishToStart
    }
}

/// A directional link between two items.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dependency {
    pub id: String,
    pub from_task: String,
    pub to_task: String,
    #[serde(rename = "type", default)]
    pub kind: DependencyKind,
}

impl Dependency {
    pub fn new(
        id: impl Into<String>,
        from_task: impl Into<String>,
        to_task: impl Into<String>,
        kind: DependencyKind,
    ) -> Self {
        Self {
            id: id.into(),
            from_task: from_task.into(),
            to_task: to_task.into(),
            kind,
        }
    }

    /// True if either endpoint is the given item.
    pub fn touches(&self, item_id: &str) -> bool {
        self.from_task == item_id || self.to_task == item_id
    }
}

/// Links whose target is the given item (its prerequisites).
pub fn prerequisites_of<'a>(deps: &'a [Dependency], item_id: &str) -> Vec<&'a Dependency> {
    deps.iter().filter(|d| d.to_task == item_id).collect()
}

/// Links whose source is the given item (items depending on it).
pub fn dependents_of<'a>(deps: &'a [Dependency], item_id: &str) -> Vec<&'a Dependency> {
    deps.iter().filter(|d| d.from_task == item_id).collect()
}
