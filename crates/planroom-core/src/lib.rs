//! # Planroom Core Library
//!
//! Core business logic for Planroom, a project-management timeline tool.
//! It implements a CLI-first philosophy where all operations are available
//! via a standalone CLI binary, with any GUI being a thin layer over the
//! same core library.
//!
//! ## Architecture
//!
//! - **Timeline**: the layout engine -- pure functions turning dated
//!   items plus view state into positioned, zoomable bar geometry
//! - **Board**: in-memory item/dependency state with reducer-style CRUD
//! - **Storage**: JSON board snapshots and TOML-based configuration
//! - **Roles/Presence**: capability lookup and a presence event fold for
//!   the surrounding UI chrome
//!
//! ## Key Components
//!
//! - [`plan_chart`]: one-call pipeline from items to chart geometry
//! - [`ViewState`]: zoom/granularity/filter/selection state machine
//! - [`Board`]: the item and dependency store
//! - [`Config`]: application configuration management

pub mod dependency;
pub mod entity;
pub mod error;
pub mod presence;
pub mod role;
pub mod stats;
pub mod storage;
pub mod store;
pub mod timeline;

pub use dependency::{Dependency, DependencyKind};
pub use entity::{Priority, Status, TimelineItem};
pub use error::{ConfigError, CoreError, Result, StoreError};
pub use presence::{PresenceAction, PresenceEvent, PresenceRoster};
pub use role::{Capability, Role};
pub use stats::{summarize, StatusSummary};
pub use storage::{Config, TimelineConfig};
pub use store::Board;
pub use timeline::{
    plan_chart, plan_chart_at, BarLayout, BarRect, ChartConfig, ChartPlan, ChartRow, DateRange,
    DayWindow, FilterScope, LayoutMode, RangeCalculator, StatusFilter, ViewMode, ViewState,
};
