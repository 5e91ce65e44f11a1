//! TOML-based application configuration.
//!
//! Holds the chart layout knobs the original UI hardcoded per surface:
//! padding, column width, bar width floor, fill ratio, layout mode,
//! filter placement, and the default view controls.
//!
//! Configuration is stored at `~/.config/planroom/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::data_dir;
use crate::error::ConfigError;
use crate::timeline::{
    clamp_zoom, ChartConfig, DayWindow, FilterScope, LayoutMode, ViewMode, ViewState,
};

/// Chart layout configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineConfig {
    /// Days of padding on each side of the computed range.
    #[serde(default = "default_padding_days")]
    pub padding_days: i64,
    /// Unzoomed column width in pixels.
    #[serde(default = "default_base_column_width")]
    pub base_column_width: f64,
    /// Bar width floor in pixels.
    #[serde(default = "default_min_bar_width")]
    pub min_bar_width: f64,
    /// Bar share of a column in column-count mode.
    #[serde(default = "default_fill_ratio")]
    pub fill_ratio: f64,
    #[serde(default)]
    pub layout_mode: LayoutMode,
    #[serde(default)]
    pub filter_scope: FilterScope,
    /// Fixed number of day columns; absent means span-derived.
    #[serde(default)]
    pub fixed_day_columns: Option<u32>,
    /// Granularity the chart opens with.
    #[serde(default = "default_view_mode")]
    pub default_view_mode: ViewMode,
    /// Zoom the chart opens with (the original UI opens dense, at 50%).
    #[serde(default = "default_zoom")]
    pub default_zoom: f64,
}

fn default_padding_days() -> i64 {
    7
}
fn default_base_column_width() -> f64 {
    120.0
}
fn default_min_bar_width() -> f64 {
    60.0
}
fn default_fill_ratio() -> f64 {
    0.8
}
fn default_view_mode() -> ViewMode {
    ViewMode::Weeks
}
fn default_zoom() -> f64 {
    0.5
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            padding_days: default_padding_days(),
            base_column_width: default_base_column_width(),
            min_bar_width: default_min_bar_width(),
            fill_ratio: default_fill_ratio(),
            layout_mode: LayoutMode::default(),
            filter_scope: FilterScope::default(),
            fixed_day_columns: None,
            default_view_mode: default_view_mode(),
            default_zoom: default_zoom(),
        }
    }
}

impl TimelineConfig {
    /// Layout knobs for one chart pass.
    pub fn chart_config(&self) -> ChartConfig {
        ChartConfig {
            padding_days: self.padding_days,
            layout_mode: self.layout_mode,
            day_window: match self.fixed_day_columns {
                Some(count) => DayWindow::Fixed(count),
                None => DayWindow::SpanDerived,
            },
            filter_scope: self.filter_scope,
            min_bar_width: self.min_bar_width,
            fill_ratio: self.fill_ratio,
        }
    }

    /// Initial view state from the configured defaults.
    pub fn initial_view(&self) -> ViewState {
        let mut view = ViewState::new();
        view.set_view_mode(self.default_view_mode);
        view.set_zoom(clamp_zoom(self.default_zoom));
        view
    }
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/planroom/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub timeline: TimelineConfig,
}

impl Config {
    fn path() -> Result<PathBuf, ConfigError> {
        let dir = data_dir().map_err(|e| ConfigError::LoadFailed {
            path: PathBuf::from("~/.config/planroom"),
            message: e.to_string(),
        })?;
        Ok(dir.join("config.toml"))
    }

    /// Load from disk or write and return the default.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                path,
                message: e.to_string(),
            }),
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    /// Returns an error if the config cannot be serialized or written.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path()?;
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&path, content).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let mut current = &json;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        match current {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by dot-separated key.
    ///
    /// # Errors
    /// Returns an error if the key is unknown or the value cannot be
    /// parsed as the existing value's type.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut json =
            serde_json::to_value(&*self).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;

        set_json_value_by_path(&mut json, key, value)?;

        *self = serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        Ok(())
    }
}

fn set_json_value_by_path(
    root: &mut serde_json::Value,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    let unknown = || ConfigError::UnknownKey(key.to_string());
    let invalid = |message: String| ConfigError::InvalidValue {
        key: key.to_string(),
        message,
    };

    let mut parts = key.split('.').peekable();
    if parts.peek().is_none() {
        return Err(unknown());
    }

    let mut current = root;
    while let Some(part) = parts.next() {
        let is_leaf = parts.peek().is_none();
        if is_leaf {
            let obj = current.as_object_mut().ok_or_else(unknown)?;
            let existing = obj.get(part).ok_or_else(unknown)?;

            let new_value = match existing {
                serde_json::Value::Bool(_) => serde_json::Value::Bool(
                    value.parse::<bool>().map_err(|e| invalid(e.to_string()))?,
                ),
                serde_json::Value::Number(_) => {
                    if let Ok(n) = value.parse::<i64>() {
                        serde_json::Value::Number(n.into())
                    } else if let Ok(n) = value.parse::<f64>() {
                        serde_json::Number::from_f64(n)
                            .map(serde_json::Value::Number)
                            .ok_or_else(|| invalid(format!("cannot parse '{value}' as number")))?
                    } else {
                        return Err(invalid(format!("cannot parse '{value}' as number")));
                    }
                }
                // optional fields serialize as null; accept "none" to
                // clear them and numbers to set them
                serde_json::Value::Null => {
                    if value == "none" {
                        serde_json::Value::Null
                    } else if let Ok(n) = value.parse::<i64>() {
                        serde_json::Value::Number(n.into())
                    } else {
                        serde_json::Value::String(value.into())
                    }
                }
                _ => serde_json::Value::String(value.into()),
            };

            obj.insert(part.to_string(), new_value);
            return Ok(());
        }

        current = current.get_mut(part).ok_or_else(unknown)?;
    }

    Err(unknown())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_observed_constants() {
        let config = TimelineConfig::default();
        assert_eq!(config.padding_days, 7);
        assert_eq!(config.base_column_width, 120.0);
        assert_eq!(config.min_bar_width, 60.0);
        assert_eq!(config.fill_ratio, 0.8);
        assert_eq!(config.layout_mode, LayoutMode::DurationRatio);
        assert_eq!(config.filter_scope, FilterScope::Range);
        assert_eq!(config.fixed_day_columns, None);
        assert_eq!(config.default_view_mode, ViewMode::Weeks);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [timeline]
            padding_days = 3
            layout_mode = "column-count"
            "#,
        )
        .unwrap();
        assert_eq!(config.timeline.padding_days, 3);
        assert_eq!(config.timeline.layout_mode, LayoutMode::ColumnCount);
        assert_eq!(config.timeline.min_bar_width, 60.0);
    }

    #[test]
    fn toml_round_trip() {
        let config = Config::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let decoded: Config = toml::from_str(&text).unwrap();
        assert_eq!(decoded.timeline.fill_ratio, config.timeline.fill_ratio);
    }

    #[test]
    fn chart_config_maps_day_window() {
        let mut config = TimelineConfig::default();
        assert_eq!(config.chart_config().day_window, DayWindow::SpanDerived);
        config.fixed_day_columns = Some(10);
        assert_eq!(config.chart_config().day_window, DayWindow::Fixed(10));
    }

    #[test]
    fn initial_view_clamps_configured_zoom() {
        let config = TimelineConfig {
            default_zoom: 9.0,
            ..TimelineConfig::default()
        };
        assert_eq!(config.initial_view().zoom_level(), 2.0);

        let view = TimelineConfig::default().initial_view();
        assert_eq!(view.zoom_level(), 0.5);
        assert_eq!(view.view_mode, ViewMode::Weeks);
    }

    #[test]
    fn get_and_set_by_dot_path() {
        let mut config = Config::default();
        assert_eq!(config.get("timeline.padding_days").unwrap(), "7");

        config.set("timeline.padding_days", "3").unwrap();
        assert_eq!(config.timeline.padding_days, 3);

        config.set("timeline.layout_mode", "column-count").unwrap();
        assert_eq!(config.timeline.layout_mode, LayoutMode::ColumnCount);

        assert!(matches!(
            config.set("timeline.nope", "1"),
            Err(ConfigError::UnknownKey(_))
        ));
        assert!(config.set("timeline.layout_mode", "sideways").is_err());
    }
}
