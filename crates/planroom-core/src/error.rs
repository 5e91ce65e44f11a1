//! Core error types for planroom-core.
//!
//! This module defines the error hierarchy using thiserror. The layout
//! engine itself never fails -- every input is clamped or defaulted -- so
//! errors here come from the board store, configuration, and file I/O.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for planroom-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Board store errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Board store errors.
#[derive(Error, Debug)]
pub enum StoreError {
    /// No item with the given id
    #[error("No task with id '{0}'")]
    TaskNotFound(String),

    /// No dependency with the given id
    #[error("No dependency with id '{0}'")]
    DependencyNotFound(String),

    /// An item with this id already exists
    #[error("A task with id '{0}' already exists")]
    DuplicateTask(String),

    /// A dependency with this id already exists
    #[error("A dependency with id '{0}' already exists")]
    DuplicateDependency(String),

    /// Dependency endpoint does not exist on the board
    #[error("Dependency references unknown task '{0}'")]
    UnknownEndpoint(String),

    /// A task cannot depend on itself
    #[error("Task '{0}' cannot depend on itself")]
    SelfDependency(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
