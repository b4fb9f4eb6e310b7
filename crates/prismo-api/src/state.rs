//! # Application State & Configuration
//!
//! Shared state for the Axum application: the effective constraint table
//! wrapped in a [`ContentValidator`], and the process configuration read
//! from the environment.

use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

use prismo_core::ConstraintTable;
use prismo_schema::{resolve_constraint_table, ConstraintLoadError, ContentValidator};

/// Error reading configuration from the environment.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// `PRISMO_PORT` is not a valid port number.
    #[error("PRISMO_PORT must be a port number, got {0:?}")]
    InvalidPort(String),

    /// The constraint override file could not be applied.
    #[error(transparent)]
    Constraints(#[from] ConstraintLoadError),
}

/// Process configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Port to listen on.
    pub port: u16,
    /// Optional constraint override file (YAML or JSON).
    pub constraints_file: Option<PathBuf>,
    /// Whether `/metrics` and the request metrics middleware are mounted.
    pub metrics_enabled: bool,
    /// Emit logs as JSON lines instead of human-readable text.
    pub log_json: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            constraints_file: None,
            metrics_enabled: true,
            log_json: false,
        }
    }
}

impl AppConfig {
    /// Read configuration from `PRISMO_*` environment variables.
    ///
    /// - `PRISMO_PORT`: listen port (default 8080).
    /// - `PRISMO_CONSTRAINTS_FILE`: constraint override file.
    /// - `PRISMO_METRICS_ENABLED`: anything other than `false` enables metrics.
    /// - `PRISMO_LOG_FORMAT`: `json` for structured logs.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidPort`] for an unparseable port.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = match lookup("PRISMO_PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => defaults.port,
        };

        let constraints_file = lookup("PRISMO_CONSTRAINTS_FILE")
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        let metrics_enabled = lookup("PRISMO_METRICS_ENABLED")
            .map(|v| v.to_lowercase() != "false")
            .unwrap_or(defaults.metrics_enabled);

        let log_json = lookup("PRISMO_LOG_FORMAT")
            .map(|v| v.eq_ignore_ascii_case("json"))
            .unwrap_or(defaults.log_json);

        Ok(Self {
            port,
            constraints_file,
            metrics_enabled,
            log_json,
        })
    }
}

/// Shared application state passed to all route handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub validator: Arc<ContentValidator>,
}

impl AppState {
    /// State with default configuration and the built-in constraint table.
    pub fn new() -> Self {
        Self::with_table(AppConfig::default(), ConstraintTable::standard())
    }

    /// State with an explicit configuration and constraint table.
    pub fn with_table(config: AppConfig, table: ConstraintTable) -> Self {
        Self {
            config: Arc::new(config),
            validator: Arc::new(ContentValidator::new(table)),
        }
    }

    /// Build state from configuration, loading constraint overrides if set.
    ///
    /// # Errors
    ///
    /// Fails if the override file cannot be read or yields an invalid table.
    pub fn from_config(config: AppConfig) -> Result<Self, ConfigError> {
        let table = resolve_constraint_table(config.constraints_file.as_deref())?;
        Ok(Self::with_table(config, table))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
