//! Configuration for diagnostics and logging.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::diagnostics::{DiagnosticSink, LoggingDiagnosticSink, NoOpDiagnosticSink};
use crate::errors::DoubleError;

/// Output format for the installed subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Human-readable multi-line output.
    Pretty,
    /// Single-line human-readable output.
    #[default]
    Compact,
    /// One JSON object per line.
    Json,
}

/// Configuration for verification diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticsConfig {
    /// Whether diagnostics are emitted at all.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Level diagnostics are logged at.
    #[serde(default = "default_level")]
    pub level: String,
    /// Subscriber output format.
    #[serde(default)]
    pub format: LogFormat,
    /// Filter directive; `RUST_LOG` wins when set.
    #[serde(default)]
    pub filter: Option<String>,
}

fn default_enabled() -> bool {
    true
}

fn default_level() -> String {
    "warn".to_string()
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            level: default_level(),
            format: LogFormat::default(),
            filter: None,
        }
    }
}

impl DiagnosticsConfig {
    /// Creates a configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a configuration from JSON, filling in defaults.
    ///
    /// # Errors
    ///
    /// Returns `Serialization` if the JSON is malformed.
    pub fn from_json(json: &str) -> Result<Self, DoubleError> {
        serde_json::from_str(json).map_err(|e| DoubleError::Serialization(e.to_string()))
    }

    /// Enables or disables diagnostics.
    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Sets the diagnostic level.
    #[must_use]
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    /// Sets the output format.
    #[must_use]
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Sets the filter directive.
    #[must_use]
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Parses the configured level. Unknown names fall back to `WARN`.
    #[must_use]
    pub fn tracing_level(&self) -> Level {
        self.level.parse().unwrap_or(Level::WARN)
    }

    /// Builds the sink described by this configuration.
    #[must_use]
    pub fn sink(&self) -> Arc<dyn DiagnosticSink> {
        if self.enabled {
            Arc::new(LoggingDiagnosticSink::new(self.tracing_level()))
        } else {
            Arc::new(NoOpDiagnosticSink)
        }
    }

    /// Filter directive used when `RUST_LOG` is unset.
    ///
    /// An explicit `filter` wins; otherwise the parsed level is used, so an
    /// unknown level name falls back to `warn` like [`sink`](Self::sink).
    #[must_use]
    pub fn default_directive(&self) -> String {
        self.filter
            .clone()
            .unwrap_or_else(|| self.tracing_level().as_str().to_ascii_lowercase())
    }

    /// Builds the subscriber filter: `RUST_LOG` if set, else
    /// [`default_directive`](Self::default_directive).
    ///
    /// # Errors
    ///
    /// Returns `Logging` if the configured filter directive is invalid.
    pub fn env_filter(&self) -> Result<EnvFilter, DoubleError> {
        match EnvFilter::try_from_default_env() {
            Ok(filter) => Ok(filter),
            Err(_) => EnvFilter::try_new(self.default_directive())
                .map_err(|e| DoubleError::Logging(e.to_string())),
        }
    }

    /// Installs a global `tracing` subscriber.
    ///
    /// # Errors
    ///
    /// Returns `Logging` if the filter is invalid or a subscriber is already
    /// installed.
    pub fn init_tracing(&self) -> Result<(), DoubleError> {
        let filter = self.env_filter()?;
        let builder = tracing_subscriber::fmt().with_env_filter(filter);
        let result = match self.format {
            LogFormat::Pretty => builder.pretty().try_init(),
            LogFormat::Compact => builder.compact().try_init(),
            LogFormat::Json => builder.json().try_init(),
        };
        result.map_err(|e| DoubleError::Logging(e.to_string()))
    }
}
