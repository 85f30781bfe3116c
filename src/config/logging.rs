//! # Logging Configuration

use crate::constants::{
    DEFAULT_LOG_FORMAT, DEFAULT_LOG_LEVEL, ENV_LOG_ENABLE_COLOR, ENV_LOG_FORMAT, ENV_LOG_LEVEL,
};

/// Output format for log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Text,
}

impl LogFormat {
    /// Anything other than `text` falls back to JSON
    fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("text") {
            LogFormat::Text
        } else {
            LogFormat::Json
        }
    }
}

/// Global logging settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Global log level (ERROR, WARN, INFO, DEBUG, TRACE)
    pub level: String,
    pub format: LogFormat,
    /// Enable color in text format logs
    pub enable_color: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            format: LogFormat::parse(DEFAULT_LOG_FORMAT),
            enable_color: false,
        }
    }
}

impl LoggingConfig {
    /// Load logging settings from environment variables with defaults
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            level: lookup(ENV_LOG_LEVEL).unwrap_or(defaults.level),
            format: lookup(ENV_LOG_FORMAT).map_or(defaults.format, |v| LogFormat::parse(&v)),
            enable_color: lookup(ENV_LOG_ENABLE_COLOR).map_or(defaults.enable_color, |v| {
                matches!(v.trim().to_lowercase().as_str(), "true" | "1" | "yes" | "on")
            }),
        }
    }
}
