//! # Logging
//!
//! Tracing subscriber setup. `RUST_LOG` wins over the configured level.

use crate::config::{LogFormat, LoggingConfig};
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber
///
/// Returns `false` when a subscriber was already installed (tests, or an
/// embedding process that set up its own).
pub fn init_tracing(config: &LoggingConfig) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(&config.level)));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let result = match config.format {
        LogFormat::Json => builder.json().with_current_span(false).try_init(),
        LogFormat::Text => builder.with_ansi(config.enable_color).try_init(),
    };
    result.is_ok()
}

/// Filter directive applying `level` to this crate and `warn` elsewhere
fn default_directive(level: &str) -> String {
    let level = level.trim().to_lowercase();
    let level = match level.as_str() {
        "error" | "warn" | "info" | "debug" | "trace" | "off" => level,
        _ => "info".to_string(),
    };
    format!("warn,controller_manager={level}")
}
