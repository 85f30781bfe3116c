//! # Constants
//!
//! Shared constants used throughout the controller manager.
//!
//! These values represent reasonable defaults and can be overridden via
//! the configuration file or environment variables.

/// Default number of workers handed to each controller
pub const DEFAULT_WORKERS: usize = 5;

/// Leader election is on unless explicitly disabled
pub const DEFAULT_ENABLE_LEADER_ELECTION: bool = true;

/// Default global log level
pub const DEFAULT_LOG_LEVEL: &str = "INFO";

/// Default log format (json, text)
pub const DEFAULT_LOG_FORMAT: &str = "json";

/// Environment variable naming an optional YAML configuration file
pub const ENV_CONFIG_FILE: &str = "CONTROLLER_MANAGER_CONFIG";

pub const ENV_ENABLE_LEADER_ELECTION: &str = "ENABLE_LEADER_ELECTION";
pub const ENV_WORKERS: &str = "WORKERS";
pub const ENV_KUBECONFIG: &str = "KUBECONFIG";
pub const ENV_MASTER_URL: &str = "MASTER_URL";

/// Comma-separated controller allow-list
pub const ENV_CONTROLLERS: &str = "CONTROLLERS";

pub const ENV_LOG_LEVEL: &str = "LOG_LEVEL";
pub const ENV_LOG_FORMAT: &str = "LOG_FORMAT";
pub const ENV_LOG_ENABLE_COLOR: &str = "LOG_ENABLE_COLOR";
