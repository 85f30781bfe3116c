//! # Configuration
//!
//! - `controller`: controller manager settings (file + environment)
//! - `logging`: global log settings
//! - `connection`: Kubernetes connection resolution

pub mod connection;
pub mod controller;
pub mod logging;

pub use controller::{parse_controller_list, ControllerConfig};
pub use connection::{parse_master_url, resolve_kube_config};
pub use logging::{LogFormat, LoggingConfig};

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse configuration file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("failed to load kubeconfig: {0}")]
    Kubeconfig(#[from] kube::config::KubeconfigError),
    #[error("failed to infer Kubernetes config: {0}")]
    Infer(#[from] kube::config::InferConfigError),
    #[error("invalid master URL {url:?}: {reason}")]
    InvalidMasterUrl { url: String, reason: String },
}
