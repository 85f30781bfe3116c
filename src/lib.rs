//! Inference Controller Manager Library
//!
//! Decides which model-inference controllers the controller manager starts.
//! The `controllers` allow-list in [`ControllerConfig`] selects them: empty
//! means every controller, otherwise only the listed names.
//!
//! ```
//! use controller_manager::{ControllerConfig, ControllerKind};
//!
//! let config = ControllerConfig::default().with_controllers(["model-booster-controller"]);
//! assert!(config.is_enabled(ControllerKind::ModelBooster.as_str()));
//! assert!(!config.is_enabled(ControllerKind::ModelServing.as_str()));
//! assert!(config.any_enabled());
//! ```

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod observability;
pub mod runtime;
pub mod selector;

pub use bootstrap::{ControllerKind, StartupPlan};
pub use config::{ConfigError, ControllerConfig};
