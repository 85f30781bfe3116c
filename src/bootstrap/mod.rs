//! # Bootstrap
//!
//! The controller registry and the startup plan derived from configuration.
//!
//! - `kinds`: the fixed set of controllers this manager can start
//! - `plan`: per-controller enablement decisions for one process start

pub mod kinds;
pub mod plan;

pub use kinds::{ControllerKind, UnknownControllerKind};
pub use plan::{ControllerDecision, StartupPlan};
