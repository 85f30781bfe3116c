//! # Runtime
//!
//! Process startup for the controller manager binary.

pub mod initialization;

pub use initialization::{create_client, initialize, InitializationResult};
