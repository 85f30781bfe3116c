//! # Controller Manager
//!
//! Startup gate for the model-inference controller manager.
//!
//! ## Overview
//!
//! The binary loads the controller manager configuration, decides which of
//! the known controllers are enabled by the `controllers` allow-list, and
//! prepares the shared Kubernetes client when at least one of them is.
//!
//! ## Configuration
//!
//! - `CONTROLLER_MANAGER_CONFIG` - optional YAML file
//! - `ENABLE_LEADER_ELECTION`, `WORKERS`, `KUBECONFIG`, `MASTER_URL`
//! - `CONTROLLERS` - comma-separated allow-list, empty enables all
//! - `LOG_LEVEL`, `LOG_FORMAT`, `LOG_ENABLE_COLOR`
//!
//! The resulting startup plan is printed to stdout as JSON.

use anyhow::{Context, Result};
use controller_manager::runtime;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let init = runtime::initialize().await?;

    let enabled: Vec<_> = init.plan.enabled_kinds().map(|kind| kind.as_str()).collect();
    info!(
        enabled = ?enabled,
        client_ready = init.client.is_some(),
        "Controller selection complete"
    );

    let plan = serde_json::to_string_pretty(&init.plan).context("Failed to serialize startup plan")?;
    println!("{plan}");

    Ok(())
}
