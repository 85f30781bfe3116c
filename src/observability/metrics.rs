//! # Metrics
//!
//! Prometheus metrics describing the startup decisions.
//!
//! ## Metrics Exposed
//!
//! - `controller_manager_controller_enabled` - 1 when the labelled controller is enabled, 0 otherwise
//! - `controller_manager_unrecognized_controllers` - Allow-list entries matching no known controller

use crate::bootstrap::StartupPlan;
use anyhow::Result;
use prometheus::{Encoder, IntGauge, IntGaugeVec, Opts, Registry, TextEncoder};
use std::sync::LazyLock;

pub(crate) static REGISTRY: LazyLock<Registry> = LazyLock::new(Registry::new);

static CONTROLLER_ENABLED: LazyLock<IntGaugeVec> = LazyLock::new(|| {
    IntGaugeVec::new(
        Opts::new(
            "controller_manager_controller_enabled",
            "Whether a controller is enabled by the allow-list (1) or not (0)",
        ),
        &["controller"],
    )
    .expect("Failed to create CONTROLLER_ENABLED metric - this should never happen")
});

static UNRECOGNIZED_CONTROLLERS: LazyLock<IntGauge> = LazyLock::new(|| {
    IntGauge::new(
        "controller_manager_unrecognized_controllers",
        "Number of allow-list entries that match no known controller",
    )
    .expect("Failed to create UNRECOGNIZED_CONTROLLERS metric - this should never happen")
});

/// Register all metrics with the registry
///
/// Safe to call more than once; later calls are no-ops.
pub fn register_metrics() -> Result<()> {
    static REGISTERED: LazyLock<Result<(), String>> = LazyLock::new(|| {
        REGISTRY
            .register(Box::new(CONTROLLER_ENABLED.clone()))
            .and_then(|()| REGISTRY.register(Box::new(UNRECOGNIZED_CONTROLLERS.clone())))
            .map_err(|e| e.to_string())
    });
    REGISTERED
        .as_ref()
        .map_err(|e| anyhow::anyhow!("Failed to register metrics: {e}"))?;
    Ok(())
}

/// Publish the decisions of a startup plan
pub fn record_startup_plan(plan: &StartupPlan) {
    for decision in &plan.decisions {
        CONTROLLER_ENABLED
            .with_label_values(&[decision.kind.as_str()])
            .set(i64::from(decision.enabled));
    }
    UNRECOGNIZED_CONTROLLERS.set(i64::try_from(plan.unrecognized.len()).unwrap_or(i64::MAX));
}

/// Render the registry in the Prometheus text format
pub fn gather_text() -> Result<String> {
    let mut buffer = Vec::new();
    TextEncoder::new().encode(&REGISTRY.gather(), &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}
