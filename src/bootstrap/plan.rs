//! # Startup Plan
//!
//! Applies the controller selector to every known controller kind and
//! records which ones the bootstrap process should construct.

use crate::bootstrap::ControllerKind;
use crate::config::ControllerConfig;
use serde::Serialize;
use tracing::{info, warn};

/// Decision for a single controller kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ControllerDecision {
    pub kind: ControllerKind,
    pub enabled: bool,
}

/// Outcome of applying the allow-list to every known controller
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StartupPlan {
    /// One entry per [`ControllerKind::ALL`], in the same order
    pub decisions: Vec<ControllerDecision>,
    /// Whether shared infrastructure (client, informers) is needed at all
    pub shared_infrastructure: bool,
    /// Allow-list entries naming no known controller, first-seen order
    pub unrecognized: Vec<String>,
}

impl StartupPlan {
    #[must_use]
    pub fn build(config: &ControllerConfig) -> Self {
        let decisions = ControllerKind::ALL
            .into_iter()
            .map(|kind| ControllerDecision {
                kind,
                enabled: config.is_enabled(kind.as_str()),
            })
            .collect();

        let mut unrecognized: Vec<String> = Vec::new();
        for name in &config.controllers {
            if name.parse::<ControllerKind>().is_err() && !unrecognized.contains(name) {
                unrecognized.push(name.clone());
            }
        }

        Self {
            decisions,
            shared_infrastructure: config.any_enabled(),
            unrecognized,
        }
    }

    /// Kinds to construct, in startup order
    pub fn enabled_kinds(&self) -> impl Iterator<Item = ControllerKind> + '_ {
        self.decisions
            .iter()
            .filter(|decision| decision.enabled)
            .map(|decision| decision.kind)
    }

    #[must_use]
    pub fn is_enabled(&self, kind: ControllerKind) -> bool {
        self.decisions
            .iter()
            .any(|decision| decision.kind == kind && decision.enabled)
    }

    /// Log every decision and any allow-list entry that matches nothing
    pub fn log(&self) {
        for decision in &self.decisions {
            if decision.enabled {
                info!(controller = %decision.kind, "Controller enabled");
            } else {
                info!(controller = %decision.kind, "Controller disabled by allow-list");
            }
        }
        for name in &self.unrecognized {
            warn!(controller = %name, "Allow-list entry matches no known controller");
        }
        if !self.shared_infrastructure {
            warn!("No known controller is enabled, nothing will be started");
        }
    }
}
