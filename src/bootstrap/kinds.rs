//! # Controller Kinds
//!
//! Registry of the controllers this manager knows how to start.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const MODEL_SERVING_CONTROLLER: &str = "model-serving-controller";
pub const MODEL_BOOSTER_CONTROLLER: &str = "model-booster-controller";
pub const AUTOSCALER_CONTROLLER: &str = "autoscaler-controller";

/// A controller the bootstrap process can construct
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControllerKind {
    #[serde(rename = "model-serving-controller")]
    ModelServing,
    #[serde(rename = "model-booster-controller")]
    ModelBooster,
    #[serde(rename = "autoscaler-controller")]
    Autoscaler,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown controller kind: {0:?}")]
pub struct UnknownControllerKind(pub String);

impl ControllerKind {
    /// Every known kind, in startup order
    pub const ALL: [ControllerKind; 3] = [
        ControllerKind::ModelServing,
        ControllerKind::ModelBooster,
        ControllerKind::Autoscaler,
    ];

    /// Name used in the controller allow-list
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ControllerKind::ModelServing => MODEL_SERVING_CONTROLLER,
            ControllerKind::ModelBooster => MODEL_BOOSTER_CONTROLLER,
            ControllerKind::Autoscaler => AUTOSCALER_CONTROLLER,
        }
    }
}

impl AsRef<str> for ControllerKind {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ControllerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ControllerKind {
    type Err = UnknownControllerKind;

    /// Exact, case-sensitive match against the allow-list names
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ControllerKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownControllerKind(s.to_string()))
    }
}
