//! # Controller Selector
//!
//! Decides which controllers are enabled by the `controllers` allow-list.
//! An empty allow-list enables every controller; otherwise a controller is
//! enabled only when its name appears in the list verbatim.
//!
//! Both predicates are pure reads over an immutable [`ControllerConfig`]
//! and cannot fail. Names that match no controller simply never match.

use crate::bootstrap::ControllerKind;
use crate::config::ControllerConfig;

impl ControllerConfig {
    /// Whether the controller called `name` should be started
    ///
    /// Matching is exact and case-sensitive.
    #[must_use]
    pub fn is_enabled(&self, name: &str) -> bool {
        self.controllers.is_empty() || self.controllers.iter().any(|ctrl| ctrl == name)
    }

    /// Whether at least one known controller should be started
    #[must_use]
    pub fn any_enabled(&self) -> bool {
        self.controllers.is_empty()
            || ControllerKind::ALL
                .iter()
                .any(|kind| self.is_enabled(kind.as_str()))
    }
}
