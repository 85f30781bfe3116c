//! # Controller Manager Configuration
//!
//! Process-level settings for the controller manager, loaded from an optional
//! YAML file and overridden by environment variables.

use crate::config::ConfigError;
use crate::constants::{
    DEFAULT_ENABLE_LEADER_ELECTION, DEFAULT_WORKERS, ENV_CONFIG_FILE, ENV_CONTROLLERS,
    ENV_ENABLE_LEADER_ELECTION, ENV_KUBECONFIG, ENV_MASTER_URL, ENV_WORKERS,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

/// Controller manager configuration
///
/// Built once at startup and never mutated afterwards. The `controllers`
/// allow-list is kept exactly as supplied: order, duplicates and unknown
/// names are all preserved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ControllerConfig {
    /// Whether the bootstrap process should run leader election
    pub enable_leader_election: bool,
    /// Worker concurrency handed to each controller
    pub workers: usize,
    /// Path to a kubeconfig file (empty = infer)
    pub kubeconfig: String,
    /// Kubernetes API server URL override (empty = from kubeconfig)
    pub master_url: String,
    /// Controllers to start; empty means all of them
    pub controllers: Vec<String>,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            enable_leader_election: DEFAULT_ENABLE_LEADER_ELECTION,
            workers: DEFAULT_WORKERS,
            kubeconfig: String::new(),
            master_url: String::new(),
            controllers: Vec::new(),
        }
    }
}

impl ControllerConfig {
    /// Load the configuration for this process
    ///
    /// Reads the YAML file named by `CONTROLLER_MANAGER_CONFIG` when set, then
    /// applies environment variable overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let base = match std::env::var(ENV_CONFIG_FILE) {
            Ok(path) if !path.trim().is_empty() => Self::from_file(path.trim())?,
            _ => Self::default(),
        };
        Ok(Self::from_lookup(base, |key| std::env::var(key).ok()))
    }

    /// Parse a YAML document; absent keys take their defaults
    pub fn from_yaml_str(yaml: &str) -> Result<Self, serde_yaml::Error> {
        // An empty document deserializes as unit, not as a mapping
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml)
    }

    /// Read and parse a YAML configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "Loaded controller manager configuration file");
        Ok(config)
    }

    /// Apply overrides from `lookup` on top of `base`
    ///
    /// `lookup` maps a variable name to its value; [`ControllerConfig::load`]
    /// passes the process environment.
    pub fn from_lookup<F>(base: Self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            enable_leader_election: var_or_default_bool(
                &lookup,
                ENV_ENABLE_LEADER_ELECTION,
                base.enable_leader_election,
            ),
            workers: var_or_default(&lookup, ENV_WORKERS, base.workers),
            kubeconfig: lookup(ENV_KUBECONFIG).unwrap_or(base.kubeconfig),
            master_url: lookup(ENV_MASTER_URL).unwrap_or(base.master_url),
            controllers: lookup(ENV_CONTROLLERS)
                .map_or(base.controllers, |value| parse_controller_list(&value)),
        }
    }

    #[must_use]
    pub fn with_controllers<I, S>(mut self, controllers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.controllers = controllers.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    #[must_use]
    pub fn with_leader_election(mut self, enabled: bool) -> Self {
        self.enable_leader_election = enabled;
        self
    }
}

/// Split a comma-separated allow-list
///
/// Surrounding whitespace is trimmed and empty entries dropped. Case, order
/// and duplicates are left untouched.
#[must_use]
pub fn parse_controller_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Read a variable and parse it, keeping `default` when absent or invalid
fn var_or_default<T, F>(lookup: &F, key: &str, default: T) -> T
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!(key, value = %raw, "Ignoring unparseable configuration value");
            default
        }),
        None => default,
    }
}

/// Read a variable as boolean, keeping `default` when absent or invalid
fn var_or_default_bool<F>(lookup: &F, key: &str, default: bool) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return default;
    };
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => true,
        "false" | "0" | "no" | "off" => false,
        _ => {
            warn!(key, value = %raw, "Ignoring unparseable boolean configuration value");
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = ControllerConfig::default();
        assert!(config.enable_leader_election);
        assert_eq!(config.workers, DEFAULT_WORKERS);
        assert!(config.kubeconfig.is_empty());
        assert!(config.master_url.is_empty());
        assert!(config.controllers.is_empty());
    }

    #[test]
    fn test_from_lookup_without_variables_keeps_base() {
        let base = ControllerConfig::default()
            .with_workers(9)
            .with_controllers(["autoscaler-controller"]);
        let config = ControllerConfig::from_lookup(base.clone(), lookup_from(&[]));
        assert_eq!(config, base);
    }

    #[test]
    fn test_from_lookup_overrides_every_field() {
        let config = ControllerConfig::from_lookup(
            ControllerConfig::default(),
            lookup_from(&[
                ("ENABLE_LEADER_ELECTION", "false"),
                ("WORKERS", "12"),
                ("KUBECONFIG", "/etc/kube/config"),
                ("MASTER_URL", "https://10.0.0.1:6443"),
                ("CONTROLLERS", "model-serving-controller, autoscaler-controller"),
            ]),
        );
        assert!(!config.enable_leader_election);
        assert_eq!(config.workers, 12);
        assert_eq!(config.kubeconfig, "/etc/kube/config");
        assert_eq!(config.master_url, "https://10.0.0.1:6443");
        assert_eq!(
            config.controllers,
            vec!["model-serving-controller", "autoscaler-controller"]
        );
    }

    #[test]
    fn test_invalid_values_keep_base() {
        let base = ControllerConfig::default().with_workers(3);
        let config = ControllerConfig::from_lookup(
            base,
            lookup_from(&[("WORKERS", "many"), ("ENABLE_LEADER_ELECTION", "maybe")]),
        );
        assert_eq!(config.workers, 3);
        assert!(config.enable_leader_election);
    }

    #[test]
    fn test_bool_parsing_accepts_common_spellings() {
        for value in ["true", "TRUE", "1", "yes", "On"] {
            let config = ControllerConfig::from_lookup(
                ControllerConfig::default().with_leader_election(false),
                lookup_from(&[("ENABLE_LEADER_ELECTION", value)]),
            );
            assert!(config.enable_leader_election, "{value} should enable");
        }
        for value in ["false", "0", "no", "OFF"] {
            let config = ControllerConfig::from_lookup(
                ControllerConfig::default(),
                lookup_from(&[("ENABLE_LEADER_ELECTION", value)]),
            );
            assert!(!config.enable_leader_election, "{value} should disable");
        }
    }

    #[test]
    fn test_empty_controllers_variable_clears_allow_list() {
        let base = ControllerConfig::default().with_controllers(["autoscaler-controller"]);
        let config = ControllerConfig::from_lookup(base, lookup_from(&[("CONTROLLERS", "")]));
        assert!(config.controllers.is_empty());
    }

    #[test]
    fn test_parse_controller_list_keeps_order_case_and_duplicates() {
        assert_eq!(
            parse_controller_list(" b ,A,,b, "),
            vec!["b".to_string(), "A".to_string(), "b".to_string()]
        );
        assert!(parse_controller_list("").is_empty());
        assert!(parse_controller_list(" , ,").is_empty());
    }

    #[test]
    fn test_from_yaml_str_full_document() {
        let yaml = r"
enableLeaderElection: false
workers: 2
kubeconfig: /home/me/.kube/config
masterUrl: https://api.example.com
controllers:
  - model-booster-controller
  - model-booster-controller
";
        let config = ControllerConfig::from_yaml_str(yaml).unwrap();
        assert!(!config.enable_leader_election);
        assert_eq!(config.workers, 2);
        assert_eq!(config.kubeconfig, "/home/me/.kube/config");
        assert_eq!(config.master_url, "https://api.example.com");
        assert_eq!(
            config.controllers,
            vec!["model-booster-controller", "model-booster-controller"]
        );
    }

    #[test]
    fn test_from_yaml_str_partial_and_empty_documents() {
        let config = ControllerConfig::from_yaml_str("workers: 1\n").unwrap();
        assert_eq!(config, ControllerConfig::default().with_workers(1));

        assert_eq!(
            ControllerConfig::from_yaml_str("").unwrap(),
            ControllerConfig::default()
        );
    }

    #[test]
    fn test_from_yaml_str_rejects_unknown_keys() {
        assert!(ControllerConfig::from_yaml_str("controler: [x]\n").is_err());
    }
}
