//! # Configuration Loading Tests
//!
//! File-based configuration and Kubernetes connection resolution.

use controller_manager::config::{resolve_kube_config, ConfigError, ControllerConfig};
use std::io::Write;
use tempfile::NamedTempFile;

const KUBECONFIG: &str = r"
apiVersion: v1
kind: Config
clusters:
  - name: test
    cluster:
      server: https://10.0.0.1:6443
      insecure-skip-tls-verify: true
contexts:
  - name: test
    context:
      cluster: test
      user: test
      namespace: inference
current-context: test
users:
  - name: test
    user:
      token: test-token
";

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_from_file_reads_yaml() {
    let file = write_temp(
        "enableLeaderElection: false\nworkers: 8\ncontrollers:\n  - autoscaler-controller\n",
    );
    let config = ControllerConfig::from_file(file.path()).unwrap();
    assert!(!config.enable_leader_election);
    assert_eq!(config.workers, 8);
    assert_eq!(config.controllers, vec!["autoscaler-controller"]);
    assert!(config.is_enabled("autoscaler-controller"));
    assert!(!config.is_enabled("model-serving-controller"));
}

#[test]
fn test_from_file_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = ControllerConfig::from_file(dir.path().join("absent.yaml")).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
}

#[test]
fn test_from_file_invalid_yaml() {
    let file = write_temp("workers: [not, a, number]\n");
    let err = ControllerConfig::from_file(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("failed to parse configuration file"));
}

#[test]
fn test_environment_overrides_file() {
    let file = write_temp("workers: 8\ncontrollers: [model-serving-controller]\n");
    let base = ControllerConfig::from_file(file.path()).unwrap();
    let config = ControllerConfig::from_lookup(base, |key| {
        (key == "CONTROLLERS").then(|| "model-booster-controller".to_string())
    });
    assert_eq!(config.workers, 8);
    assert_eq!(config.controllers, vec!["model-booster-controller"]);
}

#[tokio::test]
async fn test_resolve_from_kubeconfig_file() {
    let file = write_temp(KUBECONFIG);
    let mut config = ControllerConfig::default();
    config.kubeconfig = file.path().display().to_string();

    let resolved = resolve_kube_config(&config).await.unwrap();
    assert_eq!(resolved.cluster_url.host(), Some("10.0.0.1"));
    assert_eq!(resolved.cluster_url.port_u16(), Some(6443));
    assert_eq!(resolved.default_namespace, "inference");
}

#[tokio::test]
async fn test_master_url_overrides_kubeconfig_server() {
    let file = write_temp(KUBECONFIG);
    let mut config = ControllerConfig::default();
    config.kubeconfig = file.path().display().to_string();
    config.master_url = "https://api.example.com:8443".to_string();

    let resolved = resolve_kube_config(&config).await.unwrap();
    assert_eq!(resolved.cluster_url.host(), Some("api.example.com"));
    assert_eq!(resolved.cluster_url.port_u16(), Some(8443));
    assert_eq!(resolved.default_namespace, "inference");
}

#[tokio::test]
async fn test_master_url_only() {
    let mut config = ControllerConfig::default();
    config.master_url = "127.0.0.1:6443".to_string();

    let resolved = resolve_kube_config(&config).await.unwrap();
    assert_eq!(resolved.cluster_url.scheme_str(), Some("https"));
    assert_eq!(resolved.cluster_url.host(), Some("127.0.0.1"));
}

#[tokio::test]
async fn test_invalid_master_url_is_rejected() {
    let mut config = ControllerConfig::default();
    config.master_url = "https://bad host".to_string();

    let err = resolve_kube_config(&config).await.unwrap_err();
    assert!(matches!(err, ConfigError::InvalidMasterUrl { .. }));
}

#[tokio::test]
async fn test_missing_kubeconfig_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = ControllerConfig::default();
    config.kubeconfig = dir.path().join("missing").display().to_string();

    let err = resolve_kube_config(&config).await.unwrap_err();
    assert!(matches!(err, ConfigError::Kubeconfig(_)));
}
