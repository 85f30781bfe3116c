//! # Kubernetes Connection
//!
//! Resolves a `kube::Config` from the connection fields of
//! [`ControllerConfig`].

use crate::config::{ConfigError, ControllerConfig};
use kube::config::{KubeConfigOptions, Kubeconfig};
use tracing::debug;

/// Build the Kubernetes client configuration
///
/// - no kubeconfig and no master URL: infer (in-cluster, then default kubeconfig)
/// - kubeconfig set: use its current context, with the master URL overriding
///   the cluster server when set
/// - master URL only: talk to that server with no credentials
pub async fn resolve_kube_config(config: &ControllerConfig) -> Result<kube::Config, ConfigError> {
    let kubeconfig = config.kubeconfig.trim();
    let master_url = config.master_url.trim();

    let resolved = match (kubeconfig.is_empty(), master_url.is_empty()) {
        (true, true) => {
            debug!("No kubeconfig or master URL configured, inferring Kubernetes config");
            kube::Config::infer().await?
        }
        (true, false) => kube::Config::new(parse_master_url(master_url)?),
        (false, _) => {
            let file = read_kubeconfig(kubeconfig)?;
            let mut resolved =
                kube::Config::from_custom_kubeconfig(file, &KubeConfigOptions::default()).await?;
            if !master_url.is_empty() {
                resolved.cluster_url = parse_master_url(master_url)?;
            }
            resolved
        }
    };

    debug!(cluster_url = %resolved.cluster_url, "Resolved Kubernetes config");
    Ok(resolved)
}

/// Read one kubeconfig or merge a path list in `KUBECONFIG` style
fn read_kubeconfig(value: &str) -> Result<Kubeconfig, ConfigError> {
    let mut merged: Option<Kubeconfig> = None;
    for path in std::env::split_paths(value).filter(|p| !p.as_os_str().is_empty()) {
        let next = Kubeconfig::read_from(&path)?;
        merged = Some(match merged {
            Some(current) => current.merge(next)?,
            None => next,
        });
    }
    match merged {
        Some(kubeconfig) => Ok(kubeconfig),
        None => Ok(Kubeconfig::read_from(value)?),
    }
}

/// Parse an API server URL; a bare `host:port` is taken as https
pub fn parse_master_url(url: &str) -> Result<http::Uri, ConfigError> {
    let candidate = if url.contains("://") {
        url.to_string()
    } else {
        format!("https://{url}")
    };
    let uri: http::Uri = candidate
        .parse()
        .map_err(|e: http::uri::InvalidUri| ConfigError::InvalidMasterUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
    if uri.host().is_none_or(str::is_empty) {
        return Err(ConfigError::InvalidMasterUrl {
            url: url.to_string(),
            reason: "missing host".to_string(),
        });
    }
    Ok(uri)
}
