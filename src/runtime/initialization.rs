//! # Initialization
//!
//! Process startup: rustls setup, tracing, metrics, configuration loading,
//! the startup plan, and the shared Kubernetes client when any controller
//! is enabled.

use crate::bootstrap::StartupPlan;
use crate::config::{resolve_kube_config, ControllerConfig, LoggingConfig};
use crate::observability;
use anyhow::{Context, Result};
use kube::Client;
use tracing::{info, warn};

/// Everything the bootstrap process needs to construct controllers
pub struct InitializationResult {
    pub config: ControllerConfig,
    pub plan: StartupPlan,
    /// Present only when at least one controller is enabled
    pub client: Option<Client>,
}

impl std::fmt::Debug for InitializationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InitializationResult")
            .field("config", &self.config)
            .field("plan", &self.plan)
            .field("client", &self.client.is_some())
            .finish()
    }
}

/// Initialize the controller manager runtime
pub async fn initialize() -> Result<InitializationResult> {
    observability::init_tracing(&LoggingConfig::from_env());

    // Required for rustls 0.23+ when no default provider is set via features
    if rustls::crypto::ring::default_provider()
        .install_default()
        .is_err()
    {
        warn!("rustls crypto provider already installed");
    }

    info!(
        version = env!("CARGO_PKG_VERSION"),
        git_hash = env!("BUILD_GIT_HASH"),
        built = env!("BUILD_DATETIME"),
        "Starting controller manager"
    );

    observability::register_metrics()?;

    let config = ControllerConfig::load().context("Failed to load controller manager configuration")?;
    info!(
        leader_election = config.enable_leader_election,
        workers = config.workers,
        controllers = ?config.controllers,
        "Loaded configuration"
    );

    let plan = StartupPlan::build(&config);
    plan.log();
    observability::record_startup_plan(&plan);

    let client = if plan.shared_infrastructure {
        Some(create_client(&config).await?)
    } else {
        None
    };

    Ok(InitializationResult {
        config,
        plan,
        client,
    })
}

/// Create the Kubernetes client shared by all enabled controllers
pub async fn create_client(config: &ControllerConfig) -> Result<Client> {
    let kube_config = resolve_kube_config(config)
        .await
        .context("Failed to resolve Kubernetes configuration")?;
    info!(cluster_url = %kube_config.cluster_url, "Connecting to Kubernetes API server");
    Client::try_from(kube_config).context("Failed to create Kubernetes client")
}
