//! Run loop for a full deployment.
//!
//! Drives the phase machine:
//!
//! ```text
//! Init → Authenticated → Provisioning → Deploying → Complete
//!   └────────┴──────────→ Failed (blank key / identity probe failed)
//! ```
//!
//! Only the pre-flight can abort a run. Partial provisioning failures and
//! per-service deployment failures are recorded and the catalog walk
//! continues to the end. A run is never retried automatically.

use tokio::time::sleep;
use tracing::info;

use liftoff_control::ControlPlane;
use liftoff_core::{CATALOG, DeployConfig, DeploymentResult};

use crate::error::{DeployError, DeployResult};
use crate::provision;
use crate::service;

/// Phase of a deployment run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunPhase {
    /// Nothing attempted yet.
    Init,
    /// Credentials verified against the identity endpoint.
    Authenticated,
    /// Creating the shared databases.
    Provisioning,
    /// Walking the catalog.
    Deploying,
    /// Every catalog entry was attempted.
    Complete,
    /// Aborted before the catalog was attempted.
    Failed { reason: String },
}

/// Drives one deployment run against a control plane.
pub struct Orchestrator<C> {
    client: C,
    config: DeployConfig,
    phase: RunPhase,
    results: Vec<DeploymentResult>,
}

impl<C: ControlPlane> Orchestrator<C> {
    pub fn new(client: C, config: DeployConfig) -> Self {
        Self {
            client,
            config,
            phase: RunPhase::Init,
            results: Vec::new(),
        }
    }

    /// Current phase.
    pub fn phase(&self) -> &RunPhase {
        &self.phase
    }

    /// Results collected so far, one per attempted catalog entry.
    pub fn results(&self) -> &[DeploymentResult] {
        &self.results
    }

    /// Run the full deployment: authenticate, provision, walk the catalog.
    ///
    /// Creation calls are not existence-checked, so running this twice
    /// against the same remote state creates two independent sets of
    /// resources.
    pub async fn run(&mut self) -> DeployResult<Vec<DeploymentResult>> {
        if self.config.api_key.trim().is_empty() {
            self.phase = RunPhase::Failed {
                reason: "missing API key".to_string(),
            };
            return Err(DeployError::Credentials);
        }

        if !self.client.authenticate().await {
            self.phase = RunPhase::Failed {
                reason: "authentication failed".to_string(),
            };
            return Err(DeployError::Authentication);
        }
        self.phase = RunPhase::Authenticated;

        self.phase = RunPhase::Provisioning;
        let databases = provision::create_databases(&self.client, &self.config).await;
        info!(created = databases.created(), "database provisioning finished");

        // Partial provisioning never stops the catalog walk.
        self.phase = RunPhase::Deploying;
        for (index, definition) in CATALOG.iter().enumerate() {
            if index > 0 {
                sleep(self.config.pacing.deploy_interval).await;
            }
            info!(
                service = definition.name,
                position = index + 1,
                total = CATALOG.len(),
                "deploying service"
            );
            let result =
                service::deploy_service(&self.client, &self.config, definition, &databases).await;
            self.results.push(result);
        }

        self.phase = RunPhase::Complete;
        Ok(self.results.clone())
    }
}
