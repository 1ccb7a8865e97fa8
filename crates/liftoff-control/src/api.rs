//! The control-plane surface the orchestration layer depends on.

use tracing::{info, warn};

use crate::error::ControlResult;
use crate::payload::{
    CreatePostgres, CreateRedis, CreateService, CreatedService, Identity, ProvisionedDatabase,
};

/// Operations the deployment flow performs against the hosting platform.
///
/// The production implementation is [`crate::ControlPlaneClient`]; tests
/// substitute scripted fakes.
pub trait ControlPlane {
    /// Identity probe — `GET /users/me`.
    async fn current_user(&self) -> ControlResult<Identity>;

    /// Create the shared PostgreSQL instance — `POST /postgres`.
    async fn create_postgres(&self, req: &CreatePostgres) -> ControlResult<ProvisionedDatabase>;

    /// Create the shared Redis instance — `POST /redis`.
    async fn create_redis(&self, req: &CreateRedis) -> ControlResult<ProvisionedDatabase>;

    /// Create one web service — `POST /services`.
    async fn create_service(&self, req: &CreateService) -> ControlResult<CreatedService>;

    /// Pre-flight connectivity and credential check.
    ///
    /// True iff the identity endpoint answered with a parseable body. This
    /// is a probe only: no session token is obtained, and every later call
    /// re-sends the static API key.
    async fn authenticate(&self) -> bool {
        match self.current_user().await {
            Ok(user) => {
                info!(
                    email = user.email.as_deref().unwrap_or("unknown"),
                    "authenticated with control plane"
                );
                true
            }
            Err(err) => {
                warn!(error = %err, "control plane authentication failed");
                false
            }
        }
    }
}
