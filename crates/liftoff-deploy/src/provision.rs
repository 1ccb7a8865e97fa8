//! Shared database provisioning.
//!
//! Creates the PostgreSQL and Redis instances every service connects to.
//! The two creations are independent: a postgres failure does not block the
//! redis attempt, and deployment proceeds with whatever subset succeeded.

use tokio::time::sleep;
use tracing::{info, warn};

use liftoff_control::{ControlPlane, CreatePostgres, CreateRedis};
use liftoff_core::{DatabaseInstance, DatabaseKind, DeployConfig};

/// Databases created during this run.
///
/// A `None` slot means that creation failed; services depending on it are
/// still deployed, with the related environment variable omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProvisionedDatabases {
    pub postgres: Option<DatabaseInstance>,
    pub redis: Option<DatabaseInstance>,
}

impl ProvisionedDatabases {
    /// Number of successfully created instances.
    pub fn created(&self) -> usize {
        usize::from(self.postgres.is_some()) + usize::from(self.redis.is_some())
    }
}

/// Create the shared databases, postgres first, with a settle pause between
/// the two calls.
pub async fn create_databases<C: ControlPlane>(
    client: &C,
    config: &DeployConfig,
) -> ProvisionedDatabases {
    let mut databases = ProvisionedDatabases::default();

    let postgres = CreatePostgres {
        name: config.postgres_name(),
        region: config.region.clone(),
        plan: config.plan.clone(),
        database_name: config.database_name.clone(),
    };
    match client.create_postgres(&postgres).await {
        Ok(created) => {
            info!(id = %created.id, name = %postgres.name, "postgres instance created");
            databases.postgres = Some(DatabaseInstance {
                kind: DatabaseKind::Postgres,
                id: created.id,
                connection_string: created.connection_string,
            });
        }
        Err(err) => {
            warn!(error = %err, "postgres creation failed, continuing without it");
        }
    }

    sleep(config.pacing.provision_settle).await;

    let redis = CreateRedis {
        name: config.redis_name(),
        region: config.region.clone(),
        plan: config.plan.clone(),
    };
    match client.create_redis(&redis).await {
        Ok(created) => {
            info!(id = %created.id, name = %redis.name, "redis instance created");
            databases.redis = Some(DatabaseInstance {
                kind: DatabaseKind::Redis,
                id: created.id,
                connection_string: created.connection_string,
            });
        }
        Err(err) => {
            warn!(error = %err, "redis creation failed, continuing without it");
        }
    }

    databases
}
