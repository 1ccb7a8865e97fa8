//! Single-service deployment.
//!
//! Derives the remote name, environment variables, and build commands for
//! one catalog entry and submits the creation request. A control-plane
//! failure yields a failed [`DeploymentResult`]; nothing propagates past
//! this boundary.

use tracing::{info, warn};

use liftoff_control::{ControlPlane, CreateService, EnvVar};
use liftoff_core::{
    DatabaseRequirement, DeployConfig, DeploymentResult, GATEWAY_PATH, ServiceDefinition,
};

use crate::provision::ProvisionedDatabases;

/// Build/run pair for the Go services.
const GO_BUILD: &str = "go build -o app ./cmd/server";
const GO_START: &str = "./app";

/// The gateway is a Node project and goes through the package manager.
const NODE_BUILD: &str = "npm install";
const NODE_START: &str = "npm start";

/// Remote service type for every catalog entry.
const SERVICE_TYPE: &str = "web_service";

/// Remote resource name: namespace prefix plus the display name
/// lower-cased with spaces replaced by hyphens.
pub fn external_name(namespace: &str, display_name: &str) -> String {
    format!("{}-{}", namespace, display_name.to_lowercase().replace(' ', "-"))
}

/// Build/start command pair for one catalog entry.
pub fn build_commands(definition: &ServiceDefinition) -> (&'static str, &'static str) {
    if definition.path == GATEWAY_PATH {
        (NODE_BUILD, NODE_START)
    } else {
        (GO_BUILD, GO_START)
    }
}

/// Environment variables for one service, in submission order.
///
/// Every service gets PORT, ENVIRONMENT, LOG_LEVEL and SERVICE_NAME. The
/// connection-string variables depend on the definition and on what was
/// actually provisioned: a variable whose database is missing is omitted
/// entirely, never submitted as an empty string.
pub fn service_env(
    definition: &ServiceDefinition,
    databases: &ProvisionedDatabases,
) -> Vec<EnvVar> {
    let mut env = vec![
        entry("PORT", definition.port.to_string()),
        entry("ENVIRONMENT", "production"),
        entry("LOG_LEVEL", "info"),
        entry("SERVICE_NAME", definition.name),
    ];

    match definition.database {
        DatabaseRequirement::None => {}
        DatabaseRequirement::Postgres => match &databases.postgres {
            Some(db) => env.push(entry("DATABASE_URL", db.connection_string.clone())),
            None => warn!(
                service = definition.name,
                "postgres unavailable, DATABASE_URL omitted"
            ),
        },
        // No document store exists; these services read the postgres
        // connection string under the Mongo variable name.
        DatabaseRequirement::Mongo => match &databases.postgres {
            Some(db) => env.push(entry("MONGO_URL", db.connection_string.clone())),
            None => warn!(
                service = definition.name,
                "postgres unavailable, MONGO_URL omitted"
            ),
        },
    }

    if definition.path != GATEWAY_PATH
        && let Some(db) = &databases.redis
    {
        env.push(entry("REDIS_URL", db.connection_string.clone()));
    }

    env
}

fn entry(key: &str, value: impl Into<String>) -> EnvVar {
    EnvVar {
        key: key.to_string(),
        value: value.into(),
    }
}

/// Deploy one catalog entry.
pub async fn deploy_service<C: ControlPlane>(
    client: &C,
    config: &DeployConfig,
    definition: &ServiceDefinition,
    databases: &ProvisionedDatabases,
) -> DeploymentResult {
    let name = external_name(&config.namespace, definition.name);
    let (build_command, start_command) = build_commands(definition);

    let request = CreateService {
        name: name.clone(),
        service_type: SERVICE_TYPE.to_string(),
        repo: config.repo_url.clone(),
        root_dir: definition.path.to_string(),
        region: config.region.clone(),
        plan: config.plan.clone(),
        branch: config.branch.clone(),
        build_command: build_command.to_string(),
        start_command: start_command.to_string(),
        env_vars: service_env(definition, databases),
    };

    match client.create_service(&request).await {
        Ok(created) => {
            let url = format!("https://{}.{}", name, config.service_domain);
            info!(service = definition.name, %url, "service deployed");
            DeploymentResult {
                name: definition.name.to_string(),
                success: true,
                url,
                id: created.id,
            }
        }
        Err(err) => {
            warn!(service = definition.name, error = %err, "service deployment failed");
            DeploymentResult {
                name: definition.name.to_string(),
                success: false,
                url: String::new(),
                id: String::new(),
            }
        }
    }
}
