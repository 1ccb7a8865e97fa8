//! Declarative blueprint rendering.
//!
//! Renders the same fixed catalog the orchestrator deploys as a platform
//! blueprint file: both databases plus every service, with connection
//! strings wired through `fromService` references instead of literal
//! values. Pure data + file writer; nothing here talks to the network.

use serde::Serialize;

use liftoff_core::{CATALOG, DatabaseRequirement, DeployConfig, GATEWAY_PATH};
use liftoff_deploy::service::{build_commands, external_name};

/// One blueprint entry. Databases and web services share a file section, so
/// the shape is a superset with the unused fields omitted from the output.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    #[serde(rename = "type")]
    pub entry_type: &'static str,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env: Option<&'static str>,
    pub plan: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dockerfile_path: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_command: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_command: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub env_vars: Vec<BlueprintEnv>,
}

/// An environment variable: either a literal value or a reference to
/// another blueprint entry's connection string.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlueprintEnv {
    pub key: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_service: Option<ServiceRef>,
}

/// `fromService` reference inside a blueprint environment variable.
#[derive(Debug, Serialize)]
pub struct ServiceRef {
    #[serde(rename = "type")]
    pub service_type: &'static str,
    pub name: String,
    pub property: &'static str,
}

/// The whole topology file.
#[derive(Debug, Serialize)]
pub struct Blueprint {
    pub services: Vec<Entry>,
}

impl Blueprint {
    /// Derive the blueprint from the fixed catalog: databases first, then
    /// every service in deploy order.
    pub fn from_catalog(config: &DeployConfig) -> Self {
        let mut services = vec![
            Entry {
                entry_type: "pserv",
                name: config.postgres_name(),
                env: Some("docker"),
                plan: config.plan.clone(),
                dockerfile_path: Some("./infrastructure/postgres/Dockerfile"),
                root_dir: None,
                build_command: None,
                start_command: None,
                env_vars: Vec::new(),
            },
            Entry {
                entry_type: "redis",
                name: config.redis_name(),
                env: None,
                plan: config.plan.clone(),
                dockerfile_path: None,
                root_dir: None,
                build_command: None,
                start_command: None,
                env_vars: Vec::new(),
            },
        ];

        for definition in &CATALOG {
            let gateway = definition.path == GATEWAY_PATH;
            let (build_command, start_command) = build_commands(definition);

            let mut env_vars = vec![literal("PORT", definition.port.to_string())];
            if gateway {
                env_vars.push(literal("NODE_ENV", "production"));
            } else {
                env_vars.push(literal("ENVIRONMENT", "production"));
            }

            match definition.database {
                DatabaseRequirement::None => {}
                DatabaseRequirement::Postgres => {
                    env_vars.push(from_postgres("DATABASE_URL", config));
                }
                DatabaseRequirement::Mongo => {
                    env_vars.push(from_postgres("MONGO_URL", config));
                }
            }

            if !gateway {
                env_vars.push(BlueprintEnv {
                    key: "REDIS_URL",
                    value: None,
                    from_service: Some(ServiceRef {
                        service_type: "redis",
                        name: config.redis_name(),
                        property: "connectionString",
                    }),
                });
            }

            services.push(Entry {
                entry_type: "web",
                name: external_name(&config.namespace, definition.name),
                env: Some(if gateway { "node" } else { "go" }),
                plan: config.plan.clone(),
                dockerfile_path: None,
                root_dir: Some(definition.path.to_string()),
                build_command: Some(build_command.to_string()),
                start_command: Some(start_command.to_string()),
                env_vars,
            });
        }

        Self { services }
    }

    /// Render to YAML with a short explanatory header.
    pub fn to_yaml(&self) -> anyhow::Result<String> {
        let body = serde_yaml_ng::to_string(self)?;
        Ok(format!(
            "# Deployment blueprint for the commerce platform\n\
             # Connect this file to the hosting platform to deploy everything at once\n\
             {body}"
        ))
    }
}

fn literal(key: &'static str, value: impl Into<String>) -> BlueprintEnv {
    BlueprintEnv {
        key,
        value: Some(value.into()),
        from_service: None,
    }
}

fn from_postgres(key: &'static str, config: &DeployConfig) -> BlueprintEnv {
    BlueprintEnv {
        key,
        value: None,
        from_service: Some(ServiceRef {
            service_type: "pserv",
            name: config.postgres_name(),
            property: "connectionString",
        }),
    }
}
