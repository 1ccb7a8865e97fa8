//! Wire types for the control-plane API.
//!
//! Field names follow the remote API's camelCase JSON. Response fields
//! default to empty when the platform omits them (a database's connection
//! string can lag its creation on some plans).

use serde::{Deserialize, Serialize};

/// `GET /users/me` response. Any parseable body counts as an identity.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Identity {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// `POST /postgres` request body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostgres {
    pub name: String,
    pub region: String,
    pub plan: String,
    pub database_name: String,
}

/// `POST /redis` request body.
#[derive(Debug, Clone, Serialize)]
pub struct CreateRedis {
    pub name: String,
    pub region: String,
    pub plan: String,
}

/// Response body for both database creation calls.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvisionedDatabase {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub connection_string: String,
}

/// One environment variable entry on a service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvVar {
    pub key: String,
    pub value: String,
}

/// `POST /services` request body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateService {
    pub name: String,
    #[serde(rename = "type")]
    pub service_type: String,
    pub repo: String,
    pub root_dir: String,
    pub region: String,
    pub plan: String,
    pub branch: String,
    pub build_command: String,
    pub start_command: String,
    pub env_vars: Vec<EnvVar>,
}

/// `POST /services` response body.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedService {
    #[serde(default)]
    pub id: String,
}

impl CreateService {
    /// Value of one submitted environment variable, if present.
    pub fn env_value(&self, key: &str) -> Option<&str> {
        self.env_vars
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| entry.value.as_str())
    }
}
