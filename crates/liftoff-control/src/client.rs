//! Authenticated HTTP client for the hosting control plane.

use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use liftoff_core::DeployConfig;

use crate::api::ControlPlane;
use crate::error::{ControlError, ControlResult};
use crate::payload::{
    CreatePostgres, CreateRedis, CreateService, CreatedService, Identity, ProvisionedDatabase,
};

/// HTTP implementation of [`ControlPlane`].
///
/// Every request carries the bearer token from the run configuration and a
/// bounded timeout. There are no retries; a failed call surfaces as a
/// single [`ControlError`].
#[derive(Debug, Clone)]
pub struct ControlPlaneClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl ControlPlaneClient {
    /// Build a client from the run configuration.
    pub fn new(config: &DeployConfig) -> ControlResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|source| ControlError::Transport {
                endpoint: "<client construction>".to_string(),
                source,
            })?;

        Ok(Self {
            http,
            base_url: config.api_base.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    async fn send<T, B>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&B>,
    ) -> ControlResult<T>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let mut request = self
            .http
            .request(method, self.url(endpoint))
            .bearer_auth(&self.api_key)
            .header("content-type", "application/json");

        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|source| {
            warn!(endpoint, error = %source, "control plane request failed");
            ControlError::Transport {
                endpoint: endpoint.to_string(),
                source,
            }
        })?;

        let status = response.status();
        if status != StatusCode::OK && status != StatusCode::CREATED {
            let body = response.text().await.unwrap_or_default();
            warn!(
                endpoint,
                status = status.as_u16(),
                body,
                "control plane returned an error"
            );
            return Err(ControlError::Status {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        debug!(endpoint, status = status.as_u16(), "control plane call succeeded");
        response.json().await.map_err(|source| ControlError::Decode {
            endpoint: endpoint.to_string(),
            source,
        })
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> ControlResult<T> {
        self.send::<T, ()>(Method::GET, endpoint, None).await
    }

    async fn post<T, B>(&self, endpoint: &str, body: &B) -> ControlResult<T>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        self.send(Method::POST, endpoint, Some(body)).await
    }
}

impl ControlPlane for ControlPlaneClient {
    async fn current_user(&self) -> ControlResult<Identity> {
        self.get("/users/me").await
    }

    async fn create_postgres(&self, req: &CreatePostgres) -> ControlResult<ProvisionedDatabase> {
        self.post("/postgres", req).await
    }

    async fn create_redis(&self, req: &CreateRedis) -> ControlResult<ProvisionedDatabase> {
        self.post("/redis", req).await
    }

    async fn create_service(&self, req: &CreateService) -> ControlResult<CreatedService> {
        self.post("/services", req).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::EnvVar;
    use liftoff_core::Pacing;

    fn test_client(api_base: &str) -> ControlPlaneClient {
        let config = DeployConfig::new("rnd_test")
            .with_api_base(api_base)
            .with_pacing(Pacing::none());
        ControlPlaneClient::new(&config).unwrap()
    }

    fn service_request() -> CreateService {
        CreateService {
            name: "retail-os-identity-service".to_string(),
            service_type: "web_service".to_string(),
            repo: "https://github.com/example/repo".to_string(),
            root_dir: "services/identity".to_string(),
            region: "oregon".to_string(),
            plan: "free".to_string(),
            branch: "master".to_string(),
            build_command: "go build -o app ./cmd/server".to_string(),
            start_command: "./app".to_string(),
            env_vars: vec![EnvVar {
                key: "PORT".to_string(),
                value: "8001".to_string(),
            }],
        }
    }

    #[tokio::test]
    async fn authenticate_succeeds_on_identity_body() {
        let mut server = mockito::Server::new_async().await;
        let probe = server
            .mock("GET", "/users/me")
            .match_header("authorization", "Bearer rnd_test")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id":"usr-1","email":"dev@example.com"}"#)
            .expect(1)
            .create_async()
            .await;

        let client = test_client(&server.url());
        assert!(client.authenticate().await);
        probe.assert_async().await;
    }

    #[tokio::test]
    async fn authenticate_fails_on_unauthorized() {
        let mut server = mockito::Server::new_async().await;
        let _probe = server
            .mock("GET", "/users/me")
            .with_status(401)
            .with_body(r#"{"message":"unauthorized"}"#)
            .create_async()
            .await;

        let client = test_client(&server.url());
        assert!(!client.authenticate().await);
    }

    #[tokio::test]
    async fn authenticate_fails_on_transport_error() {
        // Nothing listens on this port.
        let client = test_client("http://127.0.0.1:1");
        assert!(!client.authenticate().await);
    }

    #[tokio::test]
    async fn create_service_sends_camel_case_body() {
        let mut server = mockito::Server::new_async().await;
        let create = server
            .mock("POST", "/services")
            .match_header("authorization", "Bearer rnd_test")
            .match_body(mockito::Matcher::PartialJson(serde_json::json!({
                "name": "retail-os-identity-service",
                "type": "web_service",
                "rootDir": "services/identity",
                "branch": "master",
                "buildCommand": "go build -o app ./cmd/server",
                "startCommand": "./app",
                "envVars": [{"key": "PORT", "value": "8001"}],
            })))
            .with_status(201)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id":"srv-123"}"#)
            .expect(1)
            .create_async()
            .await;

        let client = test_client(&server.url());
        let created = client.create_service(&service_request()).await.unwrap();
        assert_eq!(created.id, "srv-123");
        create.assert_async().await;
    }

    #[tokio::test]
    async fn non_success_status_yields_status_error() {
        let mut server = mockito::Server::new_async().await;
        let _create = server
            .mock("POST", "/services")
            .with_status(500)
            .with_body("internal error")
            .create_async()
            .await;

        let client = test_client(&server.url());
        let err = client.create_service(&service_request()).await.unwrap_err();
        match err {
            ControlError::Status { status, body, .. } => {
                assert_eq!(status, 500);
                assert_eq!(body, "internal error");
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn create_postgres_parses_connection_string() {
        let mut server = mockito::Server::new_async().await;
        let _create = server
            .mock("POST", "/postgres")
            .match_body(mockito::Matcher::PartialJson(serde_json::json!({
                "name": "retail-os-postgres",
                "databaseName": "retail_os",
            })))
            .with_status(201)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id":"db-1","connectionString":"postgres://u:p@host/retail_os"}"#)
            .create_async()
            .await;

        let client = test_client(&server.url());
        let request = CreatePostgres {
            name: "retail-os-postgres".to_string(),
            region: "oregon".to_string(),
            plan: "free".to_string(),
            database_name: "retail_os".to_string(),
        };
        let db = client.create_postgres(&request).await.unwrap();
        assert_eq!(db.id, "db-1");
        assert_eq!(db.connection_string, "postgres://u:p@host/retail_os");
    }

    #[tokio::test]
    async fn garbled_body_yields_decode_error() {
        let mut server = mockito::Server::new_async().await;
        let _probe = server
            .mock("GET", "/users/me")
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let client = test_client(&server.url());
        let err = client.current_user().await.unwrap_err();
        assert!(matches!(err, ControlError::Decode { .. }));
    }
}
