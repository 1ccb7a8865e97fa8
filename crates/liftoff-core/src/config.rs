//! Deployment run configuration.
//!
//! Every knob lives in one explicit object, constructed once by the CLI
//! adapter (or a test) and passed into the orchestration core. The core
//! never reads ambient process state.

use std::time::Duration;

/// Pauses between control-plane calls.
///
/// These are propagation-settling delays, not correctness-critical
/// synchronization. Tests run with [`Pacing::none`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    /// Pause after creating the postgres instance.
    pub provision_settle: Duration,
    /// Pause between consecutive service deployments.
    pub deploy_interval: Duration,
}

impl Pacing {
    /// No pauses at all.
    pub fn none() -> Self {
        Self {
            provision_settle: Duration::ZERO,
            deploy_interval: Duration::ZERO,
        }
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            provision_settle: Duration::from_secs(2),
            deploy_interval: Duration::from_secs(3),
        }
    }
}

/// Configuration for one deployment run.
#[derive(Debug, Clone)]
pub struct DeployConfig {
    /// Base URL of the control-plane API.
    pub api_base: String,
    /// API key sent as a bearer token on every request.
    pub api_key: String,
    /// Source repository every service is built from.
    pub repo_url: String,
    /// Branch to deploy.
    pub branch: String,
    /// Control-plane region for every resource.
    pub region: String,
    /// Control-plane plan for every resource.
    pub plan: String,
    /// Prefix for every remote resource name.
    pub namespace: String,
    /// Domain suffix for predicted service URLs.
    pub service_domain: String,
    /// Logical database name inside the postgres instance.
    pub database_name: String,
    /// Bound on every outbound request.
    pub request_timeout: Duration,
    /// Pauses between control-plane calls.
    pub pacing: Pacing,
}

impl DeployConfig {
    pub const DEFAULT_API_BASE: &str = "https://api.render.com/v1";

    /// Config with production defaults and the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    /// Point the client at a different API base (used by tests).
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Override the pacing delays.
    pub fn with_pacing(mut self, pacing: Pacing) -> Self {
        self.pacing = pacing;
        self
    }

    /// Remote name of the shared postgres instance.
    pub fn postgres_name(&self) -> String {
        format!("{}-postgres", self.namespace)
    }

    /// Remote name of the shared redis instance.
    pub fn redis_name(&self) -> String {
        format!("{}-redis", self.namespace)
    }
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            api_base: Self::DEFAULT_API_BASE.to_string(),
            api_key: String::new(),
            repo_url: "https://github.com/mobilebarn/UNIFIED_COMMERCE".to_string(),
            branch: "master".to_string(),
            region: "oregon".to_string(),
            plan: "free".to_string(),
            namespace: "retail-os".to_string(),
            service_domain: "render.com".to_string(),
            database_name: "retail_os".to_string(),
            request_timeout: Duration::from_secs(30),
            pacing: Pacing::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_keeps_production_defaults() {
        let config = DeployConfig::new("rnd_abc");
        assert_eq!(config.api_key, "rnd_abc");
        assert_eq!(config.api_base, DeployConfig::DEFAULT_API_BASE);
        assert_eq!(config.namespace, "retail-os");
        assert_eq!(config.branch, "master");
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn database_names_derive_from_namespace() {
        let config = DeployConfig::new("rnd_abc");
        assert_eq!(config.postgres_name(), "retail-os-postgres");
        assert_eq!(config.redis_name(), "retail-os-redis");
    }

    #[test]
    fn builders_override_base_and_pacing() {
        let config = DeployConfig::new("rnd_abc")
            .with_api_base("http://127.0.0.1:9999")
            .with_pacing(Pacing::none());
        assert_eq!(config.api_base, "http://127.0.0.1:9999");
        assert_eq!(config.pacing.provision_settle, Duration::ZERO);
        assert_eq!(config.pacing.deploy_interval, Duration::ZERO);
    }

    #[test]
    fn default_pacing_is_nonzero() {
        let pacing = Pacing::default();
        assert!(pacing.provision_settle > Duration::ZERO);
        assert!(pacing.deploy_interval > Duration::ZERO);
    }
}
