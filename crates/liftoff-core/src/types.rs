//! Domain types shared across Liftoff crates.

use serde::Serialize;

/// Which managed data store a service needs at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseRequirement {
    /// No backing store.
    None,
    /// The shared PostgreSQL instance.
    Postgres,
    /// Reads the shared PostgreSQL connection string under a Mongo-style
    /// variable name; no document store is actually provisioned.
    Mongo,
}

/// Kind of managed database instance on the control plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseKind {
    Postgres,
    Redis,
}

/// One deployable unit of the fixed catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceDefinition {
    /// Human-readable display name ("Identity Service").
    pub name: &'static str,
    /// Source directory relative to the repository root.
    pub path: &'static str,
    /// Port the service listens on.
    pub port: u16,
    /// Backing store the service expects.
    pub database: DatabaseRequirement,
}

/// A database created on the control plane during this run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseInstance {
    pub kind: DatabaseKind,
    /// Remote identifier assigned by the control plane.
    pub id: String,
    /// Opaque credential+address string for connecting.
    pub connection_string: String,
}

/// Outcome of one service deployment attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeploymentResult {
    /// Display name of the catalog entry.
    pub name: String,
    pub success: bool,
    /// Predicted public URL; empty when the deployment failed.
    pub url: String,
    /// Remote identifier; empty when the deployment failed.
    pub id: String,
}

/// Aggregate counts derived from a result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub total: usize,
    pub successful: usize,
    pub failed: usize,
}
