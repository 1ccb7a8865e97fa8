//! Fatal error taxonomy for a deployment run.

use thiserror::Error;

/// Result type alias for run-level operations.
pub type DeployResult<T> = Result<T, DeployError>;

/// Errors that abort a run before the catalog is attempted.
///
/// Per-database provisioning failures and per-service deployment failures
/// are deliberately not here: they are recorded as absent resources or
/// failed results, and the run continues.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeployError {
    /// The API key was blank; nothing was sent to the control plane.
    #[error("control plane API key is missing")]
    Credentials,

    /// The identity probe failed; provisioning was not attempted.
    #[error("control plane authentication failed")]
    Authentication,
}
