//! Error types for control-plane calls.

use thiserror::Error;

/// Result type alias for control-plane operations.
pub type ControlResult<T> = Result<T, ControlError>;

/// Errors from a single control-plane request.
///
/// These never propagate past the provisioning or deployment boundary;
/// callers convert them to an absent resource or a failed result.
#[derive(Debug, Error)]
pub enum ControlError {
    /// The request never produced an HTTP response (connect, TLS, timeout).
    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// The control plane answered with a status other than 200/201.
    #[error("control plane returned {status} for {endpoint}: {body}")]
    Status {
        endpoint: String,
        status: u16,
        body: String,
    },

    /// The response body did not match the expected shape.
    #[error("invalid response from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
}
