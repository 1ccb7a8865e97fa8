//! liftoff-control — client for the hosting platform's control plane.
//!
//! Wraps the platform's HTTP API behind the [`ControlPlane`] trait so the
//! orchestration layer never touches transport details. The production
//! implementation is [`ControlPlaneClient`]; tests substitute scripted
//! fakes.
//!
//! # Components
//!
//! - **`api`** — the [`ControlPlane`] trait (identity probe, resource creation)
//! - **`client`** — reqwest-backed implementation with bearer auth and timeouts
//! - **`payload`** — wire types matching the remote API's camelCase JSON
//! - **`error`** — transport/status/decode error taxonomy

pub mod api;
pub mod client;
pub mod error;
pub mod payload;

pub use api::ControlPlane;
pub use client::ControlPlaneClient;
pub use error::{ControlError, ControlResult};
pub use payload::{
    CreatePostgres, CreateRedis, CreateService, CreatedService, EnvVar, Identity,
    ProvisionedDatabase,
};
