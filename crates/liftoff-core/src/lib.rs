//! liftoff-core — domain types for the platform deployment tool.
//!
//! Holds the data every other crate agrees on: the fixed service catalog,
//! the run configuration object, and the result types a deployment run
//! produces. Nothing here talks to the network.
//!
//! # Components
//!
//! - **`types`** — service definitions, database instances, run results
//! - **`catalog`** — the fixed, ordered list of deployable services
//! - **`config`** — the explicit [`DeployConfig`] passed into the core

pub mod catalog;
pub mod config;
pub mod types;

pub use catalog::{CATALOG, GATEWAY_PATH};
pub use config::{DeployConfig, Pacing};
pub use types::*;
