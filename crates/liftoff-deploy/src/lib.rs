//! liftoff-deploy — orchestration core for a full platform deployment.
//!
//! Drives the fixed service catalog against a control plane: provision the
//! shared databases once, deploy every service in order, report the
//! aggregate outcome.
//!
//! # Architecture
//!
//! ```text
//! Orchestrator::run()
//!   ├── ControlPlane::authenticate()      (fatal on failure)
//!   ├── provision::create_databases()    (partial failure tolerated)
//!   ├── per catalog entry:
//!   │     service::deploy_service()      (failure recorded, never fatal)
//!   └── Vec<DeploymentResult> → report::format_report()
//! ```
//!
//! Only a blank API key or a failed identity probe aborts a run; every
//! later failure lands in the result list. Creation calls are not
//! existence-checked, so repeated runs create duplicate remote resources.

pub mod error;
pub mod orchestrator;
pub mod provision;
pub mod report;
pub mod service;

pub use error::{DeployError, DeployResult};
pub use orchestrator::{Orchestrator, RunPhase};
pub use provision::ProvisionedDatabases;
pub use report::{format_report, summarize};
