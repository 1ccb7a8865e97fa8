//! `liftoff deploy` — provision the databases and walk the full catalog.

use liftoff_control::ControlPlaneClient;
use liftoff_core::DeployConfig;
use liftoff_deploy::{Orchestrator, format_report, summarize};

use crate::credentials;

/// Run a full deployment and print the report.
///
/// Exits 0 even when individual services failed; the summary carries the
/// counts. Ctrl-C aborts immediately, leaving already-created remote
/// resources in place.
pub async fn run(api_key: Option<String>, format: &str) -> anyhow::Result<()> {
    let api_key = credentials::resolve(api_key)?;
    let config = DeployConfig::new(api_key);
    let client = ControlPlaneClient::new(&config)?;
    let mut orchestrator = Orchestrator::new(client, config);

    let results = tokio::select! {
        outcome = orchestrator.run() => outcome?,
        _ = tokio::signal::ctrl_c() => {
            anyhow::bail!("deployment cancelled; resources created so far are left in place")
        }
    };

    match format {
        "json" => {
            let report = serde_json::json!({
                "summary": summarize(&results),
                "results": results,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        _ => {
            println!("{}", format_report(&results));
        }
    }

    Ok(())
}
