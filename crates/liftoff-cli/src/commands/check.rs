//! `liftoff check` — standalone credential and connectivity probe.

use anyhow::bail;

use liftoff_control::{ControlPlane, ControlPlaneClient};
use liftoff_core::DeployConfig;

use crate::credentials;

pub async fn run(api_key: Option<String>) -> anyhow::Result<()> {
    let api_key = credentials::resolve(api_key)?;
    let config = DeployConfig::new(api_key);
    let client = ControlPlaneClient::new(&config)?;

    match client.current_user().await {
        Ok(user) => {
            println!("✓ Connected as: {}", user.email.as_deref().unwrap_or("unknown"));
            Ok(())
        }
        Err(err) => bail!("control-plane check failed: {err}"),
    }
}
