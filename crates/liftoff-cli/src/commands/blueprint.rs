//! `liftoff blueprint` — write the declarative topology file.

use std::path::Path;

use anyhow::Context;

use liftoff_core::DeployConfig;

use crate::blueprint::Blueprint;

pub fn run(output: &Path) -> anyhow::Result<()> {
    let blueprint = Blueprint::from_catalog(&DeployConfig::default());
    let yaml = blueprint.to_yaml()?;
    std::fs::write(output, yaml)
        .with_context(|| format!("failed to write {}", output.display()))?;
    println!("✓ Generated {}", output.display());
    Ok(())
}
