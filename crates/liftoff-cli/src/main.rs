//! liftoff — deploys the platform to the hosting control plane.
//!
//! # Usage
//!
//! ```text
//! liftoff deploy --api-key rnd_...     # provision databases, deploy the catalog
//! liftoff check                        # verify credentials and exit
//! liftoff blueprint -o render.yaml     # write the declarative topology file
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod blueprint;
mod commands;
mod credentials;

#[derive(Parser)]
#[command(
    name = "liftoff",
    about = "Deploys the commerce platform to the hosting control plane",
    version,
    propagate_version = true,
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Provision the shared databases and deploy the full service catalog.
    ///
    /// The API key is taken from --api-key, then the RENDER_API_KEY
    /// environment variable, then an interactive prompt.
    Deploy {
        /// Control-plane API key.
        #[arg(long)]
        api_key: Option<String>,
        /// Output format: text or json.
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Verify credentials against the control plane and exit.
    Check {
        /// Control-plane API key.
        #[arg(long)]
        api_key: Option<String>,
    },
    /// Write the deployment topology as a declarative blueprint file.
    Blueprint {
        /// Where to write the blueprint.
        #[arg(short, long, default_value = "render.yaml")]
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("liftoff=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Deploy { api_key, format } => commands::deploy::run(api_key, &format).await,
        Command::Check { api_key } => commands::check::run(api_key).await,
        Command::Blueprint { output } => commands::blueprint::run(&output),
    }
}
