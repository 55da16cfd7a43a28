//! Scout - Profile Search Service
//!
//! Scout answers "find profiles matching a search term" requests by
//! fetching a result set once per term from an external provider, then
//! serving relevance-ranked, paginated slices of that cached result set.

use clap::{Parser, Subcommand};
use scout_core::{Result, ScoutConfig};
use scout_serve::ServerBuilder;
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "scout")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Scout Profile Search Service - cached, ranked profile search")]
#[command(long_about = r#"
Scout serves relevance-ranked, paginated profile search results over HTTP.
Each search term is fetched from the external provider at most once per
process lifetime and answered from an in-process cache afterwards.

The provider credential is read from configuration (file or SCOUT__
environment variables), never from source.
"#)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log output format (json, pretty, compact)
    #[arg(long, default_value = "pretty", global = true)]
    log_format: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Start Scout as a web server
    Serve {
        /// Server host address override
        #[arg(long)]
        host: Option<String>,

        /// Server port override
        #[arg(short, long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    if let Err(e) = scout_core::init_logging_with_config(level, &cli.log_format) {
        eprintln!("Failed to initialize logging: {e}");
        std::process::exit(1);
    }

    if let Err(e) = run(cli).await {
        error!("Fatal: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = ScoutConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Serve { host, port } => {
            let mut builder = ServerBuilder::new(config);
            if let Some(host) = host {
                builder = builder.host(host);
            }
            if let Some(port) = port {
                builder = builder.port(port);
            }

            let server = builder.build()?;
            info!(
                "Scout v{} serving on {}:{}",
                env!("CARGO_PKG_VERSION"),
                server.config().host,
                server.config().port
            );
            server.start().await
        }
    }
}
