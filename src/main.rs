//! WLDS - species classification service for audio, image and fused input

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wlds::api::{self, AppState};
use wlds::config::Config;
use wlds::pipeline::{FixedPipeline, Pipeline};
use wlds::types::AnalysisMode;

#[derive(Parser)]
#[command(name = "wlds")]
#[command(about = "Species classification service for audio, image and fused input")]
#[command(version)]
struct Cli {
    /// Path to config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Address to bind (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Run a single analysis and print the result as JSON
    Analyze {
        /// audio, image or fusion
        mode: AnalysisMode,
    },

    /// Write a default config file
    Init {
        /// Where to write it (defaults to the user config directory)
        path: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            format!("wlds={},tower_http=debug", log_level).into()
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment
    let _ = dotenvy::dotenv();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Commands::Serve { host, port } => {
            let mut config = config;
            if let Some(host) = host {
                config.http_host = host;
            }
            if let Some(port) = port {
                config.http_port = port;
            }

            let state = AppState::new(Arc::new(FixedPipeline::new()));
            let router = api::create_router(state, &config);

            let addr = config.bind_addr();
            tracing::info!("Starting HTTP server on {}", addr);
            let listener = tokio::net::TcpListener::bind(&addr).await?;

            println!("WLDS server running at http://{}", addr);
            println!("  UI:       http://{}/", addr);
            println!("  Analyze:  http://{}/analyze/{{audio,image,fusion}}", addr);
            println!("  API Docs: http://{}/api/openapi.json", addr);
            println!("  Health:   http://{}/health", addr);

            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;
        }

        Commands::Analyze { mode } => {
            let result = FixedPipeline::new().run(mode).await?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }

        Commands::Init { path } => {
            let path = match path {
                Some(p) => p,
                None => Config::default_path()?,
            };

            if path.exists() {
                anyhow::bail!("Config already exists at {}", path.display());
            }

            Config::default().save(&path)?;
            println!("✓ Config written to {}", path.display());
        }
    }

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
