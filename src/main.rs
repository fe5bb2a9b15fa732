//! GPOS Workbench - Geothermal Prospect Risk Assessment
//!
//! Serves the interactive Geologic Probability of Success calculator.
//!
//! # Usage
//!
//! ```bash
//! # Run with defaults (slider 1-100 %, step 1, start 50)
//! cargo run --release
//!
//! # Run against a deployment config
//! cargo run --release -- --config prospect_a.toml
//! ```
//!
//! # Environment Variables
//!
//! - `GPOS_CONFIG`: Path to a workbench TOML config
//! - `GPOS_CORS_ORIGINS`: Comma-separated allowed CORS origins (dev only)
//! - `RUST_LOG`: Logging level (default: info)

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

use gpos_workbench::api::{self, WorkbenchState};
use gpos_workbench::config::{validation, WorkbenchConfig};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "gpos-workbench")]
#[command(about = "GPOS Workbench - Geothermal Prospect Risk Assessment")]
#[command(version)]
struct CliArgs {
    /// Override the server address (default: "0.0.0.0:8080")
    #[arg(short, long)]
    addr: Option<String>,

    /// Path to a workbench TOML config (overrides GPOS_CONFIG)
    #[arg(short, long)]
    config: Option<String>,

    /// Emit logs as JSON lines instead of human-readable text
    #[arg(long)]
    log_json: bool,
}

fn load_config(args: &CliArgs) -> Result<WorkbenchConfig> {
    let config = match &args.config {
        Some(path) => WorkbenchConfig::load_from_file(std::path::Path::new(path))
            .with_context(|| format!("failed to load config from {path}"))?,
        None => WorkbenchConfig::load(),
    };

    let (errors, warnings) = validation::validate_slider_ranges(&config);
    for warning in &warnings {
        warn!(field = %warning.field, "{warning}");
    }
    if !errors.is_empty() {
        for error in &errors {
            tracing::error!("{error}");
        }
        anyhow::bail!("configuration has {} fatal error(s)", errors.len());
    }

    Ok(config)
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    let args = CliArgs::parse();

    // Initialize logging
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    if args.log_json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .init();
    }

    // Load workbench configuration
    let workbench_config = load_config(&args)?;
    info!(
        "Prospect: {} | Sliders: {}-{} % step {} | Polarity: checked means {}",
        workbench_config.prospect.name,
        workbench_config.sliders.base.min,
        workbench_config.sliders.base.max,
        workbench_config.sliders.base.step,
        if workbench_config.toggles.checked_means_included {
            "included"
        } else {
            "excluded"
        },
    );

    let server_addr = args
        .addr
        .unwrap_or_else(|| workbench_config.server.addr.clone());

    let state = WorkbenchState::from_config(&workbench_config);
    let app = api::create_app(state);

    let listener = tokio::net::TcpListener::bind(&server_addr)
        .await
        .with_context(|| format!("failed to bind {server_addr}"))?;
    info!("GPOS Workbench listening on http://{server_addr}");

    axum::serve(listener, app)
        .await
        .context("server error")?;

    Ok(())
}
