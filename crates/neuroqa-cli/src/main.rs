//! NeuroQA - terminal client for a story answering service.
//!
//! Shows one form: pick or type a short story, ask a yes/no question, and
//! read back the answer with its confidence.
//!
//! Run with: `neuroqa --endpoint http://127.0.0.1:8000/predict`
//!
//! Or print a single frame without entering the interactive screen:
//! `neuroqa --snapshot --demo 1`

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use neuroqa_client::PredictionClient;
use neuroqa_config::Config;
use neuroqa_core::parse_demo_id;
use tracing::{info, warn};

mod config_bridge;
mod tui;

use tui::{App, Theme};

/// NeuroQA - Story Answering Bot
#[derive(Parser)]
#[command(name = "neuroqa")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Prediction endpoint (overrides config and `NEUROQA_ENDPOINT`)
    #[arg(long)]
    endpoint: Option<String>,

    /// Configuration file to use instead of `~/.neuroqa/config.toml`
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Preselect a demo story by id
    #[arg(long)]
    demo: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Print one frame to stdout instead of running interactively
    #[arg(long)]
    snapshot: bool,

    /// Snapshot width in columns
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u16).range(40..))]
    width: u16,

    /// Snapshot height in rows
    #[arg(long, default_value_t = 40, value_parser = clap::value_parser!(u16).range(20..))]
    height: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let resolved = match &cli.config {
        Some(path) => Config::load_with_file(path),
        None => Config::load(),
    }
    .context("failed to load configuration")?;

    let mut config = resolved.config.clone();
    if let Some(endpoint) = &cli.endpoint {
        config.service.endpoint.clone_from(endpoint);
    }

    // Set up logging from config, with --verbose override.
    let log_dir = (!cli.snapshot).then(|| resolved.log_directory());
    let log_config = config_bridge::to_log_config(&config, log_dir.as_deref(), cli.verbose);
    if let Err(e) = neuroqa_telemetry::setup_logging(&log_config) {
        eprintln!("Failed to initialize logging: {e}");
    }

    let client = PredictionClient::new(&config.service.endpoint)
        .context("invalid prediction endpoint")?;
    info!(
        endpoint = %config.service.endpoint,
        config_files = ?resolved.loaded_files,
        "starting neuroqa"
    );

    let mut app = App::new(
        config.service.endpoint.clone(),
        Theme::from_name(&config.ui.theme),
    );
    if let Some(raw) = &cli.demo {
        match parse_demo_id(raw) {
            Some(id) => app.load_demo(id),
            None => warn!(demo = %raw, "ignoring invalid demo id"),
        }
    }

    if cli.snapshot {
        let frame = tui::render_snapshot(&app, cli.width, cli.height)?;
        print!("{frame}");
        return Ok(());
    }

    tui::run(Arc::new(client), app).await
}
