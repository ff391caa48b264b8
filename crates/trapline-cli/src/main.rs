//! Trapline CLI
//!
//! Serves the web dashboard and records harvests and investments from the
//! terminal.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod cli;
mod commands;
mod config;
mod config_handlers;
mod output;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Args, Command, HarvestAction, InvestAction};
use config::TraplineConfig;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if !already_reported(&e) {
                eprintln!("error: {e:#}");
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<()> {
    if let Command::Config { action } = args.command {
        return Ok(config_handlers::handle_config_command(
            args.config.as_deref(),
            action,
        )?);
    }

    let listen = match &args.command {
        Command::Serve { listen } => listen.clone(),
        _ => None,
    };
    let config = TraplineConfig::load(args.config.as_deref())?
        .with_overrides(args.backend_url.clone(), listen);
    init_tracing(&config, args.verbose);
    tracing::debug!(backend = %config.backend_url, "Configuration resolved");

    match args.command {
        Command::Serve { .. } => commands::serve(&config).await,
        Command::Summary => commands::summary(&config).await,
        Command::Harvest {
            action: HarvestAction::Add(fields),
        } => commands::add_harvest(&config, fields.into()).await,
        Command::Invest {
            action: InvestAction::Add(fields),
        } => commands::add_investment(&config, fields.into()).await,
        Command::Config { .. } => Ok(()),
    }
}

/// `RUST_LOG` wins, then `--verbose`, then the configured filter.
fn init_tracing(config: &TraplineConfig, verbose: bool) {
    let fallback = if verbose {
        "debug"
    } else {
        config.log_filter.as_str()
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(std::io::stderr)
        .init();
}

// Save and draft failures have already gone through the stderr notifier.
fn already_reported(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<trapline_dashboard::Error>(),
        Some(trapline_dashboard::Error::Save { .. } | trapline_dashboard::Error::Draft { .. })
    )
}
