// SPDX-License-Identifier: GPL-3.0-only

//! Main entry point for the status bar frontend
//!
//! Wires the CLI, the config file, and the daemon client together. Every
//! invocation does exactly one thing and exits; the bar's own scheduler
//! provides the polling loop.

use crate::cli;
use crate::config::BarConfig;
use crate::output::Format;
use anyhow::{Context, Result};
use dictate_status_client::DictationStatusClient;
use log::{debug, error};
use std::path::PathBuf;

/// Main entry point for the status bar binary
///
/// # Errors
///
/// Returns an error if rendering the output line fails.
pub async fn run() -> Result<()> {
    let matches = cli::build().get_matches();

    let verbose = matches.get_flag("verbose");

    // Initialize logging - respect RUST_LOG env var, fallback to verbose flag
    if std::env::var("RUST_LOG").is_ok() {
        env_logger::init();
    } else {
        let log_level = if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        };
        env_logger::Builder::from_default_env()
            .filter_level(log_level)
            .init();
    }

    let config = BarConfig::load();
    let socket_path = config.socket_path(matches.get_one::<PathBuf>("socket").cloned());
    let format = *matches.get_one::<Format>("format").unwrap();

    let client = DictationStatusClient::new(socket_path);
    debug!("Using daemon socket {}", client.socket_path().display());

    match matches.subcommand_name() {
        Some("toggle") => handle_toggle_command(&client).await,
        _ => handle_status_command(&client, format).await,
    }
}

/// One poll, one line on stdout. The exit code stays 0 even when the daemon
/// is unreachable; the idle indicator is the answer in that case.
async fn handle_status_command(client: &DictationStatusClient, format: Format) -> Result<()> {
    let state = client.poll().await;
    let line = format
        .render(&state)
        .context("Failed to render display state")?;
    println!("{line}");
    Ok(())
}

/// Send a toggle and print the daemon's reply. A daemon that cannot be
/// reached is an error here, unlike polling: whoever clicked needs to know.
async fn handle_toggle_command(client: &DictationStatusClient) -> Result<()> {
    match client.toggle().await {
        Ok(reply) => {
            println!("{reply}");
            Ok(())
        }
        Err(e) => {
            error!("Toggle failed: {e}");
            std::process::exit(1);
        }
    }
}
