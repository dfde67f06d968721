#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod cli;

use std::process;

use anyhow::Context;
use azbuilder_config::AppConfig;

use crate::cli::Cli;

// Tracing target constants
pub const TRACING_TARGET_STARTUP: &str = "azbuilder_cli::startup";
pub const TRACING_TARGET_CONFIG: &str = "azbuilder_cli::config";

fn main() {
    let Err(error) = run() else {
        process::exit(0);
    };

    if tracing::enabled!(tracing::Level::ERROR) {
        tracing::error!(
            target: TRACING_TARGET_STARTUP,
            error = %error,
            "configuration check failed"
        );
    } else {
        eprintln!("Error: {error:#}");
    }

    process::exit(1);
}

/// Main application entry point.
fn run() -> anyhow::Result<()> {
    let cli = Cli::init();

    Cli::init_tracing();
    log_startup_info();
    cli.log();

    let source = cli.property_source();
    let profile = cli.active_profile();

    let config = AppConfig::load(&source, &profile).with_context(|| {
        format!(
            "failed to load configuration from {}",
            source.dir().display()
        )
    })?;
    config.log();

    if cli.json {
        let rendered = serde_json::to_string_pretty(&config.redacted())
            .context("failed to render configuration as JSON")?;
        println!("{rendered}");
    }

    Ok(())
}

/// Logs startup information.
fn log_startup_info() {
    tracing::debug!(
        target: TRACING_TARGET_STARTUP,
        version = env!("CARGO_PKG_VERSION"),
        pid = process::id(),
        arch = std::env::consts::ARCH,
        os = std::env::consts::OS,
        "build information"
    );
}
