//! CLI entry point.
//!
//! Kept out of `main.rs` so the whole run is reachable from the library.

use crate::config::DeployConfig;
use crate::deployer::Deployer;
use crate::locate::ToolLocator;
use crate::logging;
use crate::runner::SystemRunner;
use clap::Parser as ClapParser;

const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// CLI arguments. There are none besides `--help` and `--version`: every
/// run performs the same deployment.
#[derive(ClapParser, Debug)]
#[command(name = "deploy-webhook")]
#[command(version = PKG_VERSION)]
#[command(
    about = "Deploy the whatsapp-webhook edge function with the Supabase CLI",
    long_about = None
)]
struct Cli {}

/// Parse arguments, deploy once and wait for the operator.
///
/// The outcome is only ever printed; the process exits successfully either
/// way once the operator has acknowledged it.
pub fn run_cli() {
    let _cli = Cli::parse();
    logging::init();

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut deployer = Deployer::new(
        DeployConfig::default(),
        ToolLocator::from_env(),
        SystemRunner,
        stdin.lock(),
        stdout.lock(),
    );

    match deployer.run() {
        Ok(()) => tracing::info!("deployment finished"),
        Err(e) => tracing::info!(error = %e, "deployment did not complete"),
    }
}
