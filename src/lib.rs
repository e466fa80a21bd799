//! # deploy-webhook
//!
//! Deploys the `whatsapp-webhook` Supabase edge function by shelling out to the
//! `supabase` CLI, then waits for the operator before exiting.

pub mod cli;
pub mod command;
pub mod config;
pub mod deployer;
pub mod error;
pub mod locate;
pub mod logging;
pub mod runner;

pub use config::DeployConfig;
pub use deployer::Deployer;
pub use error::{DeployError, DeployResult};
