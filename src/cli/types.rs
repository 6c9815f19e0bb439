//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::commands::export::ExportArgs;
use super::commands::login_url::LoginUrlArgs;
use crate::domain::models::Profile;
use crate::infrastructure::logging::RotationPolicy;

/// Top-level command line
#[derive(Parser, Debug)]
#[command(name = "coffee-env")]
#[command(about = "Coffee shop client environment: inspect, validate and export", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to run
    #[command(subcommand)]
    pub command: Commands,

    /// Deployment profile (development, production)
    #[arg(short, long, global = true, env = "COFFEE_ENV_PROFILE", default_value = "development")]
    pub profile: Profile,

    /// Project root holding the .coffee/ override directory
    #[arg(short, long, global = true, default_value = ".")]
    pub root: PathBuf,

    /// Load a single override file instead of the layered sources
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Write JSON log files to this directory
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    /// Log file rotation (daily, hourly, never)
    #[arg(long, global = true, default_value = "daily")]
    pub log_rotation: RotationPolicy,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the resolved environment
    Show,

    /// Load and validate the environment
    Validate,

    /// Render the environment for the frontend bundle
    Export(ExportArgs),

    /// Print the Auth0 login link
    LoginUrl(LoginUrlArgs),
}
