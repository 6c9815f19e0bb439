//! Command-line interface.

pub mod commands;
pub mod output;
pub mod types;

use anyhow::Result;
use console::style;

pub use types::{Cli, Commands};

use crate::domain::models::{ClientEnvironmentConfig, Profile};
use crate::infrastructure::config::ConfigLoader;
use std::path::PathBuf;

/// Where a command reads its environment from
#[derive(Debug, Clone)]
pub struct EnvironmentSource {
    /// Selected deployment profile
    pub profile: Profile,
    /// Project root holding `.coffee/`
    pub root: PathBuf,
    /// Single override file replacing the layered sources
    pub config: Option<PathBuf>,
}

impl EnvironmentSource {
    /// Source described by the global CLI options
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            profile: cli.profile,
            root: cli.root.clone(),
            config: cli.config.clone(),
        }
    }

    /// Load and validate the environment
    pub fn load(&self) -> Result<ClientEnvironmentConfig> {
        match self.config {
            Some(ref path) => ConfigLoader::load_from_file(path, self.profile),
            None => ConfigLoader::load_from_dir(&self.root, self.profile),
        }
    }
}

/// Report a failed command and exit with status 1
pub fn handle_error(err: anyhow::Error, json_mode: bool) -> ! {
    tracing::debug!(error = ?err, "command failed");
    if json_mode {
        let chain: Vec<String> = err.chain().map(ToString::to_string).collect();
        let body = serde_json::json!({ "success": false, "error": err.to_string(), "causes": chain });
        eprintln!("{}", serde_json::to_string_pretty(&body).unwrap_or_default());
    } else {
        eprintln!("{} {err:#}", style("error:").red().bold());
    }
    std::process::exit(1);
}
