//! Implementation of the `coffee-env export` command.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use crate::cli::output::{output, CommandOutput};
use crate::cli::EnvironmentSource;
use crate::services::environment_export::{self, ExportFormat};

/// Arguments for `export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output format (json, ts)
    #[arg(short, long, default_value = "ts")]
    pub format: ExportFormat,

    /// Write to this file (or directory) instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Report of a file export
#[derive(Debug, Serialize)]
pub struct ExportOutput {
    /// Whether the file was written
    pub success: bool,
    /// File written
    pub path: PathBuf,
    /// Format name
    pub format: String,
}

impl CommandOutput for ExportOutput {
    fn to_human(&self) -> String {
        format!("Wrote {} environment to {}", self.format, self.path.display())
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Render the environment to stdout or a file
pub async fn execute(args: ExportArgs, source: &EnvironmentSource, json_mode: bool) -> Result<()> {
    let environment = source.load()?;

    match args.output {
        Some(path) => {
            let path = environment_export::output_path(&path, args.format);
            environment_export::write(&environment, args.format, &path).await?;
            output(
                &ExportOutput {
                    success: true,
                    path,
                    format: args.format.to_string(),
                },
                json_mode,
            );
        }
        // stdout carries the rendered document itself
        None => print!("{}", environment_export::render(&environment, args.format)?),
    }
    Ok(())
}
