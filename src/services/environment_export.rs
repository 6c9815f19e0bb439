//! Renders an environment record in the shape the frontend bundle reads.
//!
//! The client expects camelCase keys (`apiServerUrl`, `clientId`) and the
//! irregular `callbackURL`, so rendering goes through a borrowed document
//! type instead of the snake_case record used for loading.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tokio::fs;
use tracing::info;

use crate::domain::models::ClientEnvironmentConfig;

/// Output format for an exported environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// Plain JSON document
    Json,
    /// `export const environment = ...;` module
    #[default]
    TypeScript,
}

impl ExportFormat {
    /// Conventional file name for this format
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Json => "environment.json",
            Self::TypeScript => "environment.ts",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Json => "json",
            Self::TypeScript => "ts",
        })
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "ts" | "typescript" => Ok(Self::TypeScript),
            other => Err(format!("Unknown export format: {other}. Must be one of: json, ts")),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EnvironmentDocument<'a> {
    production: bool,
    api_server_url: &'a str,
    auth0: Auth0Document<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Auth0Document<'a> {
    url: &'a str,
    audience: &'a str,
    client_id: &'a str,
    #[serde(rename = "callbackURL")]
    callback_url: &'a str,
}

impl<'a> From<&'a ClientEnvironmentConfig> for EnvironmentDocument<'a> {
    fn from(config: &'a ClientEnvironmentConfig) -> Self {
        Self {
            production: config.production,
            api_server_url: &config.api_server_url,
            auth0: Auth0Document {
                url: &config.auth0.url,
                audience: &config.auth0.audience,
                client_id: &config.auth0.client_id,
                callback_url: &config.auth0.callback_url,
            },
        }
    }
}

/// The record as a JSON value in the frontend shape
pub fn to_document(config: &ClientEnvironmentConfig) -> Result<serde_json::Value> {
    serde_json::to_value(EnvironmentDocument::from(config))
        .context("Failed to serialize environment document")
}

/// Render the record in `format`
pub fn render(config: &ClientEnvironmentConfig, format: ExportFormat) -> Result<String> {
    let body = serde_json::to_string_pretty(&EnvironmentDocument::from(config))
        .context("Failed to serialize environment document")?;

    Ok(match format {
        ExportFormat::Json => format!("{body}\n"),
        ExportFormat::TypeScript => format!("export const environment = {body};\n"),
    })
}

/// Target file for `path`: an existing directory gets the format's
/// conventional file name
pub fn output_path(path: impl AsRef<Path>, format: ExportFormat) -> PathBuf {
    let path = path.as_ref();
    if path.is_dir() {
        path.join(format.file_name())
    } else {
        path.to_path_buf()
    }
}

/// Render the record and write it to `path`, creating parent directories
pub async fn write(
    config: &ClientEnvironmentConfig,
    format: ExportFormat,
    path: impl AsRef<Path>,
) -> Result<()> {
    let path = path.as_ref();
    let rendered = render(config, format)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(path, rendered)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;

    info!(path = %path.display(), format = %format, "environment exported");
    Ok(())
}
