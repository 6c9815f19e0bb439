//! Implementation of the `coffee-env validate` command.

use anyhow::{Context, Result};
use console::style;
use serde::Serialize;

use crate::cli::output::{output, CommandOutput};
use crate::cli::EnvironmentSource;
use crate::domain::models::Profile;
use crate::services::auth_links;

/// Summary of a valid environment
#[derive(Debug, Serialize)]
pub struct ValidateOutput {
    /// Always true; failures are reported as errors
    pub success: bool,
    /// Selected profile
    pub profile: Profile,
    /// Backend API address
    pub api_server_url: String,
    /// Expected token issuer
    pub issuer: String,
    /// Tenant key set
    pub jwks_url: String,
}

impl CommandOutput for ValidateOutput {
    fn to_human(&self) -> String {
        [
            format!("{} {} environment", style("valid").green().bold(), self.profile),
            format!("  api server: {}", self.api_server_url),
            format!("  issuer:     {}", self.issuer),
            format!("  jwks:       {}", self.jwks_url),
        ]
        .join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Load and validate the environment
pub async fn execute(source: &EnvironmentSource, json_mode: bool) -> Result<()> {
    let environment = source
        .load()
        .with_context(|| format!("The {} environment is invalid", source.profile))?;

    let output_data = ValidateOutput {
        success: true,
        profile: source.profile,
        api_server_url: environment.api_server_url.clone(),
        issuer: auth_links::issuer(&environment.auth0),
        jwks_url: auth_links::jwks_url(&environment.auth0)?.to_string(),
    };
    output(&output_data, json_mode);
    Ok(())
}
