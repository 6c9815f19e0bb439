//! Implementation of the `coffee-env show` command.

use anyhow::Result;
use serde::Serialize;

use crate::cli::output::{field_table, output, CommandOutput};
use crate::cli::EnvironmentSource;
use crate::domain::models::{ClientEnvironmentConfig, Profile};
use crate::services::environment_export;

/// Resolved environment for display
#[derive(Debug, Serialize)]
pub struct ShowOutput {
    /// Selected profile
    pub profile: Profile,
    /// Loaded record
    pub environment: ClientEnvironmentConfig,
}

impl CommandOutput for ShowOutput {
    fn to_human(&self) -> String {
        let env = &self.environment;
        let table = field_table([
            ("production", env.production.to_string()),
            ("apiServerUrl", env.api_server_url.clone()),
            ("auth0.url", env.auth0.url.clone()),
            ("auth0.audience", env.auth0.audience.clone()),
            ("auth0.clientId", env.auth0.client_id.clone()),
            ("auth0.callbackURL", env.auth0.callback_url.clone()),
        ]);
        format!("Profile: {}\n{table}", self.profile)
    }

    fn to_json(&self) -> serde_json::Value {
        environment_export::to_document(&self.environment).unwrap_or_default()
    }
}

/// Load the environment and print it
pub async fn execute(source: &EnvironmentSource, json_mode: bool) -> Result<()> {
    let environment = source.load()?;
    output(
        &ShowOutput {
            profile: source.profile,
            environment,
        },
        json_mode,
    );
    Ok(())
}
