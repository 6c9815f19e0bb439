//! Implementation of the `coffee-env login-url` command.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::cli::output::{output, CommandOutput};
use crate::cli::EnvironmentSource;
use crate::services::auth_links;

/// Arguments for `login-url`
#[derive(Args, Debug)]
pub struct LoginUrlArgs {
    /// Path appended to the callback URL, e.g. /tabs/user-page
    #[arg(long, default_value = "")]
    pub path: String,
}

/// Generated authorize link
#[derive(Debug, Serialize)]
pub struct LoginUrlOutput {
    /// Full authorize URL
    pub url: String,
}

impl CommandOutput for LoginUrlOutput {
    fn to_human(&self) -> String {
        self.url.clone()
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Print the Auth0 login link
pub async fn execute(args: LoginUrlArgs, source: &EnvironmentSource, json_mode: bool) -> Result<()> {
    let environment = source.load()?;
    let url = auth_links::login_url(&environment, &args.path)?;
    output(&LoginUrlOutput { url: url.to_string() }, json_mode);
    Ok(())
}
