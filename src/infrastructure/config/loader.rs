//! Layered loading and validation of environment records.

use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use std::path::Path;
use tracing::debug;
use url::{Host, Url};

use crate::domain::errors::{ConfigError, ConfigResult};
use crate::domain::models::{ClientEnvironmentConfig, Profile};

/// Directory, relative to the project root, holding override files
pub const CONFIG_DIR: &str = ".coffee";

/// Prefix for environment variable overrides
pub const ENV_PREFIX: &str = "COFFEE_ENV_";

/// Environment loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load the environment for `profile` rooted at the current directory
    ///
    /// Precedence (lowest to highest):
    /// 1. Built-in record for the profile (Serialized)
    /// 2. .coffee/environment.yaml (shared overrides)
    /// 3. .coffee/environment.<profile>.yaml (profile overrides)
    /// 4. Environment variables (COFFEE_ENV_* prefix, `__` for nesting)
    pub fn load(profile: Profile) -> Result<ClientEnvironmentConfig> {
        Self::load_from_dir(".", profile)
    }

    /// Load the environment for `profile` with override files under `root`
    pub fn load_from_dir(
        root: impl AsRef<Path>,
        profile: Profile,
    ) -> Result<ClientEnvironmentConfig> {
        let config_dir = root.as_ref().join(CONFIG_DIR);
        let config: ClientEnvironmentConfig = Self::defaults(profile)
            .merge(Yaml::file(config_dir.join("environment.yaml")))
            .merge(Yaml::file(
                config_dir.join(format!("environment.{}.yaml", profile.as_str())),
            ))
            .merge(
                Env::prefixed(ENV_PREFIX)
                    .ignore(&["PROFILE"])
                    .split("__"),
            )
            .extract()
            .context("Failed to extract environment from figment")?;

        Self::validate(&config, profile)?;
        debug!(
            profile = %profile,
            api_server_url = %config.api_server_url,
            "environment loaded"
        );
        Ok(config)
    }

    /// Load the environment for `profile` from a single file, without
    /// environment variable overrides
    pub fn load_from_file(
        path: impl AsRef<Path>,
        profile: Profile,
    ) -> Result<ClientEnvironmentConfig> {
        let config: ClientEnvironmentConfig = Self::defaults(profile)
            .merge(Yaml::file(path.as_ref()))
            .extract()
            .context(format!(
                "Failed to load environment from {}",
                path.as_ref().display()
            ))?;

        Self::validate(&config, profile)?;
        debug!(profile = %profile, path = %path.as_ref().display(), "environment loaded from file");
        Ok(config)
    }

    /// Validate an environment record against the selected profile
    pub fn validate(config: &ClientEnvironmentConfig, profile: Profile) -> ConfigResult<()> {
        if config.production != profile.is_production() {
            return Err(ConfigError::ProductionFlagMismatch {
                profile: profile.to_string(),
                production: config.production,
            });
        }

        require_non_empty("api_server_url", &config.api_server_url)?;
        require_non_empty("auth0.url", &config.auth0.url)?;
        require_non_empty("auth0.audience", &config.auth0.audience)?;
        require_non_empty("auth0.client_id", &config.auth0.client_id)?;
        require_non_empty("auth0.callback_url", &config.auth0.callback_url)?;

        validate_auth0_prefix(&config.auth0.url)?;

        let api_server_url = parse_http_url("api_server_url", &config.api_server_url)?;
        let callback_url = parse_http_url("auth0.callback_url", &config.auth0.callback_url)?;

        if profile.is_production() {
            reject_loopback("api_server_url", &api_server_url)?;
            reject_loopback("auth0.callback_url", &callback_url)?;
        }

        Ok(())
    }

    fn defaults(profile: Profile) -> Figment {
        Figment::new().merge(Serialized::defaults(
            ClientEnvironmentConfig::for_profile(profile).clone(),
        ))
    }
}

fn require_non_empty(field: &'static str, value: &str) -> ConfigResult<()> {
    if value.trim().is_empty() {
        return Err(ConfigError::EmptyField(field));
    }
    Ok(())
}

fn validate_auth0_prefix(prefix: &str) -> ConfigResult<()> {
    let well_formed = prefix
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.')
        && !prefix.starts_with('.')
        && !prefix.ends_with('.');

    if well_formed {
        Ok(())
    } else {
        Err(ConfigError::InvalidAuth0Prefix(prefix.to_string()))
    }
}

fn parse_http_url(field: &'static str, value: &str) -> ConfigResult<Url> {
    let url = Url::parse(value).map_err(|e| ConfigError::InvalidUrl {
        field,
        value: value.to_string(),
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::UnsupportedScheme {
            field,
            scheme: other.to_string(),
        }),
    }
}

fn reject_loopback(field: &'static str, url: &Url) -> ConfigResult<()> {
    let loopback = match url.host() {
        Some(Host::Domain(domain)) => domain == "localhost" || domain.ends_with(".localhost"),
        Some(Host::Ipv4(ip)) => ip.is_loopback() || ip.is_unspecified(),
        Some(Host::Ipv6(ip)) => ip.is_loopback() || ip.is_unspecified(),
        None => false,
    };

    if loopback {
        return Err(ConfigError::LoopbackInProduction {
            field,
            host: url.host_str().unwrap_or_default().to_string(),
        });
    }
    Ok(())
}
