//! Client environment records.
//!
//! A [`ClientEnvironmentConfig`] is the set of values the coffee shop client
//! reads at startup: where the backend API lives and how to reach the Auth0
//! tenant. Records are plain data. Checking them is the job of
//! [`ConfigLoader::validate`](crate::infrastructure::config::ConfigLoader::validate).

use serde::{Deserialize, Deserializer, Serialize};
use std::sync::LazyLock;

use super::profile::Profile;

static DEVELOPMENT: LazyLock<ClientEnvironmentConfig> = LazyLock::new(|| ClientEnvironmentConfig {
    production: false,
    api_server_url: "http://127.0.0.1:5000".to_string(),
    auth0: Auth0Config::coffee_tenant("http://localhost:8100"),
});

static PRODUCTION: LazyLock<ClientEnvironmentConfig> = LazyLock::new(|| ClientEnvironmentConfig {
    production: true,
    api_server_url: String::new(),
    auth0: Auth0Config::coffee_tenant(""),
});

/// Environment configuration consumed by the client application
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ClientEnvironmentConfig {
    /// Whether this is the production deployment profile
    pub production: bool,

    /// Base address of the backend API server
    #[serde(deserialize_with = "string_like")]
    pub api_server_url: String,

    /// Identity provider settings
    pub auth0: Auth0Config,
}

impl ClientEnvironmentConfig {
    /// Built-in development record.
    pub fn development() -> &'static Self {
        &DEVELOPMENT
    }

    /// Built-in production baseline.
    ///
    /// Shares the Auth0 tenant with development but leaves `api_server_url`
    /// and `auth0.callback_url` empty; a deployment supplies them through an
    /// override file or `COFFEE_ENV_*` variables.
    pub fn production() -> &'static Self {
        &PRODUCTION
    }

    /// Built-in record for `profile`.
    pub fn for_profile(profile: Profile) -> &'static Self {
        match profile {
            Profile::Development => Self::development(),
            Profile::Production => Self::production(),
        }
    }
}

/// Auth0 identity provider settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Auth0Config {
    /// Tenant domain prefix, e.g. `dev-vccrnzts.us` for `dev-vccrnzts.us.auth0.com`
    #[serde(deserialize_with = "string_like")]
    pub url: String,

    /// API audience the issued tokens are intended for
    #[serde(deserialize_with = "string_like")]
    pub audience: String,

    /// Public client identifier registered with Auth0
    #[serde(deserialize_with = "string_like")]
    pub client_id: String,

    /// Address Auth0 redirects back to after login
    #[serde(deserialize_with = "string_like")]
    pub callback_url: String,
}

impl Auth0Config {
    fn coffee_tenant(callback_url: &str) -> Self {
        Self {
            url: "dev-vccrnzts.us".to_string(),
            audience: "coffee".to_string(),
            client_id: "lJ0mOD58ItQm2QmdwhCF6hIBFzQkkSv1".to_string(),
            callback_url: callback_url.to_string(),
        }
    }
}

/// Accept scalars typed loosely by a provider (env values such as `1234`
/// or `true`) and keep their text.
fn string_like<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Text(String),
        Unsigned(u64),
        Signed(i64),
        Float(f64),
        Bool(bool),
    }

    Ok(match Scalar::deserialize(deserializer)? {
        Scalar::Text(s) => s,
        Scalar::Unsigned(n) => n.to_string(),
        Scalar::Signed(n) => n.to_string(),
        Scalar::Float(n) => n.to_string(),
        Scalar::Bool(b) => b.to_string(),
    })
}
