//! Errors raised while checking an environment record.

use thiserror::Error;

/// Configuration validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required field is empty or whitespace
    #[error("Required field cannot be empty: {0}")]
    EmptyField(&'static str),

    /// A URL field does not parse
    #[error("Invalid URL in {field}: '{value}' ({reason})")]
    InvalidUrl {
        /// Dotted field name
        field: &'static str,
        /// Value as given
        value: String,
        /// Parser message
        reason: String,
    },

    /// A URL field uses a scheme other than http or https
    #[error("Unsupported URL scheme in {field}: {scheme}. Must be one of: http, https")]
    UnsupportedScheme {
        /// Dotted field name
        field: &'static str,
        /// Scheme found
        scheme: String,
    },

    /// The `production` flag disagrees with the selected profile
    #[error("production flag is {production} but the selected profile is {profile}")]
    ProductionFlagMismatch {
        /// Selected profile
        profile: String,
        /// Flag found in the record
        production: bool,
    },

    /// A production URL points at a loopback host
    #[error("Production profile cannot point {field} at loopback host {host}")]
    LoopbackInProduction {
        /// Dotted field name
        field: &'static str,
        /// Offending host
        host: String,
    },

    /// The Auth0 prefix is not a bare host prefix
    #[error("Invalid Auth0 domain prefix: '{0}'. Expected a bare prefix such as 'dev-tenant.us'")]
    InvalidAuth0Prefix(String),
}

/// Result of validating an environment record
pub type ConfigResult<T> = Result<T, ConfigError>;
