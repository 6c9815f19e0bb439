//! coffee-env - client environment configuration for the coffee shop app
//!
//! The client needs a handful of values at startup: the backend API address
//! and the Auth0 tenant settings used to log users in. This crate holds those
//! values as typed records per deployment profile, layers overrides on top of
//! them, validates the result and renders it for the frontend bundle.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): environment records, profiles, errors
//! - **Service Layer** (`services`): export rendering and Auth0 links
//! - **Infrastructure Layer** (`infrastructure`): figment loading, logging
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```no_run
//! use coffee_env::{ConfigLoader, Profile};
//!
//! let env = ConfigLoader::load(Profile::Development)?;
//! println!("API at {}", env.api_server_url);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::errors::ConfigError;
pub use domain::models::{Auth0Config, ClientEnvironmentConfig, Profile};
pub use infrastructure::config::ConfigLoader;
pub use services::ExportFormat;
