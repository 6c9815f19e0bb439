//! Configuration management infrastructure
//!
//! Hierarchical environment loading using figment:
//! - Built-in profile records as defaults
//! - YAML override files
//! - Environment variable overrides
//! - Validation of the merged record

pub mod loader;

pub use loader::{ConfigLoader, CONFIG_DIR, ENV_PREFIX};
