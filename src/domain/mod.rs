//! Domain layer: environment records, profiles and their errors.

pub mod errors;
pub mod models;

pub use errors::{ConfigError, ConfigResult};
