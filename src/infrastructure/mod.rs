//! Infrastructure layer module
//!
//! - Environment loading and validation
//! - Logging infrastructure

pub mod config;
pub mod logging;
