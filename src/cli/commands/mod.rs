//! CLI command implementations.

pub mod export;
pub mod login_url;
pub mod show;
pub mod validate;
