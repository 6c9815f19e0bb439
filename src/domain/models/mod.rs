//! Domain models

pub mod environment;
pub mod profile;

pub use environment::{Auth0Config, ClientEnvironmentConfig};
pub use profile::Profile;
