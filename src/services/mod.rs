//! Services built on top of a loaded environment record

pub mod auth_links;
pub mod environment_export;

pub use environment_export::ExportFormat;
