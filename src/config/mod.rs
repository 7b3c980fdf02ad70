//! Configuration loading.
//!
//! The file is optional; every field has a default so a fresh install talks
//! to a service on `localhost:8000`.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, LoggingConfig, ServiceConfig, UiConfig};
