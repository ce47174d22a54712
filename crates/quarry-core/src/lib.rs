//! Quarry Core
//!
//! Shared domain types: dialect registry, project templates, tool settings
//! and the configuration error taxonomy.

pub mod config;
pub mod dialect;
pub mod error;
pub mod template;

pub use config::{InitSettings, RenderSettings, Settings};
pub use dialect::SqlDialect;
pub use error::ConfigError;
pub use template::ProjectTemplate;
