//! Project scaffolding
//!
//! This crate handles:
//! - Connection templates for every supported engine connection method
//! - Generating a project configuration from a dialect and project template
//! - Creating the project layout and example artifacts

pub mod config_gen;
pub mod connection;
pub mod project;
pub mod starter;

pub use config_gen::{generate_config, resolve_connection};
pub use connection::ConnectionTemplate;
pub use project::{init_project, ProjectLayout, ScaffoldError, PROJECT_FOLDERS};
