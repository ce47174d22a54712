//! Configuration error taxonomy
//!
//! Every failure that happens while turning user choices into a project
//! configuration, or while reading configuration-like state at render time,
//! is a [`ConfigError`]. Callers abort on these; nothing retries.

use std::path::PathBuf;

/// Config error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error reading {path}: {message}")]
    IoError { path: PathBuf, message: String },

    #[error("Parse error: {0}")]
    ParseError(String),

    /// The name is not a recognized SQL dialect
    #[error("Unknown SQL dialect '{0}'")]
    UnknownDialect(String),

    /// The name does not match any connection template variant
    #[error("Unrecognized connection variant '{0}'")]
    UnknownConnection(String),

    #[error("Unknown project template '{0}' (supported: default, airflow, dbt, empty)")]
    UnknownTemplate(String),

    /// A dialect is required by the selected project template but none was given
    #[error("Default SQL dialect is a required argument for quarry projects")]
    MissingDialect,

    #[error("Missing environment variable '{0}'")]
    MissingEnvVar(String),
}
