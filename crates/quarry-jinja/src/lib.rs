//! dbt-compatible Jinja rendering
//!
//! This crate handles:
//! - Lookup tables for `var()`, `ref()` and `source()`
//! - The compatibility namespace of dbt builtins (env_var, log, config, exceptions, api, ...)
//! - Rendering templates with the namespace installed

pub mod context;
pub mod functions;
pub mod namespace;
pub mod renderer;

pub use context::{Lookups, LookupsBuilder};
pub use functions::{config, env_var, is_incremental, log, no_log};
pub use namespace::{Api, ApiHandle, CompatNamespace, CompilationError, Exceptions, LogMode};
pub use renderer::{RenderError, RenderResult, TemplateRenderer};
