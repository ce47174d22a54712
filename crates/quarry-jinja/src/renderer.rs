//! Template rendering with the compatibility namespace installed

use minijinja::{Environment, Error as JinjaError};
use quarry_core::ConfigError;
use std::path::{Path, PathBuf};

use crate::namespace::{CompatNamespace, CompilationError};

/// Result of rendering one template
#[derive(Debug, Clone)]
pub struct RenderResult {
    /// Template source
    pub original: String,

    /// Rendered text
    pub rendered: String,

    /// File path (if any)
    pub file_path: Option<PathBuf>,

    /// Whether any Jinja was detected and processed
    pub had_jinja: bool,
}

/// Error during rendering
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The template called `exceptions.raise_compiler_error()`
    #[error("{message}")]
    Compilation {
        message: String,
        file_path: Option<PathBuf>,
        line: Option<usize>,
    },

    /// A builtin failed on configuration state, e.g. a missing environment variable
    #[error(transparent)]
    Config(ConfigError),

    #[error("Jinja render error: {message}")]
    Render {
        message: String,
        file_path: Option<PathBuf>,
        line: Option<usize>,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Renders dbt-style templates against one compatibility namespace
pub struct TemplateRenderer {
    env: Environment<'static>,
}

impl TemplateRenderer {
    /// Create a renderer with the namespace's bindings installed as globals
    pub fn new(namespace: &CompatNamespace) -> Self {
        let mut env = Environment::new();
        namespace.install(&mut env);

        Self { env }
    }

    /// Check if text contains Jinja syntax
    pub fn has_jinja(source: &str) -> bool {
        source.contains("{{") || source.contains("{%") || source.contains("{#")
    }

    /// Render a template
    pub fn render(&self, source: &str, file_path: Option<&Path>) -> Result<RenderResult, RenderError> {
        let had_jinja = Self::has_jinja(source);

        let rendered = if had_jinja {
            self.env
                .render_str(source, minijinja::context! {})
                .map_err(|e| Self::classify_error(e, file_path))?
        } else {
            source.to_string()
        };

        Ok(RenderResult {
            original: source.to_string(),
            rendered,
            file_path: file_path.map(Path::to_path_buf),
            had_jinja,
        })
    }

    /// Render a template read from a file
    pub fn render_file(&self, path: &Path) -> Result<RenderResult, RenderError> {
        let source = std::fs::read_to_string(path)?;
        self.render(&source, Some(path))
    }

    /// Recover compilation aborts and configuration errors from the source chain
    fn classify_error(error: JinjaError, file_path: Option<&Path>) -> RenderError {
        let mut source = std::error::Error::source(&error);

        while let Some(err) = source {
            if let Some(compilation) = err.downcast_ref::<CompilationError>() {
                return RenderError::Compilation {
                    message: compilation.to_string(),
                    file_path: file_path.map(Path::to_path_buf),
                    line: error.line(),
                };
            }
            if let Some(config) = err.downcast_ref::<ConfigError>() {
                return RenderError::Config(config.clone());
            }
            source = err.source();
        }

        RenderError::Render {
            message: error.to_string(),
            file_path: file_path.map(Path::to_path_buf),
            line: error.line(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Lookups;

    fn renderer() -> TemplateRenderer {
        let lookups = Lookups::builder()
            .reference("orders", "analytics.orders")
            .build();
        TemplateRenderer::new(&CompatNamespace::new(lookups))
    }

    #[test]
    fn test_has_jinja() {
        assert!(TemplateRenderer::has_jinja("select * from {{ ref('table') }}"));
        assert!(TemplateRenderer::has_jinja("{% set x = 'value' %}"));
        assert!(TemplateRenderer::has_jinja("{# comment #}"));
        assert!(!TemplateRenderer::has_jinja("select * from table"));
    }

    #[test]
    fn test_no_jinja_passthrough() {
        let sql = "select * from table";
        let result = renderer().render(sql, None).unwrap();

        assert_eq!(result.original, sql);
        assert_eq!(result.rendered, sql);
        assert!(!result.had_jinja);
    }

    #[test]
    fn test_ref_resolves() {
        let result = renderer()
            .render("select * from {{ ref('orders') }}", Some(Path::new("models/x.sql")))
            .unwrap();

        assert!(result.had_jinja);
        assert_eq!(result.rendered, "select * from analytics.orders");
        assert_eq!(result.file_path, Some(PathBuf::from("models/x.sql")));
    }

    #[test]
    fn test_compiler_error_aborts() {
        let err = renderer()
            .render("{{ exceptions.raise_compiler_error('bad model') }}", None)
            .unwrap_err();

        match err {
            RenderError::Compilation { message, .. } => {
                assert_eq!(message, "Compilation Error: bad model");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_env_var_is_config_error() {
        let err = renderer()
            .render("{{ env_var('QUARRY_TEST_RENDERER_UNSET') }}", None)
            .unwrap_err();

        assert!(matches!(
            err,
            RenderError::Config(ConfigError::MissingEnvVar(name)) if name == "QUARRY_TEST_RENDERER_UNSET"
        ));
    }

    #[test]
    fn test_syntax_error_is_render_error() {
        let err = renderer().render("{{ ref('orders' }}", None).unwrap_err();
        assert!(matches!(err, RenderError::Render { .. }));
    }
}
