//! Project initialization
//!
//! Writes the generated configuration and, depending on the template, the
//! standard folder layout and example artifacts. Everything that can fail
//! on user input is checked before the first write.

use std::path::{Path, PathBuf};

use quarry_core::{ConfigError, ProjectTemplate, SqlDialect};

use crate::config_gen::generate_config;
use crate::starter;

/// Folders created for every non-dbt project
pub const PROJECT_FOLDERS: [&str; 5] = ["audits", "macros", "models", "seeds", "tests"];

/// Files and folders created by [`init_project`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectLayout {
    /// The written configuration file
    pub config_path: PathBuf,

    /// Folders created (or reused) under the project root
    pub folders: Vec<PathBuf>,

    /// Every file written, including the configuration
    pub files: Vec<PathBuf>,
}

/// Errors raised while scaffolding a project
#[derive(Debug, thiserror::Error)]
pub enum ScaffoldError {
    #[error("Found an existing config in '{}'", .0.display())]
    ExistingConfig(PathBuf),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("IO error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Initialize a new project at `path`
pub fn init_project(
    path: &Path,
    dialect: Option<&str>,
    template: ProjectTemplate,
) -> Result<ProjectLayout, ScaffoldError> {
    let config_path = path.join(template.config_file_name());

    if config_path.exists() {
        return Err(ScaffoldError::ExistingConfig(config_path));
    }

    let dialect = dialect.filter(|d| !d.is_empty());
    if dialect.is_none() && template.requires_dialect() {
        return Err(ConfigError::MissingDialect.into());
    }

    if let Some(dialect) = dialect {
        SqlDialect::validate(dialect)?;
    }

    let document = generate_config(dialect, template)?;

    let mut layout = ProjectLayout {
        config_path: config_path.clone(),
        ..ProjectLayout::default()
    };

    create_dir(path)?;
    write_file(&mut layout, &config_path, &document)?;

    if !template.creates_folders() {
        return Ok(layout);
    }

    for folder in PROJECT_FOLDERS {
        let folder_path = path.join(folder);
        create_dir(&folder_path)?;
        write_file(&mut layout, &folder_path.join(".gitkeep"), "")?;
        layout.folders.push(folder_path);
    }

    if template.creates_examples() {
        write_examples(&mut layout, path)?;
    }

    tracing::debug!(
        "Initialized {} project at {} ({} files)",
        template,
        path.display(),
        layout.files.len()
    );

    Ok(layout)
}

fn write_examples(layout: &mut ProjectLayout, root: &Path) -> Result<(), ScaffoldError> {
    write_file(layout, &root.join("macros").join("__init__.py"), "")?;

    write_file(
        layout,
        &root
            .join("audits")
            .join(format!("{}.sql", starter::EXAMPLE_AUDIT_NAME)),
        starter::EXAMPLE_AUDIT,
    )?;

    for (model_name, model_def) in starter::EXAMPLE_MODELS {
        let file_stem = model_name.rsplit('.').next().unwrap_or(model_name);
        write_file(
            layout,
            &root.join("models").join(format!("{}.sql", file_stem)),
            model_def,
        )?;
    }

    write_file(
        layout,
        &root.join("seeds").join("seed_data.csv"),
        starter::EXAMPLE_SEED_DATA,
    )?;
    write_file(
        layout,
        &root.join("tests").join("test_full_model.yaml"),
        starter::EXAMPLE_TEST,
    )?;

    Ok(())
}

fn create_dir(path: &Path) -> Result<(), ScaffoldError> {
    std::fs::create_dir_all(path).map_err(|source| ScaffoldError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn write_file(layout: &mut ProjectLayout, path: &Path, contents: &str) -> Result<(), ScaffoldError> {
    std::fs::write(path, contents).map_err(|source| ScaffoldError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!("Wrote {}", path.display());
    layout.files.push(path.to_path_buf());
    Ok(())
}
