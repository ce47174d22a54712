use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use quarry_core::{ProjectTemplate, Settings};
use quarry_jinja::{CompatNamespace, LogMode, Lookups, TemplateRenderer};
use quarry_scaffold::init_project;

/// Quarry - SQL transformation project tooling
#[derive(Parser)]
#[command(name = "quarry")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to settings file (default: quarry.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new project with a starter configuration
    Init {
        /// Project directory
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Default SQL dialect (also selects the connection template)
        #[arg(short, long)]
        dialect: Option<String>,

        /// Project template: default, airflow, dbt or empty
        #[arg(short, long)]
        template: Option<ProjectTemplate>,
    },

    /// Render a dbt-style template to stdout
    Render {
        /// Template file
        file: PathBuf,

        /// Override a variable (key=value, value parsed as JSON when possible)
        #[arg(long = "var", value_name = "KEY=VALUE")]
        vars: Vec<String>,
    },
}

fn main() -> Result<()> {
    // Load .env before anything reads the environment
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let default_level = if cli.verbose { "info" } else { "warn" };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    let settings = if let Some(config_path) = &cli.config {
        Settings::from_file(config_path)?
    } else if Path::new("quarry.toml").exists() {
        Settings::from_file(Path::new("quarry.toml"))?
    } else {
        if cli.verbose {
            eprintln!("{}", "No settings file found, using defaults".yellow());
        }
        Settings::default()
    };

    match cli.command {
        Commands::Init { path, dialect, template } => {
            init_command(&settings, &path, dialect, template, cli.verbose)
        }
        Commands::Render { file, vars } => render_command(&settings, &file, &vars, cli.verbose),
    }
}

/// Init command - write configuration and example project files
fn init_command(
    settings: &Settings,
    path: &Path,
    dialect: Option<String>,
    template: Option<ProjectTemplate>,
    verbose: bool,
) -> Result<()> {
    let dialect = dialect.or_else(|| settings.init.dialect.clone());
    let template = template.unwrap_or(settings.init.template);

    if verbose {
        eprintln!(
            "{} {} project in {}",
            "Initializing".cyan(),
            template,
            path.display()
        );
    }

    let layout = init_project(path, dialect.as_deref(), template)?;

    eprintln!("{} {}", "✓ Wrote config:".green(), layout.config_path.display());
    if verbose {
        for file in layout.files.iter().filter(|f| **f != layout.config_path) {
            eprintln!("  {}", file.display());
        }
    }
    if !template.creates_examples() && template.creates_folders() {
        eprintln!("{}", "Created empty project layout (no examples)".yellow());
    }

    Ok(())
}

/// Render command - render a template with the compatibility namespace
fn render_command(settings: &Settings, file: &Path, overrides: &[String], verbose: bool) -> Result<()> {
    let mut render_settings = settings.render.clone();
    for assignment in overrides {
        let (key, value) = parse_var(assignment)?;
        render_settings.vars.insert(key, value);
    }

    let log_mode = if render_settings.print_log {
        LogMode::Print
    } else {
        LogMode::Quiet
    };
    let namespace = CompatNamespace::new(Lookups::from_settings(&render_settings)).with_log_mode(log_mode);
    let renderer = TemplateRenderer::new(&namespace);

    if verbose {
        eprintln!("{} {}", "Rendering".cyan(), file.display());
    }

    let result = renderer
        .render_file(file)
        .with_context(|| format!("Failed to render {}", file.display()))?;

    println!("{}", result.rendered);

    Ok(())
}

/// Parse a `key=value` override
fn parse_var(assignment: &str) -> Result<(String, serde_json::Value)> {
    let (key, raw) = assignment
        .split_once('=')
        .ok_or_else(|| anyhow::anyhow!("Invalid --var '{}': expected KEY=VALUE", assignment))?;

    let key = key.trim();
    if key.is_empty() {
        return Err(anyhow::anyhow!("Invalid --var '{}': empty key", assignment));
    }

    let value = serde_json::from_str(raw)
        .unwrap_or_else(|_| serde_json::Value::String(raw.to_string()));

    Ok((key.to_string(), value))
}
