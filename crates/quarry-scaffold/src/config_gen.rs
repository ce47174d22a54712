//! Project configuration generation
//!
//! Maps a (dialect, project template) pair to the text of the project
//! configuration. The output depends on nothing else.

use quarry_core::{ConfigError, ProjectTemplate};

use crate::connection::ConnectionTemplate;

/// Indentation of connection fields under `gateways.prod.connection`
const CONNECTION_INDENT: &str = "      ";

const DBT_BOOTSTRAP: &str = r#"from pathlib import Path

from quarry.dbt.loader import quarry_config

config = quarry_config(Path(__file__).parent)
"#;

const LOCAL_GATEWAY: &str = r#"  local:
    connection:
      type: duckdb
      database: db.db
"#;

const AIRFLOW_SCHEDULER: &str = r#"default_scheduler:
  type: airflow
  airflow_url: http://localhost:8080/
  username: airflow
  password: airflow
"#;

/// Pick the connection template for a dialect
///
/// `bigquery` resolves to the variant listing every BigQuery auth method
/// commented out; the method is chosen by editing the file.
pub fn resolve_connection(dialect: &str) -> Result<ConnectionTemplate, ConfigError> {
    if dialect == "bigquery" {
        return Ok(ConnectionTemplate::BigQueryChoose);
    }

    ConnectionTemplate::from_name(dialect)
}

/// Generate the configuration document for a new project
pub fn generate_config(
    dialect: Option<&str>,
    template: ProjectTemplate,
) -> Result<String, ConfigError> {
    if template == ProjectTemplate::Dbt {
        return Ok(DBT_BOOTSTRAP.to_string());
    }

    let dialect = dialect
        .filter(|d| !d.is_empty())
        .ok_or(ConfigError::MissingDialect)?;
    let connection = resolve_connection(dialect)?;

    let (default_gateway, scheduler) = match template {
        ProjectTemplate::Airflow => ("local", Some(AIRFLOW_SCHEDULER)),
        _ => ("prod", None),
    };

    let mut document = String::new();
    document.push_str("gateways:\n  prod:\n    connection:\n");
    document.push_str(&indent_snippet(connection.snippet(), CONNECTION_INDENT));
    document.push('\n');
    document.push_str(LOCAL_GATEWAY);
    document.push_str(&format!("\ndefault_gateway: {}\n\n", default_gateway));

    if let Some(scheduler) = scheduler {
        document.push_str(scheduler);
        document.push('\n');
    }

    document.push_str(&format!("model_defaults:\n  dialect: {}\n", dialect));

    Ok(document)
}

fn indent_snippet(snippet: &str, indent: &str) -> String {
    snippet
        .trim()
        .lines()
        .map(|line| {
            let line = line.trim_end();
            if line.is_empty() {
                String::new()
            } else {
                format!("{}{}", indent, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_duckdb_document() {
        let document = generate_config(Some("duckdb"), ProjectTemplate::Default).unwrap();
        let first_lines: Vec<&str> = document.lines().take(5).collect();

        assert_eq!(
            first_lines,
            vec![
                "gateways:",
                "  prod:",
                "    connection:",
                "      type: duckdb",
                "      #database: <The optional database name. If not specified, the in-memory database is used. Cannot be defined if using catalogs.>",
            ]
        );
        assert!(document.contains("\ndefault_gateway: prod\n"));
        assert!(document.ends_with("model_defaults:\n  dialect: duckdb\n"));
        assert!(!document.contains("default_scheduler"));
    }

    #[test]
    fn airflow_selects_local_and_adds_scheduler() {
        let document = generate_config(Some("snowflake"), ProjectTemplate::Airflow).unwrap();

        assert!(document.contains("\ndefault_gateway: local\n"));
        assert!(document.contains("default_scheduler:\n  type: airflow\n  airflow_url: http://localhost:8080/\n"));
        assert!(document.contains("  username: airflow\n  password: airflow\n"));
        assert!(document.contains("      account: <The Snowflake account name>\n"));
    }

    #[test]
    fn empty_matches_default() {
        for connection in ConnectionTemplate::ALL {
            let dialect = Some(connection.name());
            assert_eq!(
                generate_config(dialect, ProjectTemplate::Empty).unwrap(),
                generate_config(dialect, ProjectTemplate::Default).unwrap()
            );
        }
    }

    #[test]
    fn bigquery_uses_commented_methods() {
        let document = generate_config(Some("bigquery"), ProjectTemplate::Default).unwrap();

        assert!(document.contains("      # Please uncomment and configure one of the following four methods\n"));
        assert!(!document.contains("\n      type: bigquery\n"));
        assert_eq!(resolve_connection("bigquery").unwrap(), ConnectionTemplate::BigQueryChoose);
    }

    #[test]
    fn dbt_ignores_dialect() {
        let without = generate_config(None, ProjectTemplate::Dbt).unwrap();
        let with = generate_config(Some("not_a_real_dialect"), ProjectTemplate::Dbt).unwrap();

        assert_eq!(without, with);
        assert!(without.contains("config = quarry_config(Path(__file__).parent)"));
    }

    #[test]
    fn missing_dialect_fails() {
        assert_eq!(
            generate_config(None, ProjectTemplate::Default),
            Err(ConfigError::MissingDialect)
        );
        assert_eq!(
            generate_config(Some(""), ProjectTemplate::Airflow),
            Err(ConfigError::MissingDialect)
        );
    }

    #[test]
    fn unknown_connection_fails() {
        assert_eq!(
            generate_config(Some("not_a_real_dialect"), ProjectTemplate::Default),
            Err(ConfigError::UnknownConnection("not_a_real_dialect".to_string()))
        );
        // Recognized dialects without a connection template are rejected too
        assert!(generate_config(Some("sqlite"), ProjectTemplate::Default).is_err());
    }

    #[test]
    fn generation_is_deterministic() {
        for connection in ConnectionTemplate::ALL {
            for template in [ProjectTemplate::Default, ProjectTemplate::Airflow] {
                let first = generate_config(Some(connection.name()), template).unwrap();
                let second = generate_config(Some(connection.name()), template).unwrap();
                assert_eq!(first, second);
            }
        }
    }

    #[test]
    fn snippet_lines_are_aligned() {
        let document = generate_config(Some("postgres"), ProjectTemplate::Default).unwrap();
        let prod_block: Vec<&str> = document
            .lines()
            .skip(3)
            .take_while(|line| *line != "  local:")
            .collect();

        assert!(!prod_block.is_empty());
        for line in prod_block {
            assert!(line.starts_with(CONNECTION_INDENT), "misaligned line: {:?}", line);
        }
    }
}
