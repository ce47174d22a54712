//! SQL dialect registry
//!
//! The set of dialect names a project may declare as its model default.
//! Names are matched exactly; there is no case folding.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Recognized SQL dialects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SqlDialect {
    Athena,
    BigQuery,
    ClickHouse,
    Databricks,
    Doris,
    Drill,
    DuckDb,
    Hive,
    Materialize,
    MySql,
    Oracle,
    Postgres,
    Presto,
    Prql,
    Redshift,
    RisingWave,
    Snowflake,
    Spark,
    Spark2,
    Sqlite,
    StarRocks,
    Tableau,
    Teradata,
    Trino,
    Tsql,
}

impl SqlDialect {
    pub const ALL: [SqlDialect; 25] = [
        Self::Athena,
        Self::BigQuery,
        Self::ClickHouse,
        Self::Databricks,
        Self::Doris,
        Self::Drill,
        Self::DuckDb,
        Self::Hive,
        Self::Materialize,
        Self::MySql,
        Self::Oracle,
        Self::Postgres,
        Self::Presto,
        Self::Prql,
        Self::Redshift,
        Self::RisingWave,
        Self::Snowflake,
        Self::Spark,
        Self::Spark2,
        Self::Sqlite,
        Self::StarRocks,
        Self::Tableau,
        Self::Teradata,
        Self::Trino,
        Self::Tsql,
    ];

    /// Canonical dialect name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Athena => "athena",
            Self::BigQuery => "bigquery",
            Self::ClickHouse => "clickhouse",
            Self::Databricks => "databricks",
            Self::Doris => "doris",
            Self::Drill => "drill",
            Self::DuckDb => "duckdb",
            Self::Hive => "hive",
            Self::Materialize => "materialize",
            Self::MySql => "mysql",
            Self::Oracle => "oracle",
            Self::Postgres => "postgres",
            Self::Presto => "presto",
            Self::Prql => "prql",
            Self::Redshift => "redshift",
            Self::RisingWave => "risingwave",
            Self::Snowflake => "snowflake",
            Self::Spark => "spark",
            Self::Spark2 => "spark2",
            Self::Sqlite => "sqlite",
            Self::StarRocks => "starrocks",
            Self::Tableau => "tableau",
            Self::Teradata => "teradata",
            Self::Trino => "trino",
            Self::Tsql => "tsql",
        }
    }

    /// Check that `name` is a recognized dialect without keeping the value
    pub fn validate(name: &str) -> Result<(), ConfigError> {
        name.parse::<SqlDialect>().map(|_| ())
    }
}

impl FromStr for SqlDialect {
    type Err = ConfigError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        // mssql and motherduck connections run on the tsql and duckdb dialects
        match name {
            "mssql" => return Ok(Self::Tsql),
            "motherduck" => return Ok(Self::DuckDb),
            _ => {}
        }

        Self::ALL
            .iter()
            .copied()
            .find(|dialect| dialect.as_str() == name)
            .ok_or_else(|| ConfigError::UnknownDialect(name.to_string()))
    }
}

impl fmt::Display for SqlDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_names_roundtrip() {
        for dialect in SqlDialect::ALL {
            assert_eq!(dialect.as_str().parse::<SqlDialect>().unwrap(), dialect);
        }
    }

    #[test]
    fn connection_aliases() {
        assert_eq!("mssql".parse::<SqlDialect>().unwrap(), SqlDialect::Tsql);
        assert_eq!("motherduck".parse::<SqlDialect>().unwrap(), SqlDialect::DuckDb);
    }

    #[test]
    fn bigquery_connection_names_are_not_dialects() {
        assert_eq!("bigquery".parse::<SqlDialect>().unwrap(), SqlDialect::BigQuery);
        assert_eq!(
            SqlDialect::validate("bigquery_oauth"),
            Err(ConfigError::UnknownDialect("bigquery_oauth".to_string()))
        );
        assert!(SqlDialect::validate("bigquery_service_account_json").is_err());
    }

    #[test]
    fn matching_is_exact() {
        assert_eq!(
            SqlDialect::validate("DuckDB"),
            Err(ConfigError::UnknownDialect("DuckDB".to_string()))
        );
        assert!(SqlDialect::validate("duck").is_err());
        assert!(SqlDialect::validate("").is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&SqlDialect::BigQuery).unwrap();
        assert_eq!(json, "\"bigquery\"");
    }
}
