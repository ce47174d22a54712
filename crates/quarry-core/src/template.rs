//! Project template variants

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Overall shape of a newly initialized project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectTemplate {
    /// Two gateways, `prod` selected, example artifacts
    #[default]
    Default,

    /// Like `Default` but selects `local` and declares an Airflow scheduler
    Airflow,

    /// Delegates to the dbt project loader; no dialect, no folders
    Dbt,

    /// Same configuration as `Default` without example artifacts
    Empty,
}

impl ProjectTemplate {
    pub const ALL: [ProjectTemplate; 4] = [Self::Default, Self::Airflow, Self::Dbt, Self::Empty];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Airflow => "airflow",
            Self::Dbt => "dbt",
            Self::Empty => "empty",
        }
    }

    /// Whether a default SQL dialect must be supplied
    pub fn requires_dialect(&self) -> bool {
        !matches!(self, Self::Dbt)
    }

    /// File name of the generated configuration
    pub fn config_file_name(&self) -> &'static str {
        match self {
            Self::Dbt => "config.py",
            _ => "config.yaml",
        }
    }

    /// Whether the project directory layout is created
    pub fn creates_folders(&self) -> bool {
        !matches!(self, Self::Dbt)
    }

    /// Whether example models, audits, seeds and tests are written
    pub fn creates_examples(&self) -> bool {
        matches!(self, Self::Default | Self::Airflow)
    }
}

impl FromStr for ProjectTemplate {
    type Err = ConfigError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|template| template.as_str() == name)
            .ok_or_else(|| ConfigError::UnknownTemplate(name.to_string()))
    }
}

impl fmt::Display for ProjectTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_template_names() {
        assert_eq!("airflow".parse::<ProjectTemplate>().unwrap(), ProjectTemplate::Airflow);
        assert_eq!("dbt".parse::<ProjectTemplate>().unwrap(), ProjectTemplate::Dbt);
        assert!(matches!(
            "Airflow".parse::<ProjectTemplate>(),
            Err(ConfigError::UnknownTemplate(_))
        ));
    }

    #[test]
    fn only_dbt_skips_dialect() {
        for template in ProjectTemplate::ALL {
            assert_eq!(template.requires_dialect(), template != ProjectTemplate::Dbt);
        }
    }

    #[test]
    fn artifact_rules() {
        assert_eq!(ProjectTemplate::Dbt.config_file_name(), "config.py");
        assert_eq!(ProjectTemplate::Empty.config_file_name(), "config.yaml");
        assert!(ProjectTemplate::Empty.creates_folders());
        assert!(!ProjectTemplate::Empty.creates_examples());
        assert!(!ProjectTemplate::Dbt.creates_folders());
        assert!(ProjectTemplate::Airflow.creates_examples());
    }
}
