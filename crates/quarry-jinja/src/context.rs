//! Lookup tables behind `var()`, `ref()` and `source()`
//!
//! A [`Lookups`] value is a snapshot: it owns its tables and offers no way to
//! change them once built. The namespace shares it between bindings behind an
//! `Arc`.

use std::collections::HashMap;

use quarry_core::RenderSettings;

/// Immutable variable, model and source tables for one render scope
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Lookups {
    vars: HashMap<String, serde_json::Value>,
    refs: HashMap<String, String>,
    sources: HashMap<String, String>,
}

impl Lookups {
    /// Snapshot the three tables
    pub fn new(
        vars: HashMap<String, serde_json::Value>,
        refs: HashMap<String, String>,
        sources: HashMap<String, String>,
    ) -> Self {
        Self { vars, refs, sources }
    }

    /// Build from the `[render]` section of the settings file
    pub fn from_settings(settings: &RenderSettings) -> Self {
        Self::new(
            settings.vars.clone(),
            settings.refs.clone(),
            settings.sources.clone(),
        )
    }

    pub fn builder() -> LookupsBuilder {
        LookupsBuilder::default()
    }

    /// Value of a project variable, or `default` when it is not defined
    pub fn var(
        &self,
        name: &str,
        default: Option<serde_json::Value>,
    ) -> Option<serde_json::Value> {
        self.vars.get(name).cloned().or(default)
    }

    /// Resolved identifier of a model
    ///
    /// With one argument, or an empty `name`, `package` is the model name.
    /// The package of the two-argument form is accepted but not used: models
    /// are looked up by name only.
    pub fn reference(&self, package: &str, name: Option<&str>) -> Option<&str> {
        let model = name.filter(|n| !n.is_empty()).unwrap_or(package);
        self.refs.get(model).map(String::as_str)
    }

    /// Resolved identifier of a source table, keyed by `"{package}.{name}"`
    pub fn source(&self, package: &str, name: &str) -> Option<&str> {
        self.sources
            .get(&format!("{}.{}", package, name))
            .map(String::as_str)
    }
}

/// Builder for Lookups
#[derive(Debug, Default)]
pub struct LookupsBuilder {
    lookups: Lookups,
}

impl LookupsBuilder {
    pub fn var(mut self, name: impl Into<String>, value: serde_json::Value) -> Self {
        self.lookups.vars.insert(name.into(), value);
        self
    }

    pub fn reference(mut self, model: impl Into<String>, identifier: impl Into<String>) -> Self {
        self.lookups.refs.insert(model.into(), identifier.into());
        self
    }

    /// Register a source under its "package.name" key
    pub fn source(
        mut self,
        package: &str,
        name: &str,
        identifier: impl Into<String>,
    ) -> Self {
        self.lookups
            .sources
            .insert(format!("{}.{}", package, name), identifier.into());
        self
    }

    pub fn build(self) -> Lookups {
        self.lookups
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn var_lookup_and_default() {
        let lookups = Lookups::builder().var("a", json!(1)).build();

        assert_eq!(lookups.var("a", None), Some(json!(1)));
        assert_eq!(lookups.var("a", Some(json!("ignored"))), Some(json!(1)));
        assert_eq!(Lookups::default().var("a", Some(json!("dflt"))), Some(json!("dflt")));
        assert_eq!(Lookups::default().var("a", None), None);
    }

    #[test]
    fn reference_by_model_name() {
        let lookups = Lookups::builder().reference("m", "db.m").build();

        assert_eq!(lookups.reference("m", None), Some("db.m"));
        assert_eq!(lookups.reference("some_package", Some("m")), Some("db.m"));
        assert_eq!(lookups.reference("missing", None), None);
        assert_eq!(lookups.reference("m", Some("")), Some("db.m"));
        assert_eq!(Lookups::default().reference("missing", None), None);
    }

    #[test]
    fn source_by_composite_key() {
        let lookups = Lookups::builder().source("pkg", "src", "db.src").build();

        assert_eq!(lookups.source("pkg", "src"), Some("db.src"));
        assert_eq!(lookups.source("src", "pkg"), None);
        assert_eq!(lookups.source("pkg", "other"), None);
    }

    #[test]
    fn snapshot_is_independent_of_settings() {
        let mut settings = RenderSettings::default();
        settings.vars.insert("a".to_string(), json!(1));

        let lookups = Lookups::from_settings(&settings);
        settings.vars.insert("a".to_string(), json!(2));

        assert_eq!(lookups.var("a", None), Some(json!(1)));
    }
}
