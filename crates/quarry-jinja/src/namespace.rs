//! Compatibility namespace
//!
//! The fixed set of globals that lets dbt-style templates render: `var`,
//! `ref`, `source`, `env_var`, `log`, `config`, `is_incremental`, plus the
//! `exceptions` and `api` namespaces. A namespace is built right before a
//! render from that render's lookup tables and installed into the
//! environment; it is never shared global state.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use minijinja::value::{from_args, Enumerator, Kwargs, Object, ObjectRepr};
use minijinja::{Environment, Error, ErrorKind, State, Value};

use crate::context::Lookups;
use crate::functions;

/// Raised by `exceptions.raise_compiler_error()` to abort a render
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Compilation Error: {message}")]
pub struct CompilationError {
    pub message: String,
}

/// Which `log()` variant gets installed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogMode {
    /// Messages are dropped
    #[default]
    Quiet,

    /// Messages are emitted at info level
    Print,
}

/// The `exceptions` namespace
#[derive(Debug, Default)]
pub struct Exceptions;

impl Exceptions {
    const METHODS: &'static [&'static str] = &["raise_compiler_error", "warn"];

    fn raise_compiler_error(msg: String) -> Result<Value, Error> {
        let message = msg.clone();
        Err(Error::new(ErrorKind::InvalidOperation, msg).with_source(CompilationError { message }))
    }

    fn warn(msg: Value) -> String {
        tracing::warn!("{}", msg);
        String::new()
    }
}

impl Object for Exceptions {
    fn get_value(self: &Arc<Self>, key: &Value) -> Option<Value> {
        match key.as_str()? {
            "raise_compiler_error" => Some(Value::from_function(Self::raise_compiler_error)),
            "warn" => Some(Value::from_function(Self::warn)),
            _ => None,
        }
    }

    fn enumerate(self: &Arc<Self>) -> Enumerator {
        Enumerator::Str(Self::METHODS)
    }

    fn call_method(
        self: &Arc<Self>,
        _state: &State<'_, '_>,
        method: &str,
        args: &[Value],
    ) -> Result<Value, Error> {
        match method {
            "raise_compiler_error" => {
                let (msg,): (String,) = from_args(args)?;
                Self::raise_compiler_error(msg)
            }
            "warn" => {
                let (msg,): (Value,) = from_args(args)?;
                Ok(Value::from(Self::warn(msg)))
            }
            _ => Err(Error::from(ErrorKind::UnknownMethod)),
        }
    }
}

/// Opaque stand-in for one of the framework's adapter classes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiHandle {
    name: &'static str,
}

impl ApiHandle {
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl Object for ApiHandle {
    fn repr(self: &Arc<Self>) -> ObjectRepr {
        ObjectRepr::Plain
    }

    fn render(self: &Arc<Self>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// The `api` namespace: `api.Relation` and `api.Column`
#[derive(Debug, Default)]
pub struct Api;

impl Api {
    const HANDLES: &'static [&'static str] = &["Relation", "Column"];
}

impl Object for Api {
    fn get_value(self: &Arc<Self>, key: &Value) -> Option<Value> {
        let name = Self::HANDLES.iter().copied().find(|name| Some(*name) == key.as_str())?;
        Some(Value::from_object(ApiHandle { name }))
    }

    fn enumerate(self: &Arc<Self>) -> Enumerator {
        Enumerator::Str(Self::HANDLES)
    }
}

/// Name bindings injected into a template environment
#[derive(Debug, Clone)]
pub struct CompatNamespace {
    lookups: Arc<Lookups>,
    log_mode: LogMode,
}

impl CompatNamespace {
    /// Build a namespace over a snapshot of the given tables
    pub fn new(lookups: Lookups) -> Self {
        Self {
            lookups: Arc::new(lookups),
            log_mode: LogMode::default(),
        }
    }

    pub fn with_log_mode(mut self, log_mode: LogMode) -> Self {
        self.log_mode = log_mode;
        self
    }

    pub fn lookups(&self) -> &Lookups {
        &self.lookups
    }

    pub fn log_mode(&self) -> LogMode {
        self.log_mode
    }

    /// All bindings by global name
    pub fn bindings(&self) -> BTreeMap<&'static str, Value> {
        let mut bindings = BTreeMap::new();

        bindings.insert("env_var", Value::from_function(functions::env_var_function));
        bindings.insert("is_incremental", Value::from_function(functions::is_incremental));
        bindings.insert("config", Value::from_function(functions::config));
        bindings.insert(
            "log",
            match self.log_mode {
                LogMode::Quiet => Value::from_function(functions::no_log),
                LogMode::Print => Value::from_function(functions::log),
            },
        );
        bindings.insert("quarry", Value::from(true));
        bindings.insert("exceptions", Value::from_object(Exceptions));
        bindings.insert("api", Value::from_object(Api));

        let lookups = Arc::clone(&self.lookups);
        bindings.insert(
            "var",
            Value::from_function(
                move |name: String, default: Option<Value>, kwargs: Kwargs| -> Result<Value, Error> {
                    let default = positional_or_keyword(default, kwargs.get("default")?, "default")?;
                    kwargs.assert_all_used()?;

                    Ok(match lookups.var(&name, None) {
                        Some(value) => Value::from_serialize(&value),
                        None => default.unwrap_or_else(|| Value::from(())),
                    })
                },
            ),
        );

        let lookups = Arc::clone(&self.lookups);
        bindings.insert(
            "ref",
            Value::from_function(
                move |package: String, name: Option<String>, kwargs: Kwargs| -> Result<Value, Error> {
                    let name = positional_or_keyword(name, kwargs.get("name")?, "name")?;
                    kwargs.assert_all_used()?;

                    Ok(lookups
                        .reference(&package, name.as_deref())
                        .map(Value::from)
                        .unwrap_or_else(|| Value::from(())))
                },
            ),
        );

        let lookups = Arc::clone(&self.lookups);
        bindings.insert(
            "source",
            Value::from_function(move |package: String, name: String| -> Value {
                lookups
                    .source(&package, &name)
                    .map(Value::from)
                    .unwrap_or_else(|| Value::from(()))
            }),
        );

        bindings
    }

    /// Merge the bindings into an environment's globals
    pub fn install(&self, env: &mut Environment<'_>) {
        for (name, value) in self.bindings() {
            env.add_global(name, value);
        }
    }
}

/// Resolve an optional argument given either positionally or by keyword
pub(crate) fn positional_or_keyword<T>(
    positional: Option<T>,
    keyword: Option<T>,
    name: &str,
) -> Result<Option<T>, Error> {
    match (positional, keyword) {
        (Some(_), Some(_)) => Err(Error::new(
            ErrorKind::TooManyArguments,
            format!("got multiple values for argument '{}'", name),
        )),
        (positional, keyword) => Ok(positional.or(keyword)),
    }
}
