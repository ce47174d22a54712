//! dbt-compatible Jinja builtins
//!
//! The free functions installed into every compatibility namespace. None of
//! them capture render state: `env_var` reads the process environment on
//! each call, the rest are constant.

use minijinja::value::{Kwargs, Rest};
use minijinja::{Error, ErrorKind, Value};
use quarry_core::ConfigError;

use crate::namespace::positional_or_keyword;

/// Look up a process environment variable
///
/// A `none` default counts as no default.
pub fn env_var(name: &str, default: Option<Value>) -> Result<Value, ConfigError> {
    match std::env::var_os(name) {
        Some(value) => Ok(Value::from(value.to_string_lossy().into_owned())),
        None => default
            .filter(|value| !value.is_none() && !value.is_undefined())
            .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string())),
    }
}

/// env_var() function
///
/// Usage in Jinja: {{ env_var('DB_USER') }} or {{ env_var('DB_USER', default='admin') }}
pub fn env_var_function(name: String, default: Option<Value>, kwargs: Kwargs) -> Result<Value, Error> {
    let default = positional_or_keyword(default, kwargs.get("default")?, "default")?;
    kwargs.assert_all_used()?;

    env_var(&name, default).map_err(config_error)
}

/// is_incremental() function - rendering never happens inside an incremental run
pub fn is_incremental() -> bool {
    false
}

/// log() function that prints the message
pub fn log(msg: Value, _info: Rest<Value>) -> String {
    tracing::info!("{}", msg);
    String::new()
}

/// log() function that drops the message
pub fn no_log(_msg: Value, _info: Rest<Value>) -> String {
    String::new()
}

/// config() function
///
/// Usage in Jinja: {{ config(materialized='table') }}
/// Accepts any arguments and renders nothing.
pub fn config(_args: Rest<Value>) -> String {
    String::new()
}

/// Wrap a configuration error so renderers can recover it from the source chain
pub(crate) fn config_error(err: ConfigError) -> Error {
    Error::new(ErrorKind::InvalidOperation, err.to_string()).with_source(err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_var_set() {
        std::env::set_var("QUARRY_TEST_ENV_VAR_SET", "1");
        let value = env_var("QUARRY_TEST_ENV_VAR_SET", None).unwrap();
        assert_eq!(value.as_str(), Some("1"));

        // The environment wins over the default
        let value = env_var("QUARRY_TEST_ENV_VAR_SET", Some(Value::from("fallback"))).unwrap();
        assert_eq!(value.as_str(), Some("1"));
    }

    #[test]
    fn env_var_unset_with_default() {
        let value = env_var("QUARRY_TEST_ENV_VAR_UNSET_DEFAULT", Some(Value::from("fallback"))).unwrap();
        assert_eq!(value.as_str(), Some("fallback"));
    }

    #[test]
    fn env_var_unset_without_default() {
        assert_eq!(
            env_var("QUARRY_TEST_ENV_VAR_UNSET", None),
            Err(ConfigError::MissingEnvVar("QUARRY_TEST_ENV_VAR_UNSET".to_string()))
        );
        assert!(env_var("QUARRY_TEST_ENV_VAR_UNSET", Some(Value::from(()))).is_err());
    }

    #[test]
    fn env_var_is_reread() {
        let name = "QUARRY_TEST_ENV_VAR_REREAD";
        std::env::set_var(name, "first");
        assert_eq!(env_var(name, None).unwrap().as_str(), Some("first"));

        std::env::set_var(name, "second");
        assert_eq!(env_var(name, None).unwrap().as_str(), Some("second"));

        std::env::remove_var(name);
        assert!(env_var(name, None).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn env_var_non_utf8_is_set() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let name = "QUARRY_TEST_ENV_VAR_NON_UTF8";
        std::env::set_var(name, OsStr::from_bytes(b"ab\xffcd"));

        let value = env_var(name, Some(Value::from("fallback"))).unwrap();
        assert_eq!(value.as_str(), Some("ab\u{fffd}cd"));
        assert!(env_var(name, None).is_ok());
    }

    #[test]
    fn constant_builtins() {
        assert!(!is_incremental());
        assert_eq!(config(Rest(vec![Value::from(1), Value::from(2)])), "");
        assert_eq!(no_log(Value::from("hidden"), Rest(vec![Value::from(true)])), "");
        assert_eq!(log(Value::from("shown"), Rest(vec![])), "");
    }
}
