use serde_json::{Map, Value};
use std::env;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::errors::ConfigError;

/// A loosely-typed key/value configuration store
///
/// Projects use this for settings that do not belong in `Config`: values are
/// loaded from the environment or a JSON file and converted on access.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigStore {
    values: Map<String, Value>,
}

impl ConfigStore {
    /// Wraps an existing map of values
    pub fn new(values: Map<String, Value>) -> Self {
        Self { values }
    }

    /// Builds a store from environment variables
    ///
    /// Every name in `required` must be set. Names in `optional` fall back
    /// to the paired default when unset.
    pub fn from_env(required: &[&str], optional: &[(&str, &str)]) -> Result<Self, ConfigError> {
        let mut values = Map::new();

        for var in required {
            let value = env::var(var).map_err(|_| ConfigError::MissingEnv(var.to_string()))?;
            values.insert(var.to_string(), Value::String(value));
        }

        for (var, default) in optional {
            let value = env::var(var).unwrap_or_else(|_| default.to_string());
            values.insert(var.to_string(), Value::String(value));
        }

        debug!("Loaded {} configuration values from the environment", values.len());
        Ok(Self { values })
    }

    /// Builds a store from a JSON file whose top level is an object
    pub fn from_json(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        match serde_json::from_str::<Value>(&content)? {
            Value::Object(values) => {
                debug!("Loaded {} configuration values from {:?}", values.len(), path);
                Ok(Self { values })
            }
            _ => Err(ConfigError::NotAnObject(path.to_path_buf())),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Returns the value for `key`, or `default` when it is absent
    pub fn get_or<'a>(&'a self, key: &str, default: &'a Value) -> &'a Value {
        self.values.get(key).unwrap_or(default)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(Value::as_str)
    }

    /// Returns the value for `key` as an integer
    ///
    /// Integral numbers, booleans and numeric strings convert; floats are
    /// truncated toward zero. Anything else yields `default`.
    pub fn get_int(&self, key: &str, default: i64) -> i64 {
        match self.values.get(key) {
            Some(Value::Number(n)) => n
                .as_i64()
                .or_else(|| {
                    n.as_f64()
                        .filter(|f| f.is_finite() && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
                        .map(|f| f.trunc() as i64)
                })
                .unwrap_or(default),
            Some(Value::Bool(b)) => i64::from(*b),
            Some(Value::String(s)) => s.trim().parse().unwrap_or(default),
            _ => default,
        }
    }

    /// Returns the value for `key` as a boolean
    ///
    /// Strings are true when they read `true`, `1` or `yes` (any case).
    /// Other values follow JSON truthiness; a missing key yields `default`.
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        match self.values.get(key) {
            None => default,
            Some(Value::String(s)) => matches!(s.to_lowercase().as_str(), "true" | "1" | "yes"),
            Some(Value::Bool(b)) => *b,
            Some(Value::Null) => false,
            Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
            Some(Value::Array(a)) => !a.is_empty(),
            Some(Value::Object(o)) => !o.is_empty(),
        }
    }

    /// Inserts or replaces a value
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
