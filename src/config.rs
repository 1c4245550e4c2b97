//! The finalized configuration and its lookup rules.
//!
//! A key is resolved in two steps:
//!
//! 1. **Literal key.** If the exact string is a top-level key, its value wins,
//!    even when the string contains the separator.
//! 2. **Key path.** Otherwise, if the key contains the separator, it is split
//!    and walked one object at a time. Any missing segment, or a segment that
//!    lands on a non-object, ends the walk with nothing found.
//!
//! [`get_or()`](Configuration::get_or) adds a third step: when nothing was
//! found and the default is truthy, the default is stored under the literal
//! key and returned. Later lookups of that key hit step 1 and ignore any new
//! default.
//!
//! # Falsy defaults
//!
//! A default of `false`, `0`, `""`, an empty array or object, or `null` counts
//! as no default at all. It is neither stored nor returned, so
//! `get_or("Flag", false)` on a missing key yields `None`, not `Some(false)`.

use std::fmt;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::builder::ConfigurationBuilder;
use crate::error::ConfigError;
use crate::flatten::{flatten, format_value};
use crate::types::{ConfigMap, is_truthy};

/// Merged configuration with path-based lookups.
///
/// Produced by [`ConfigurationBuilder::build`]. Owns its map; pass it by
/// reference to whatever needs settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    values: ConfigMap,
    separator: String,
}

impl Configuration {
    pub fn builder() -> ConfigurationBuilder {
        ConfigurationBuilder::new()
    }

    pub(crate) fn new(values: ConfigMap, separator: impl Into<String>) -> Self {
        Self {
            values,
            separator: separator.into(),
        }
    }

    /// Look up `key` as a literal key, then as a key path.
    pub fn get(&self, key: &str) -> Option<&Value> {
        if let Some(value) = self.values.get(key) {
            return Some(value);
        }
        self.lookup_path(key)
    }

    /// Like [`get`](Self::get), but store and return `default` when nothing is found.
    ///
    /// The default is stored under the literal `key`, never split into
    /// nested objects. Falsy defaults are ignored (see the module docs).
    pub fn get_or<V: Into<Value>>(&mut self, key: &str, default: V) -> Option<&Value> {
        if self.get(key).is_none() {
            let default = default.into();
            if !is_truthy(&default) {
                return None;
            }
            tracing::debug!(%key, default = %format_value(&default), "Storing default config value");
            self.values.insert(key.to_string(), default);
        }
        self.get(key)
    }

    /// Look up `key` and deserialize it into `T`.
    ///
    /// String values (everything from the environment) that don't fit `T`
    /// directly are parsed as JSON, so `"8000"` reads as a `u16` and `"true"`
    /// as a `bool`.
    pub fn get_as<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, ConfigError> {
        let Some(value) = self.get(key) else {
            return Ok(None);
        };

        let direct = T::deserialize(value);
        let parsed = match (direct, value) {
            (Ok(v), _) => Ok(v),
            (Err(e), Value::String(s)) => serde_json::from_str(s).map_err(|_| e),
            (Err(e), _) => Err(e),
        };

        parsed.map(Some).map_err(|e| ConfigError::InvalidValue {
            key: key.into(),
            reason: e.to_string(),
        })
    }

    /// Whether [`get`](Self::get) would find a value for `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    pub fn as_map(&self) -> &ConfigMap {
        &self.values
    }

    pub fn into_map(self) -> ConfigMap {
        self.values
    }

    /// All leaf values as `(key path, display value)` pairs.
    pub fn entries(&self) -> Vec<(String, String)> {
        flatten(&self.values, &self.separator)
            .into_iter()
            .map(|(key, value)| (key, format_value(&value)))
            .collect()
    }

    fn lookup_path(&self, key: &str) -> Option<&Value> {
        let separator = self.separator.as_str();
        if separator.is_empty() || !key.contains(separator) {
            return None;
        }

        let mut segments = key.split(separator);
        let first = segments.next()?;
        let mut current = self.values.get(first)?;
        for segment in segments {
            current = current.as_object()?.get(segment)?;
        }
        Some(current)
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.entries().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{key} = {value}")?;
        }
        Ok(())
    }
}
