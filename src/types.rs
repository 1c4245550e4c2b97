use std::fmt;
use std::path::PathBuf;

use serde_json::Value;

/// The merged key/value store. Values may nest to arbitrary depth.
pub type ConfigMap = serde_json::Map<String, Value>;

/// Separator used by [`build()`](crate::ConfigurationBuilder::build) for nested key paths.
pub const DEFAULT_SEPARATOR: &str = ":";

/// Where a batch of configuration values came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// The process environment.
    Environment,
    /// A JSON file, by resolved path.
    File(PathBuf),
    /// Values supplied in code via [`add_values()`](crate::ConfigurationBuilder::add_values).
    Values,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Environment => write!(f, "environment"),
            Source::File(path) => write!(f, "{}", path.display()),
            Source::Values => write!(f, "values"),
        }
    }
}

/// Whether a default value counts as "supplied".
///
/// Null, `false`, zero, the empty string and empty containers are all falsy,
/// which means [`get_or()`](crate::Configuration::get_or) treats them exactly
/// like a missing default.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Short description of a value's JSON type, for error messages.
pub(crate) fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
