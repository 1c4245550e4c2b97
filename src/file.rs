//! Loading JSON config files.
//!
//! A file source is resolved against the builder's base path, read, and
//! parsed into a [`ConfigMap`]. Three outcomes matter to the caller:
//!
//! - the file is missing: [`Loaded::Missing`], and the builder decides whether
//!   that is fatal based on the `optional` flag;
//! - the file exists but is unusable (I/O failure, invalid JSON, or a top-level
//!   value that is not an object): [`ConfigError::UnreadableOrMalformedFile`];
//! - the file parses: [`Loaded::Map`] with its top-level object.

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{ConfigError, FileFault};
use crate::types::{ConfigMap, kind_of};

/// Result of trying to load one JSON file.
#[derive(Debug)]
pub enum Loaded {
    Map(ConfigMap),
    Missing,
}

/// Join `path` onto `base`. Absolute paths are returned unchanged.
pub fn resolve_file_path(base: &Path, path: impl AsRef<Path>) -> PathBuf {
    base.join(path)
}

/// Read and parse a JSON object file. A missing file is not an error here.
pub fn load_json_file(path: &Path) -> Result<Loaded, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Loaded::Missing),
        Err(e) => return Err(unreadable(path, e.into())),
    };

    parse_json_object(&content)
        .map(Loaded::Map)
        .map_err(|fault| unreadable(path, fault))
}

/// Parse a JSON document whose top level must be an object.
pub fn parse_json_object(content: &str) -> Result<ConfigMap, FileFault> {
    match serde_json::from_str::<Value>(content)? {
        Value::Object(map) => Ok(map),
        other => Err(FileFault::NotAnObject {
            found: kind_of(&other),
        }),
    }
}

fn unreadable(path: &Path, source: FileFault) -> ConfigError {
    ConfigError::UnreadableOrMalformedFile {
        path: path.to_path_buf(),
        source,
    }
}
