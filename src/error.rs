use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Base path does not exist: {0}")]
    PathNotFound(PathBuf),

    #[error("Required config file does not exist: {0}")]
    RequiredFileMissing(PathBuf),

    #[error("Unable to open and decode config file {path}: {source}")]
    UnreadableOrMalformedFile {
        path: PathBuf,
        #[source]
        source: FileFault,
    },

    #[error("Invalid value for '{key}': {reason}")]
    InvalidValue { key: String, reason: String },
}

/// Why an existing config file could not be used.
#[derive(Debug, Error)]
pub enum FileFault {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("top-level value is {found}, expected an object")]
    NotAnObject { found: &'static str },
}
