use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::config::Configuration;
use crate::env;
use crate::error::ConfigError;
use crate::file::{self, Loaded};
use crate::merge::{MergeSummary, merge_first_wins};
use crate::types::{ConfigMap, DEFAULT_SEPARATOR, Source};

/// Builder that merges configuration sources into one map.
///
/// Sources are merged in call order and the **first** source to set a key
/// wins. Later sources never overwrite it; see
/// [`merge_first_wins`](crate::merge::merge_first_wins) for the diagnostics
/// emitted on duplicates.
///
/// The chaining methods (`add_*`, `base_path`) consume the builder. The
/// `merge_*` methods work in place, report a [`MergeSummary`], and leave the
/// builder usable after a failed file load.
#[derive(Debug, Default)]
pub struct ConfigurationBuilder {
    values: ConfigMap,
    base_path: Option<PathBuf>,
}

impl ConfigurationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the directory that relative JSON file paths are resolved against.
    ///
    /// Fails with [`ConfigError::PathNotFound`] if `path` does not exist.
    /// Without this call, files resolve against the current working directory.
    pub fn base_path(mut self, path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        self.set_base_path(path)?;
        Ok(self)
    }

    /// Merge every variable of the process environment as a string value.
    pub fn add_environment_variables(mut self) -> Self {
        self.merge_environment_variables();
        self
    }

    /// Merge the top-level object of a JSON file.
    ///
    /// A missing file fails with [`ConfigError::RequiredFileMissing`] unless
    /// `optional` is set, in which case it is skipped. A file that exists but
    /// can't be read or parsed always fails with
    /// [`ConfigError::UnreadableOrMalformedFile`].
    pub fn add_json_file(
        mut self,
        path: impl AsRef<Path>,
        optional: bool,
    ) -> Result<Self, ConfigError> {
        self.merge_json_file(path, optional)?;
        Ok(self)
    }

    /// Merge key/value pairs supplied in code.
    pub fn add_values<K, V, I>(mut self, values: I) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        let map: ConfigMap = values
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self.merge_source(Source::Values, map);
        self
    }

    /// In-place form of [`base_path`](Self::base_path).
    pub fn set_base_path(&mut self, path: impl Into<PathBuf>) -> Result<(), ConfigError> {
        let path = path.into();
        if !path.exists() {
            return Err(ConfigError::PathNotFound(path));
        }
        tracing::debug!(path = %path.display(), "Config base path set");
        self.base_path = Some(path);
        Ok(())
    }

    /// In-place form of [`add_environment_variables`](Self::add_environment_variables).
    pub fn merge_environment_variables(&mut self) -> MergeSummary {
        self.merge_source(Source::Environment, env::env_to_map(env::process_vars()))
    }

    /// In-place form of [`add_json_file`](Self::add_json_file).
    ///
    /// On error nothing from this file is merged; earlier sources stay intact.
    pub fn merge_json_file(
        &mut self,
        path: impl AsRef<Path>,
        optional: bool,
    ) -> Result<MergeSummary, ConfigError> {
        let full_path = file::resolve_file_path(&self.effective_base_path(), path);

        match file::load_json_file(&full_path)? {
            Loaded::Map(map) => Ok(self.merge_source(Source::File(full_path), map)),
            Loaded::Missing if optional => {
                tracing::debug!(path = %full_path.display(), "Optional config file not found, skipping");
                Ok(MergeSummary::default())
            }
            Loaded::Missing => Err(ConfigError::RequiredFileMissing(full_path)),
        }
    }

    /// Merge an already-loaded map, labelled with its source for diagnostics.
    pub fn merge_source(&mut self, source: Source, map: ConfigMap) -> MergeSummary {
        merge_first_wins(&mut self.values, map, &source)
    }

    /// The map accumulated so far.
    pub fn config(&self) -> &ConfigMap {
        &self.values
    }

    /// The directory relative file paths resolve against.
    pub fn effective_base_path(&self) -> PathBuf {
        match &self.base_path {
            Some(path) => path.clone(),
            None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        }
    }

    /// Finish with the default `":"` key path separator.
    pub fn build(self) -> Configuration {
        self.build_with_separator(DEFAULT_SEPARATOR)
    }

    /// Finish with a custom key path separator. An empty separator disables
    /// nested lookups.
    pub fn build_with_separator(self, separator: &str) -> Configuration {
        Configuration::new(self.values, separator)
    }
}
