//! Layered configuration from JSON files and environment variables, with
//! path-based lookups and sticky defaults.
//!
//! ```ignore
//! let mut config = Configuration::builder()
//!     .base_path("/etc/myapp")?
//!     .add_json_file("settings.json", false)?
//!     .add_json_file("settings.local.json", true)?
//!     .add_environment_variables()
//!     .build();
//!
//! let level = config.get("Logger:Level");
//! let port = config.get_or("GrpcPort", 5000);
//! ```
//!
//! # Sources and precedence
//!
//! A [`ConfigurationBuilder`] merges sources in the order you add them:
//!
//! - **JSON files** via [`add_json_file()`](ConfigurationBuilder::add_json_file).
//!   The file's top-level object is merged; nested objects stay nested.
//!   Relative paths resolve against [`base_path()`](ConfigurationBuilder::base_path),
//!   which defaults to the working directory.
//! - **Environment variables** via
//!   [`add_environment_variables()`](ConfigurationBuilder::add_environment_variables).
//!   Every variable is merged verbatim as a string.
//! - **Values from code** via [`add_values()`](ConfigurationBuilder::add_values).
//!
//! Precedence is **first source wins**. A key set by an earlier source is
//! never overwritten:
//!
//! | Incoming key            | Result                | Diagnostic        |
//! |-------------------------|-----------------------|-------------------|
//! | not yet set             | inserted              | none              |
//! | set, same value         | unchanged             | `tracing::warn!`  |
//! | set, different value    | unchanged, new dropped| `tracing::error!` |
//!
//! Conflicts never fail the build. They are logged so a setting defined in
//! both a file and the environment is easy to spot. The `merge_*` methods on
//! the builder return a [`MergeSummary`] with the same information.
//!
//! Only top-level keys are compared. Two files that both define a `Logger`
//! object do not combine their fields; the first `Logger` wins whole.
//!
//! # Lookups
//!
//! [`Configuration::get`] resolves a key in two steps: the literal key
//! first, then (if the key contains the separator, `":"` by default) a walk
//! through nested objects. `get("Logger:Level")` finds
//! `{"Logger": {"Level": "Notice"}}`, but a top-level key literally named
//! `"Logger:Level"` takes priority.
//!
//! [`Configuration::get_or`] falls back to a default and **stores** it under
//! the literal key, so the first default supplied for a key is the one every
//! later lookup sees. Falsy defaults (`false`, `0`, `""`, empty containers,
//! `null`) count as no default: they are never stored and `get_or` returns
//! `None`.
//!
//! [`Configuration::get_as`] deserializes a value into any serde type, parsing
//! string values when needed so environment variables read as numbers or
//! booleans.
//!
//! # Error handling
//!
//! Building returns [`ConfigError`] for a missing base path, a missing
//! required file, or a file that can't be read or parsed. Lookups never fail;
//! a missing key is `None`.
//!
//! # Logging
//!
//! Diagnostics go through [`tracing`](https://docs.rs/tracing). The crate never
//! installs a subscriber; without one, nothing is printed.

pub mod error;
pub mod merge;
pub mod types;

mod builder;
mod config;
mod env;
mod file;
mod flatten;

#[cfg(test)]
mod fixtures;

pub use builder::ConfigurationBuilder;
pub use config::Configuration;
pub use error::{ConfigError, FileFault};
pub use merge::MergeSummary;
pub use types::{ConfigMap, DEFAULT_SEPARATOR, Source, is_truthy};
