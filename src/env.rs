use std::ffi::OsString;

use serde_json::Value;

use crate::types::ConfigMap;

/// Build a flat `ConfigMap` from environment variable pairs.
///
/// Every variable is taken verbatim: names are not filtered, split or
/// case-folded, and values stay strings.
///
/// Takes an iterator so tests can pass synthetic data instead of the real environment.
pub fn env_to_map(vars: impl IntoIterator<Item = (String, String)>) -> ConfigMap {
    vars.into_iter()
        .map(|(key, value)| (key, Value::String(value)))
        .collect()
}

/// The current process environment, skipping variables that are not valid Unicode.
pub fn process_vars() -> impl Iterator<Item = (String, String)> {
    unicode_vars(std::env::vars_os())
}

/// Keep the pairs whose name and value are both valid Unicode.
fn unicode_vars(
    vars: impl IntoIterator<Item = (OsString, OsString)>,
) -> impl Iterator<Item = (String, String)> {
    vars.into_iter()
        .filter_map(|(key, value)| match (key.into_string(), value.into_string()) {
            (Ok(key), Ok(value)) => Some((key, value)),
            (Ok(key), Err(_)) => {
                tracing::debug!(%key, "Skipping environment variable with non-Unicode value");
                None
            }
            (Err(key), _) => {
                tracing::debug!(key = %key.to_string_lossy(), "Skipping environment variable with non-Unicode name");
                None
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn values_stay_strings() {
        let map = env_to_map(vars(&[("HTTPPort", "8000"), ("DEBUG", "true")]));
        assert_eq!(map["HTTPPort"], Value::String("8000".into()));
        assert_eq!(map["DEBUG"], Value::String("true".into()));
    }

    #[test]
    fn names_are_verbatim() {
        let map = env_to_map(vars(&[("API_USER", "Mo"), ("Logger__Level", "Debug")]));
        assert_eq!(map["API_USER"], "Mo");
        assert_eq!(map["Logger__Level"], "Debug");
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn empty_value_kept() {
        let map = env_to_map(vars(&[("EMPTY", "")]));
        assert_eq!(map["EMPTY"], "");
    }

    #[test]
    fn no_vars_is_empty() {
        assert!(env_to_map(Vec::new()).is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn non_unicode_names_and_values_are_skipped() {
        use std::os::unix::ffi::OsStringExt;

        let bad = || OsString::from_vec(vec![b'x', 0xff]);
        let kept: Vec<_> = unicode_vars(vec![
            (OsString::from("API_USER"), OsString::from("Mo")),
            (bad(), OsString::from("value")),
            (OsString::from("BAD_VALUE"), bad()),
        ])
        .collect();
        assert_eq!(kept, vec![("API_USER".to_string(), "Mo".to_string())]);
    }

    #[test]
    #[serial]
    fn process_vars_sees_current_environment() {
        temp_env::with_var("CFGSTACK_ENV_CHECK", Some("present"), || {
            let found = process_vars().find(|(k, _)| k == "CFGSTACK_ENV_CHECK");
            assert_eq!(
                found,
                Some(("CFGSTACK_ENV_CHECK".to_string(), "present".to_string()))
            );
        });
    }
}
