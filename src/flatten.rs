//! Flatten a nested [`ConfigMap`] into separator-joined key paths.
//!
//! `{"Logger": {"Level": "Notice"}}` with separator `":"` becomes
//! `[("Logger:Level", "Notice")]`. Every returned key resolves through
//! [`Configuration::get`](crate::Configuration::get), unless a literal
//! top-level key shadows the same path.

use serde_json::Value;

use crate::types::ConfigMap;

/// Collect every leaf value under `map`, depth first, in map order.
///
/// Arrays and empty objects are leaves. An empty separator disables nesting,
/// so only the top-level keys are listed.
pub fn flatten(map: &ConfigMap, separator: &str) -> Vec<(String, Value)> {
    let mut out = Vec::new();
    if separator.is_empty() {
        out.extend(map.iter().map(|(k, v)| (k.clone(), v.clone())));
    } else {
        walk(map, "", separator, &mut out);
    }
    out
}

fn walk(map: &ConfigMap, prefix: &str, separator: &str, out: &mut Vec<(String, Value)>) {
    for (key, value) in map {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}{separator}{key}")
        };
        match value {
            Value::Object(inner) if !inner.is_empty() => walk(inner, &path, separator, out),
            leaf => out.push((path, leaf.clone())),
        }
    }
}

/// Format a value for listings: strings bare, everything else as JSON.
pub fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(value: Value) -> ConfigMap {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn flat_keys_pass_through() {
        let pairs = flatten(&map(json!({"Env": "dev", "HTTPPort": 8000})), ":");
        assert_eq!(
            pairs,
            vec![
                ("Env".to_string(), json!("dev")),
                ("HTTPPort".to_string(), json!(8000)),
            ]
        );
    }

    #[test]
    fn nested_keys_joined_with_separator() {
        let pairs = flatten(
            &map(json!({"Logger": {"Level": "Notice", "File": "/tmp/config.out"}})),
            ":",
        );
        assert_eq!(
            pairs,
            vec![
                ("Logger:File".to_string(), json!("/tmp/config.out")),
                ("Logger:Level".to_string(), json!("Notice")),
            ]
        );
    }

    #[test]
    fn custom_separator() {
        let pairs = flatten(&map(json!({"a": {"b": {"c": 1}}})), "__");
        assert_eq!(pairs, vec![("a__b__c".to_string(), json!(1))]);
    }

    #[test]
    fn arrays_and_empty_objects_are_leaves() {
        let pairs = flatten(&map(json!({"hosts": ["a", "b"], "extra": {}})), ":");
        assert_eq!(
            pairs,
            vec![
                ("extra".to_string(), json!({})),
                ("hosts".to_string(), json!(["a", "b"])),
            ]
        );
    }

    #[test]
    fn empty_separator_lists_top_level_only() {
        let pairs = flatten(&map(json!({"Logger": {"Level": "Notice"}})), "");
        assert_eq!(
            pairs,
            vec![("Logger".to_string(), json!({"Level": "Notice"}))]
        );
    }

    #[test]
    fn format_strings_bare() {
        assert_eq!(format_value(&json!("Notice")), "Notice");
        assert_eq!(format_value(&json!(8000)), "8000");
        assert_eq!(format_value(&json!(true)), "true");
        assert_eq!(format_value(&json!(["a"])), r#"["a"]"#);
    }
}
