use serde_json::Value;

use crate::flatten::format_value;
use crate::types::{ConfigMap, Source};

/// What happened to each key of an incoming source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeSummary {
    /// Keys that were new and got inserted.
    pub inserted: Vec<String>,
    /// Keys already present with an equal value. Nothing changed.
    pub duplicates: Vec<String>,
    /// Keys already present with a different value. The incoming value was dropped.
    pub conflicts: Vec<String>,
}

impl MergeSummary {
    pub fn is_clean(&self) -> bool {
        self.duplicates.is_empty() && self.conflicts.is_empty()
    }
}

/// Merge `incoming` into `base`, first source wins.
///
/// Only top-level keys are compared; a nested object is one value. A key
/// already in `base` is never replaced: an equal value logs a warning, a
/// different value logs an error and is discarded.
pub fn merge_first_wins(base: &mut ConfigMap, incoming: ConfigMap, source: &Source) -> MergeSummary {
    let mut summary = MergeSummary::default();

    for (key, value) in incoming {
        match base.get(&key) {
            None => {
                base.insert(key.clone(), value);
                summary.inserted.push(key);
            }
            Some(existing) if values_equal(existing, &value) => {
                tracing::warn!(
                    %key,
                    %source,
                    value = %format_value(existing),
                    "Config key set twice with the same value"
                );
                summary.duplicates.push(key);
            }
            Some(existing) => {
                tracing::error!(
                    %key,
                    %source,
                    rejected = %format_value(&value),
                    kept = %format_value(existing),
                    "Config key already set with a different value, will not be set again"
                );
                summary.conflicts.push(key);
            }
        }
    }

    tracing::debug!(
        %source,
        inserted = summary.inserted.len(),
        duplicates = summary.duplicates.len(),
        conflicts = summary.conflicts.len(),
        "Merged config source"
    );

    summary
}

/// Value equality for duplicate detection.
///
/// Numbers compare numerically, so `30` and `30.0` are the same value.
/// Arrays and objects compare element by element with the same rule.
pub fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x == y || x.as_f64() == y.as_f64(),
        (Value::Array(xs), Value::Array(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| values_equal(x, y))
        }
        (Value::Object(xs), Value::Object(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .all(|(k, x)| ys.get(k).is_some_and(|y| values_equal(x, y)))
        }
        _ => a == b,
    }
}
