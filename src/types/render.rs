//! Canonical text encoding used by `Display` impls and the structural key.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

/// Render a payload as compact JSON, or as its `Debug` form when JSON cannot
/// represent it faithfully.
///
/// JSON object keys come out sorted, so equal maps render identically
/// whatever their iteration order. serde_json encodes NaN and both
/// infinities as `null`; any payload whose encoding contains `null` is
/// rendered through `Debug` instead so those values stay distinct. Maps with
/// non-string keys have no JSON encoding and also fall back to `Debug`.
pub fn canonical_text<T>(value: &T) -> String
where
    T: Serialize + fmt::Debug + ?Sized,
{
    match serde_json::to_value(value) {
        Ok(json) if !contains_null(&json) => json.to_string(),
        _ => format!("{:?}", value),
    }
}

fn contains_null(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Array(items) => items.iter().any(contains_null),
        Value::Object(fields) => fields.values().any(contains_null),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_finite_floats_stay_distinct() {
        let rendered: Vec<String> = [f64::INFINITY, f64::NAN, f64::NEG_INFINITY, 1.5]
            .iter()
            .map(canonical_text)
            .collect();
        assert_eq!(rendered, vec!["inf", "NaN", "-inf", "1.5"]);
    }

    #[test]
    fn test_null_bearing_payloads_use_debug() {
        assert_eq!(canonical_text(&Some(f64::NAN)), "Some(NaN)");
        assert_eq!(canonical_text(&None::<f64>), "None");
        assert_eq!(canonical_text(&vec![1.0, f64::INFINITY]), "[1.0, inf]");
        assert_eq!(canonical_text(&()), "()");
    }

    #[test]
    fn test_map_keys_sorted() {
        let forward: std::collections::HashMap<&str, i32> = [("b", 2), ("a", 1)].into();
        let reverse: std::collections::HashMap<&str, i32> = [("a", 1), ("b", 2)].into();
        assert_eq!(canonical_text(&forward), "{\"a\":1,\"b\":2}");
        assert_eq!(canonical_text(&forward), canonical_text(&reverse));
    }
}
