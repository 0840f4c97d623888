//! JSON comparison helpers: loose equality, subsets and fragments.

use serde_json::{Map, Value};

/// Returns true if the two values are equal under loose comparison.
///
/// Numbers compare by numeric value, numeric strings equal the number they
/// spell, booleans equal values of the same truthiness, and `null` equals
/// any falsy value. Arrays and objects compare element-wise.
#[must_use]
pub fn loose_eq(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Null, Value::Null) => true,
        (Value::Null, other) | (other, Value::Null) => !is_truthy(other),
        (Value::Bool(flag), other) | (other, Value::Bool(flag)) => *flag == is_truthy(other),
        (Value::Number(a), Value::Number(b)) => a.as_f64() == b.as_f64(),
        (Value::Number(number), Value::String(text))
        | (Value::String(text), Value::Number(number)) => text
            .trim()
            .parse::<f64>()
            .is_ok_and(|parsed| number.as_f64() == Some(parsed)),
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| loose_eq(x, y))
        }
        (Value::Object(a), Value::Object(b)) => {
            a.len() == b.len()
                && a.iter()
                    .all(|(key, x)| b.get(key).is_some_and(|y| loose_eq(x, y)))
        }
        _ => false,
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty() && text != "0",
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Returns true if `actual` contains everything in `subset`.
///
/// The subset is merged over `actual` recursively (list entries by index,
/// object entries by key); the result must still equal `actual`. With
/// `strict` the comparison is exact, otherwise it is [`loose_eq`].
#[must_use]
pub fn is_subset(subset: &Value, actual: &Value, strict: bool) -> bool {
    let patched = replace_recursive(actual, subset);
    if strict {
        &patched == actual
    } else {
        loose_eq(&patched, actual)
    }
}

fn replace_recursive(base: &Value, replacement: &Value) -> Value {
    match (base, replacement) {
        (Value::Object(base_map), Value::Object(replacement_map)) => {
            let mut merged = base_map.clone();
            for (key, value) in replacement_map {
                let next = match base_map.get(key) {
                    Some(existing) => replace_recursive(existing, value),
                    None => value.clone(),
                };
                merged.insert(key.clone(), next);
            }
            Value::Object(merged)
        }
        (Value::Array(base_items), Value::Array(replacement_items)) => {
            let mut merged = base_items.clone();
            for (index, value) in replacement_items.iter().enumerate() {
                match merged.get_mut(index) {
                    Some(existing) => *existing = replace_recursive(existing, value),
                    None => merged.push(value.clone()),
                }
            }
            Value::Array(merged)
        }
        _ => replacement.clone(),
    }
}

/// Returns a copy of `value` with every object's keys in sorted order.
#[must_use]
pub fn sort_recursive(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            let sorted: Map<String, Value> = keys
                .into_iter()
                .filter_map(|key| map.get(key).map(|v| (key.clone(), sort_recursive(v))))
                .collect();
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.iter().map(sort_recursive).collect()),
        other => other.clone(),
    }
}

/// Encodes `value` compactly with sorted keys.
#[must_use]
pub fn canonical_string(value: &Value) -> String {
    sort_recursive(value).to_string()
}

/// Returns the fragment needles for each top-level entry of `fragment`.
///
/// An entry `key => value` becomes `"key":value` as it would appear inside
/// the canonical encoding of a larger document. List entries become the
/// bare encoded value.
#[must_use]
pub fn fragment_needles(fragment: &Value) -> Vec<String> {
    match sort_recursive(fragment) {
        Value::Object(map) => map
            .iter()
            .map(|(key, value)| {
                format!("{}:{}", Value::String(key.clone()), value)
            })
            .collect(),
        Value::Array(items) => items.iter().map(Value::to_string).collect(),
        other => vec![other.to_string()],
    }
}

/// Returns true if `needle` occurs in `haystack` as a complete entry.
#[must_use]
pub fn contains_fragment(haystack: &str, needle: &str) -> bool {
    [']', '}', ','].iter().any(|terminator| {
        let mut candidate = String::with_capacity(needle.len() + 1);
        candidate.push_str(needle);
        candidate.push(*terminator);
        haystack.contains(&candidate)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_loose_equality() {
        assert!(loose_eq(&json!(1), &json!(1.0)));
        assert!(loose_eq(&json!(1), &json!("1")));
        assert!(loose_eq(&json!(true), &json!(1)));
        assert!(loose_eq(&json!(null), &json!(false)));
        assert!(!loose_eq(&json!("a"), &json!("b")));
        assert!(loose_eq(&json!({"a": [1, "2"]}), &json!({"a": ["1", 2]})));
    }

    #[test]
    fn test_subset() {
        let actual = json!({"a": 1, "b": 2, "c": {"d": [1, 2, 3]}});

        assert!(is_subset(&json!({"a": 1}), &actual, false));
        assert!(is_subset(&json!({"c": {"d": [1]}}), &actual, false));
        assert!(!is_subset(&json!({"a": 2}), &actual, false));
        assert!(!is_subset(&json!({"z": 1}), &actual, false));
    }

    #[test]
    fn test_strict_subset_checks_types() {
        let actual = json!({"a": 1});
        assert!(is_subset(&json!({"a": "1"}), &actual, false));
        assert!(!is_subset(&json!({"a": "1"}), &actual, true));
        assert!(is_subset(&json!({"a": 1}), &actual, true));
    }

    #[test]
    fn test_fragment_search() {
        let body = canonical_string(&json!({"data": {"name": "Ana", "id": 7}, "ok": true}));

        for needle in fragment_needles(&json!({"name": "Ana"})) {
            assert!(contains_fragment(&body, &needle), "{needle} in {body}");
        }
        for needle in fragment_needles(&json!({"name": "An"})) {
            assert!(!contains_fragment(&body, &needle));
        }
    }

    #[test]
    fn test_list_fragment_needles_are_bare_values() {
        assert_eq!(fragment_needles(&json!(["Ada", 2])), vec![r#""Ada""#.to_string(), "2".to_string()]);

        let body = canonical_string(&json!(["Ada", "Bob"]));
        assert!(contains_fragment(&body, r#""Ada""#));
        assert!(contains_fragment(&body, r#""Bob""#));
        assert!(!contains_fragment(&body, r#""Eve""#));
    }

    #[test]
    fn test_canonical_string_sorts_keys() {
        assert_eq!(canonical_string(&json!({"b": 1, "a": {"d": 2, "c": 3}})), r#"{"a":{"c":3,"d":2},"b":1}"#);
    }
}
