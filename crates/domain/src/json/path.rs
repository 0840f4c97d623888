//! Dot-notation lookups into JSON documents.
//!
//! Supports `user.name`, `items.0.id`, `items[0].id`, `items.*.id` and an
//! optional `$` / `$.` prefix.

use serde_json::Value;

/// Returns the value at `path`, or `None` if any segment is missing.
///
/// A `*` segment maps the remaining path over every element of the current
/// array or object and collects the results into an array.
#[must_use]
pub fn get(json: &Value, path: &str) -> Option<Value> {
    let segments = split_path_segments(normalize(path));
    lookup(json, &segments)
}

/// Returns true if `path` resolves to a value (including `null`).
#[must_use]
pub fn has(json: &Value, path: &str) -> bool {
    get(json, path).is_some()
}

fn normalize(path: &str) -> &str {
    let path = path.trim();
    let path = path.strip_prefix('$').unwrap_or(path);
    path.strip_prefix('.').unwrap_or(path)
}

fn lookup(current: &Value, segments: &[String]) -> Option<Value> {
    let Some((segment, rest)) = segments.split_first() else {
        return Some(current.clone());
    };

    if segment == "*" {
        let children: Vec<&Value> = match current {
            Value::Array(items) => items.iter().collect(),
            Value::Object(map) => map.values().collect(),
            _ => return None,
        };
        let collected = children
            .into_iter()
            .filter_map(|child| lookup(child, rest))
            .collect();
        return Some(Value::Array(collected));
    }

    let next = match current {
        Value::Object(map) => map.get(segment.as_str()),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    }?;
    lookup(next, rest)
}

/// Split a path into segments; `name[0]` becomes `name`, `0`.
fn split_path_segments(path: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();

    for ch in path.chars() {
        match ch {
            '.' | '[' => {
                if !current.is_empty() {
                    segments.push(std::mem::take(&mut current));
                }
            }
            ']' => {
                segments.push(std::mem::take(&mut current));
            }
            _ => current.push(ch),
        }
    }

    if !current.is_empty() {
        segments.push(current);
    }

    segments
}
