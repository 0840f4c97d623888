//! Expected JSON shapes.
//!
//! A structure is written as JSON: strings are required keys, objects map a
//! key to the structure of its value, and the `*` key applies a structure to
//! every element of a list.
//!
//! ```
//! use respect_domain::json::JsonStructure;
//! use serde_json::json;
//!
//! let structure = JsonStructure::from_value(&json!(["meta", {"data": {"*": ["id", "name"]}}]));
//! assert!(structure.check(&json!({"meta": {}, "data": [{"id": 1, "name": "a"}]})).is_ok());
//! ```

use serde_json::Value;

use crate::error::{AssertionError, AssertionResult};

/// Key used to apply a structure to each element.
pub const EACH_KEY: &str = "*";

/// One node of an expected JSON structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructureNode {
    /// The key must be present.
    Key(String),
    /// The key must be present and its value must match the nested structure.
    Nested(String, JsonStructure),
    /// Every element must match the nested structure.
    Each(JsonStructure),
}

/// An expected JSON structure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JsonStructure {
    nodes: Vec<StructureNode>,
}

impl JsonStructure {
    /// Creates a structure from explicit nodes.
    #[must_use]
    pub const fn new(nodes: Vec<StructureNode>) -> Self {
        Self { nodes }
    }

    /// Parses a structure from its JSON notation.
    ///
    /// Scalars other than strings are ignored.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let mut nodes = Vec::new();
        collect_nodes(value, &mut nodes);
        Self { nodes }
    }

    /// Returns the nodes of this structure.
    #[must_use]
    pub fn nodes(&self) -> &[StructureNode] {
        &self.nodes
    }

    /// Checks that `data` has this structure.
    ///
    /// # Errors
    ///
    /// Returns the first missing key or non-list value found.
    pub fn check(&self, data: &Value) -> AssertionResult<()> {
        for node in &self.nodes {
            match node {
                StructureNode::Key(key) => {
                    child(data, key)?;
                }
                StructureNode::Nested(key, nested) => {
                    nested.check(child(data, key)?)?;
                }
                StructureNode::Each(nested) => {
                    let items: Vec<&Value> = match data {
                        Value::Array(items) => items.iter().collect(),
                        Value::Object(map) => map.values().collect(),
                        other => {
                            return Err(AssertionError::failed(format!(
                                "Failed asserting that {other} is of type array."
                            )));
                        }
                    };
                    for item in items {
                        nested.check(item)?;
                    }
                }
            }
        }
        Ok(())
    }
}

fn collect_nodes(value: &Value, nodes: &mut Vec<StructureNode>) {
    match value {
        Value::String(key) => nodes.push(StructureNode::Key(key.clone())),
        Value::Array(items) => {
            for item in items {
                collect_nodes(item, nodes);
            }
        }
        Value::Object(map) => {
            for (key, nested) in map {
                let nested = JsonStructure::from_value(nested);
                if key == EACH_KEY {
                    nodes.push(StructureNode::Each(nested));
                } else {
                    nodes.push(StructureNode::Nested(key.clone(), nested));
                }
            }
        }
        Value::Null | Value::Bool(_) | Value::Number(_) => {}
    }
}

fn child<'a>(data: &'a Value, key: &str) -> AssertionResult<&'a Value> {
    let found = match data {
        Value::Object(map) => map.get(key),
        Value::Array(items) => key.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    };
    found.ok_or_else(|| {
        AssertionError::failed(format!("Failed asserting that an array has the key '{key}'."))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flat_keys() {
        let structure = JsonStructure::from_value(&json!(["id", "name"]));
        assert!(structure.check(&json!({"id": 1, "name": "a", "extra": true})).is_ok());

        let error = structure.check(&json!({"id": 1})).unwrap_err();
        assert_eq!(error.message(), "Failed asserting that an array has the key 'name'.");
    }

    #[test]
    fn test_nested_and_each() {
        let structure = JsonStructure::from_value(&json!({
            "data": {"*": ["id", {"tags": ["label"]}]}
        }));

        let good = json!({"data": [
            {"id": 1, "tags": {"label": "x"}},
            {"id": 2, "tags": {"label": "y"}}
        ]});
        assert!(structure.check(&good).is_ok());

        let bad = json!({"data": [{"id": 1, "tags": {"label": "x"}}, {"id": 2, "tags": {}}]});
        assert!(structure.check(&bad).is_err());
    }

    #[test]
    fn test_each_requires_list() {
        let structure = JsonStructure::from_value(&json!({"*": ["id"]}));
        let error = structure.check(&json!("scalar")).unwrap_err();
        assert!(error.message().contains("is of type array"));
    }
}
