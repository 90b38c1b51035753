//! Pokemon names belonging to a type.

use serde::Serialize;
use serde_json::Value;

/// Names of the Pokemon listed under an upstream `/type/{name}` resource.
///
/// Unlike the other entities this one is read leniently: a missing or
/// malformed `pokemon` array yields no names, and entries without a string
/// `pokemon.name` are skipped. Order and duplicates are kept as received.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TypeMembership {
    pub results: Vec<String>,
}

impl TypeMembership {
    pub fn from_upstream(payload: &Value) -> Self {
        let results = payload
            .get("pokemon")
            .and_then(Value::as_array)
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(|entry| entry.get("pokemon")?.get("name")?.as_str())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Self { results }
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
