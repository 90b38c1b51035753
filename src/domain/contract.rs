//! Field-level shape checks for upstream payloads.
//!
//! Entities read themselves out of a [`serde_json::Value`] through a
//! [`ShapeCheck`], which records every violation it meets instead of stopping
//! at the first one. Paths use dotted keys and bracketed indices, e.g.
//! `stats[2].stat.url`.

use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use validator::ValidateUrl;

pub const REQUIRED: &str = "This field is required.";
pub const NOT_NULL: &str = "This field may not be null.";
pub const NOT_BLANK: &str = "This field may not be blank.";
pub const NOT_INTEGER: &str = "A valid integer is required.";
pub const NOT_STRING: &str = "Not a valid string.";
pub const NOT_URL: &str = "Enter a valid URL.";
pub const NOT_NEGATIVE: &str = "Ensure this value is greater than or equal to 0.";

/// Field path to the messages recorded against it.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Violations(BTreeMap<String, Vec<String>>);

impl Violations {
    pub fn push(&mut self, path: impl Into<String>, message: impl Into<String>) {
        let path = path.into();
        let path = if path.is_empty() {
            "non_field_errors".to_string()
        } else {
            path
        };
        self.0.entry(path).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of distinct paths with at least one violation.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, path: &str) -> Option<&[String]> {
        self.0.get(path).map(Vec::as_slice)
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

/// Joins a parent path and a key.
pub fn join(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{parent}.{key}")
    }
}

/// Path of the element at `index` inside the list at `parent`.
pub fn index(parent: &str, index: usize) -> String {
    format!("{parent}[{index}]")
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "str",
        Value::Array(_) => "list",
        Value::Object(_) => "dict",
    }
}

/// Integer value of a JSON number or numeric string.
///
/// Integral floats (`7.0`) and strings such as `" 7 "` or `"7.00"` are accepted;
/// fractional values, booleans and anything else are not.
fn coerce_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number.as_i64().or_else(|| {
            number
                .as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(text) => {
            let text = text.trim();
            let digits = match text.rsplit_once('.') {
                Some((whole, zeros)) if zeros.chars().all(|c| c == '0') => whole,
                _ => text,
            };
            digits.parse().ok()
        }
        _ => None,
    }
}

/// Accumulates violations while an entity is read from upstream JSON.
#[derive(Debug, Default)]
pub struct ShapeCheck {
    violations: Violations,
}

impl ShapeCheck {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn violations(&self) -> &Violations {
        &self.violations
    }

    pub fn reject(&mut self, path: &str, message: impl Into<String>) {
        self.violations.push(path, message);
    }

    /// Interprets `value` itself as an object.
    pub fn expect_object<'v>(&mut self, value: &'v Value, path: &str) -> Option<&'v Map<String, Value>> {
        match value {
            Value::Object(map) => Some(map),
            other => {
                self.reject(
                    path,
                    format!(
                        "Invalid data. Expected a dictionary, but got {}.",
                        type_name(other)
                    ),
                );
                None
            }
        }
    }

    /// Looks up a field that must be present and non-null.
    fn required<'v>(
        &mut self,
        object: &'v Map<String, Value>,
        parent: &str,
        key: &str,
    ) -> Option<&'v Value> {
        match object.get(key) {
            None => {
                self.reject(&join(parent, key), REQUIRED);
                None
            }
            Some(Value::Null) => {
                self.reject(&join(parent, key), NOT_NULL);
                None
            }
            Some(value) => Some(value),
        }
    }

    /// Looks up a field that may be absent or null.
    fn optional<'v>(object: &'v Map<String, Value>, key: &str) -> Option<&'v Value> {
        object.get(key).filter(|value| !value.is_null())
    }

    fn as_integer(&mut self, value: &Value, path: &str) -> Option<i64> {
        let parsed = coerce_integer(value);
        if parsed.is_none() {
            self.reject(path, NOT_INTEGER);
        }
        parsed
    }

    fn as_text(&mut self, value: &Value, path: &str) -> Option<String> {
        let text = match value {
            Value::String(text) => text.clone(),
            Value::Number(number) => number.to_string(),
            _ => {
                self.reject(path, NOT_STRING);
                return None;
            }
        };

        let trimmed = text.trim();
        if trimmed.is_empty() {
            self.reject(path, NOT_BLANK);
            return None;
        }

        Some(trimmed.to_string())
    }

    fn as_url(&mut self, value: &Value, path: &str) -> Option<String> {
        let text = self.as_text(value, path)?;
        if text.validate_url() {
            Some(text)
        } else {
            self.reject(path, NOT_URL);
            None
        }
    }

    pub fn integer(&mut self, object: &Map<String, Value>, parent: &str, key: &str) -> Option<i64> {
        let value = self.required(object, parent, key)?;
        self.as_integer(value, &join(parent, key))
    }

    pub fn non_negative_integer(
        &mut self,
        object: &Map<String, Value>,
        parent: &str,
        key: &str,
    ) -> Option<i64> {
        let number = self.integer(object, parent, key)?;
        if number < 0 {
            self.reject(&join(parent, key), NOT_NEGATIVE);
            return None;
        }
        Some(number)
    }

    /// Reads an optional nullable integer. A wrong type is still a violation.
    pub fn optional_integer(
        &mut self,
        object: &Map<String, Value>,
        parent: &str,
        key: &str,
    ) -> Option<i64> {
        let value = Self::optional(object, key)?;
        self.as_integer(value, &join(parent, key))
    }

    pub fn string(&mut self, object: &Map<String, Value>, parent: &str, key: &str) -> Option<String> {
        let value = self.required(object, parent, key)?;
        self.as_text(value, &join(parent, key))
    }

    pub fn url(&mut self, object: &Map<String, Value>, parent: &str, key: &str) -> Option<String> {
        let value = self.required(object, parent, key)?;
        self.as_url(value, &join(parent, key))
    }

    /// Reads an optional nullable URL. A present value must still be a valid URL.
    pub fn optional_url(
        &mut self,
        object: &Map<String, Value>,
        parent: &str,
        key: &str,
    ) -> Option<String> {
        let value = Self::optional(object, key)?;
        self.as_url(value, &join(parent, key))
    }

    pub fn object<'v>(
        &mut self,
        object: &'v Map<String, Value>,
        parent: &str,
        key: &str,
    ) -> Option<&'v Map<String, Value>> {
        let value = self.required(object, parent, key)?;
        self.expect_object(value, &join(parent, key))
    }

    pub fn list<'v>(
        &mut self,
        object: &'v Map<String, Value>,
        parent: &str,
        key: &str,
    ) -> Option<&'v [Value]> {
        match self.required(object, parent, key)? {
            Value::Array(items) => Some(items.as_slice()),
            other => {
                self.reject(
                    &join(parent, key),
                    format!(
                        "Expected a list of items but got type \"{}\".",
                        type_name(other)
                    ),
                );
                None
            }
        }
    }

    /// Reads every element of a list with `read`, keeping the ones that conform.
    pub fn each<T>(
        &mut self,
        items: &[Value],
        path: &str,
        mut read: impl FnMut(&mut Self, &Value, &str) -> Option<T>,
    ) -> Vec<T> {
        items
            .iter()
            .enumerate()
            .filter_map(|(i, item)| read(self, item, &index(path, i)))
            .collect()
    }

    /// Yields the built value if no violation was recorded.
    ///
    /// `build` only runs on a clean check, so it may rely on every required
    /// field having been read.
    pub fn finish<T>(self, build: impl FnOnce() -> Option<T>) -> Result<T, Violations> {
        if !self.violations.is_empty() {
            return Err(self.violations);
        }

        match build() {
            Some(value) => Ok(value),
            None => {
                let mut violations = self.violations;
                violations.push("", "Payload did not match the expected shape.");
                Err(violations)
            }
        }
    }
}
