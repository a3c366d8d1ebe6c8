//! Package manifest access.
//!
//! The manifest is kept as a raw `serde_json::Value` rather than a typed
//! struct: checks must accept any JSON document (including `null` or a bare
//! array) and read fields the way JavaScript property access does. A missing
//! field reads as `null`, and reading a property *of* `null` is an error.

use anyhow::{Context, Result};
use serde_json::Value;

use crate::error::CheckError;

static UNDEFINED: Value = Value::Null;

/// A parsed `package.json` document. Never mutated after parsing.
#[derive(Debug, Clone, PartialEq)]
pub struct Manifest {
    root: Value,
}

impl Manifest {
    /// Parse manifest text. Any JSON document is accepted.
    pub fn parse(text: &str) -> Result<Self> {
        let root = serde_json::from_str(text).context("Invalid JSON in package manifest")?;
        Ok(Self { root })
    }

    pub fn from_value(root: Value) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Read a top-level field.
    pub fn field(&self, name: &str) -> Result<&Value, CheckError> {
        property("manifest", &self.root, name)
    }
}

/// Read `name` from `value`.
///
/// Objects yield the member or `null` when absent. Other non-null values have
/// no named members and also yield `null`. A `null` owner is an error.
pub fn property<'a>(owner: &str, value: &'a Value, name: &str) -> Result<&'a Value, CheckError> {
    match value {
        Value::Null => Err(CheckError::nullish(owner, name)),
        Value::Object(map) => Ok(map.get(name).unwrap_or(&UNDEFINED)),
        _ => Ok(&UNDEFINED),
    }
}

/// JavaScript truthiness of a JSON value.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Truthiness of `value.length`.
pub fn length_is_truthy(owner: &str, value: &Value) -> Result<bool, CheckError> {
    match value {
        Value::Null => Err(CheckError::nullish(owner, "length")),
        Value::Array(items) => Ok(!items.is_empty()),
        Value::String(s) => Ok(!s.is_empty()),
        Value::Object(_) => Ok(is_truthy(property(owner, value, "length")?)),
        Value::Bool(_) | Value::Number(_) => Ok(false),
    }
}
