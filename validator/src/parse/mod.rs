//! Host adapter: JSON → `ConfigValue`.
//!
//! Plain JSON maps onto the tree directly. Two marker objects carry what JSON
//! cannot express:
//!
//! - `{"$unknown": true}` is a value not yet known during planning.
//! - `{"$set": [...]}` is a set rather than a list.

pub mod plan;

pub use plan::{ResourceConfig, parse_plan};

use serde_json::Value;

use crate::error::Diagnostic;
use crate::value::{ConfigValue, Known, Scalar};

const UNKNOWN_MARKER: &str = "$unknown";
const SET_MARKER: &str = "$set";

/// Deserialize a resource configuration document into a `ConfigValue` tree.
pub fn parse(json: &str) -> Result<ConfigValue, Vec<Diagnostic>> {
    serde_json::from_str::<Value>(json)
        .map(|value| from_json(&value))
        .map_err(|e| {
            vec![Diagnostic::parse(
                "P001",
                format!("Failed to parse configuration JSON: {}", e),
            )]
        })
}

/// Convert an already-deserialized JSON value.
pub fn from_json(value: &Value) -> ConfigValue {
    match value {
        Value::Null => ConfigValue::Null,
        Value::Bool(b) => ConfigValue::bool(*b),
        Value::Number(n) => ConfigValue::Known(Known::Scalar(Scalar::Number(n.clone()))),
        Value::String(s) => ConfigValue::string(s.as_str()),
        Value::Array(items) => ConfigValue::list(items.iter().map(from_json)),
        Value::Object(fields) => {
            if fields.len() == 1 {
                if let Some(Value::Bool(true)) = fields.get(UNKNOWN_MARKER) {
                    return ConfigValue::Unknown;
                }
                if let Some(Value::Array(items)) = fields.get(SET_MARKER) {
                    return ConfigValue::set(items.iter().map(from_json));
                }
            }
            ConfigValue::object(fields.iter().map(|(k, v)| (k.as_str(), from_json(v))))
        }
    }
}
