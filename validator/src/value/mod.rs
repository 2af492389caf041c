//! Tri-state configuration tree handed over by the host.
//!
//! Every node is Null, Unknown (resolved later in the plan, e.g. it depends on
//! another resource), or Known. Rules must defer on Unknown input rather than
//! guess.

pub mod path;

use std::collections::BTreeMap;

pub use path::{AttributePath, PathStep};

pub(crate) static NULL: ConfigValue = ConfigValue::Null;

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValue {
    Null,
    Unknown,
    Known(Known),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Known {
    Scalar(Scalar),
    Object(BTreeMap<String, ConfigValue>),
    List(Vec<ConfigValue>),
    /// Unordered; element order carries no meaning.
    Set(Vec<ConfigValue>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Bool(bool),
    Number(serde_json::Number),
    String(String),
}

impl ConfigValue {
    pub fn string(value: impl Into<String>) -> Self {
        ConfigValue::Known(Known::Scalar(Scalar::String(value.into())))
    }

    pub fn bool(value: bool) -> Self {
        ConfigValue::Known(Known::Scalar(Scalar::Bool(value)))
    }

    pub fn number(value: i64) -> Self {
        ConfigValue::Known(Known::Scalar(Scalar::Number(value.into())))
    }

    pub fn object<I, K>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, ConfigValue)>,
        K: Into<String>,
    {
        ConfigValue::Known(Known::Object(
            fields.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        ))
    }

    pub fn list(items: impl IntoIterator<Item = ConfigValue>) -> Self {
        ConfigValue::Known(Known::List(items.into_iter().collect()))
    }

    pub fn set(items: impl IntoIterator<Item = ConfigValue>) -> Self {
        ConfigValue::Known(Known::Set(items.into_iter().collect()))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, ConfigValue::Null)
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, ConfigValue::Unknown)
    }

    /// True if this node or any descendant is Unknown.
    pub fn contains_unknown(&self) -> bool {
        match self {
            ConfigValue::Null => false,
            ConfigValue::Unknown => true,
            ConfigValue::Known(Known::Scalar(_)) => false,
            ConfigValue::Known(Known::Object(fields)) => {
                fields.values().any(ConfigValue::contains_unknown)
            }
            ConfigValue::Known(Known::List(items) | Known::Set(items)) => {
                items.iter().any(ConfigValue::contains_unknown)
            }
        }
    }

    /// Attribute lookup on an object. Absent attributes and non-objects read
    /// as Null.
    pub fn get(&self, name: &str) -> &ConfigValue {
        match self {
            ConfigValue::Known(Known::Object(fields)) => fields.get(name).unwrap_or(&NULL),
            _ => &NULL,
        }
    }

    /// Short name of the node's kind, used in decode errors.
    pub fn kind_name(&self) -> &'static str {
        match self {
            ConfigValue::Null => "null",
            ConfigValue::Unknown => "unknown",
            ConfigValue::Known(Known::Scalar(Scalar::Bool(_))) => "bool",
            ConfigValue::Known(Known::Scalar(Scalar::Number(_))) => "number",
            ConfigValue::Known(Known::Scalar(Scalar::String(_))) => "string",
            ConfigValue::Known(Known::Object(_)) => "object",
            ConfigValue::Known(Known::List(_)) => "list",
            ConfigValue::Known(Known::Set(_)) => "set",
        }
    }
}
