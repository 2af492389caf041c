//! Typed per-resource views of a configuration tree.
//!
//! Each resource is decoded once before its rules run, so rules read typed
//! fields instead of repeating path lookups and kind checks. Models carry only
//! the attributes some rule inspects; the rest of the tree is never decoded.

pub mod container;
pub mod edge_rule;
pub mod hostname;
pub mod shield;
pub mod storage_zone;

use std::collections::BTreeMap;

use crate::error::DecodeError;
use crate::value::{AttributePath, ConfigValue, Known, NULL, Scalar};

pub use container::{CdnBlock, Container, ContainerApp, Endpoint, PortBlock, Volume, VolumeMount};
pub use edge_rule::{Action, EdgeRule, Trigger};
pub use hostname::PullzoneHostname;
pub use shield::{AccessList, BotDetection, ShieldZone, Waf};
pub use storage_zone::StorageZone;

/// A decoded attribute: Null, Unknown, or a known value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Attr<T> {
    #[default]
    Null,
    Unknown,
    Known(T),
}

impl<T> Attr<T> {
    pub fn is_null(&self) -> bool {
        matches!(self, Attr::Null)
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Attr::Unknown)
    }

    pub fn known(&self) -> Option<&T> {
        match self {
            Attr::Known(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> Attr<Vec<Attr<T>>> {
    /// True if the collection, or any of its elements, is Unknown.
    pub fn any_unknown(&self) -> bool {
        match self {
            Attr::Unknown => true,
            Attr::Null => false,
            Attr::Known(items) => items.iter().any(Attr::is_unknown),
        }
    }
}

/// Types decoded from an object node.
pub trait Decode: Sized {
    fn decode(fields: &Fields<'_>) -> Result<Self, DecodeError>;
}

/// Decode the resource rooted at `value`.
pub fn decode_resource<T: Decode>(value: &ConfigValue) -> Result<T, DecodeError> {
    T::decode(&Fields::of(value, AttributePath::root())?)
}

/// Reader over the attributes of one object node.
pub struct Fields<'a> {
    map: &'a BTreeMap<String, ConfigValue>,
    path: AttributePath,
}

impl<'a> Fields<'a> {
    pub fn of(value: &'a ConfigValue, path: AttributePath) -> Result<Self, DecodeError> {
        match value {
            ConfigValue::Known(Known::Object(map)) => Ok(Fields { map, path }),
            other => Err(wrong_kind(path, "an object", other)),
        }
    }

    pub fn path(&self) -> &AttributePath {
        &self.path
    }

    fn value(&self, name: &str) -> (&'a ConfigValue, AttributePath) {
        let value = self.map.get(name).unwrap_or(&NULL);
        (value, self.path.clone().name(name))
    }

    pub fn string(&self, name: &str) -> Result<Attr<String>, DecodeError> {
        let (value, path) = self.value(name);
        decode_string(value, path)
    }

    pub fn boolean(&self, name: &str) -> Result<Attr<bool>, DecodeError> {
        let (value, path) = self.value(name);
        decode_bool(value, path)
    }

    pub fn integer(&self, name: &str) -> Result<Attr<i64>, DecodeError> {
        let (value, path) = self.value(name);
        decode_integer(value, path)
    }

    /// A list or set of strings; elements keep their own tri-state.
    pub fn strings(&self, name: &str) -> Result<Attr<Vec<Attr<String>>>, DecodeError> {
        let (value, path) = self.value(name);
        let Some(items) = collection(value, &path)? else {
            return Ok(tri_state(value));
        };
        let decoded = items
            .iter()
            .enumerate()
            .map(|(i, item)| decode_string(item, path.clone().index(i)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Attr::Known(decoded))
    }

    /// A repeated nested block (list or set of objects). An Unknown element
    /// makes the whole collection Unknown.
    pub fn blocks<T: Decode>(&self, name: &str) -> Result<Attr<Vec<T>>, DecodeError> {
        let (value, path) = self.value(name);
        let Some(items) = collection(value, &path)? else {
            return Ok(tri_state(value));
        };
        if items.iter().any(ConfigValue::is_unknown) {
            return Ok(Attr::Unknown);
        }
        let decoded = items
            .iter()
            .enumerate()
            .map(|(i, item)| T::decode(&Fields::of(item, path.clone().index(i))?))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Attr::Known(decoded))
    }

    /// A single nested block (object attribute).
    pub fn block<T: Decode>(&self, name: &str) -> Result<Attr<T>, DecodeError> {
        let (value, path) = self.value(name);
        match value {
            ConfigValue::Null => Ok(Attr::Null),
            ConfigValue::Unknown => Ok(Attr::Unknown),
            known => Ok(Attr::Known(T::decode(&Fields::of(known, path)?)?)),
        }
    }
}

fn tri_state<T>(value: &ConfigValue) -> Attr<T> {
    if value.is_unknown() {
        Attr::Unknown
    } else {
        Attr::Null
    }
}

/// Elements of a known list or set; `None` for Null and Unknown.
fn collection<'a>(
    value: &'a ConfigValue,
    path: &AttributePath,
) -> Result<Option<&'a [ConfigValue]>, DecodeError> {
    match value {
        ConfigValue::Null | ConfigValue::Unknown => Ok(None),
        ConfigValue::Known(Known::List(items) | Known::Set(items)) => Ok(Some(items.as_slice())),
        other => Err(wrong_kind(path.clone(), "a list or set", other)),
    }
}

fn decode_string(value: &ConfigValue, path: AttributePath) -> Result<Attr<String>, DecodeError> {
    match value {
        ConfigValue::Null => Ok(Attr::Null),
        ConfigValue::Unknown => Ok(Attr::Unknown),
        ConfigValue::Known(Known::Scalar(Scalar::String(s))) => Ok(Attr::Known(s.clone())),
        other => Err(wrong_kind(path, "a string", other)),
    }
}

fn decode_bool(value: &ConfigValue, path: AttributePath) -> Result<Attr<bool>, DecodeError> {
    match value {
        ConfigValue::Null => Ok(Attr::Null),
        ConfigValue::Unknown => Ok(Attr::Unknown),
        ConfigValue::Known(Known::Scalar(Scalar::Bool(b))) => Ok(Attr::Known(*b)),
        other => Err(wrong_kind(path, "a bool", other)),
    }
}

fn decode_integer(value: &ConfigValue, path: AttributePath) -> Result<Attr<i64>, DecodeError> {
    match value {
        ConfigValue::Null => Ok(Attr::Null),
        ConfigValue::Unknown => Ok(Attr::Unknown),
        ConfigValue::Known(Known::Scalar(Scalar::Number(n))) => match n.as_i64() {
            Some(i) => Ok(Attr::Known(i)),
            None => Err(DecodeError::NotAnInteger {
                path,
                value: n.to_string(),
            }),
        },
        other => Err(wrong_kind(path, "a number", other)),
    }
}

fn wrong_kind(path: AttributePath, expected: &'static str, found: &ConfigValue) -> DecodeError {
    DecodeError::WrongKind {
        path,
        expected,
        found: found.kind_name(),
    }
}
