use crate::error::BrowserinoError;
use serde::Serialize;
use serde_json::{Map, Number, Value};
use std::collections::BTreeMap;
use std::fmt;

/// A dynamically typed preference value
///
/// The preference store has no schema, but every value is one of these variants.
/// JSON `null` has no counterpart, so documents containing it are rejected on decode.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PrefValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Sequence(Vec<PrefValue>),
    Mapping(BTreeMap<String, PrefValue>),
}

impl PrefValue {
    /// Short type name, used in listings and log messages
    pub fn type_name(&self) -> &'static str {
        match self {
            PrefValue::Bool(_) => "bool",
            PrefValue::Int(_) => "int",
            PrefValue::Float(_) => "float",
            PrefValue::String(_) => "string",
            PrefValue::Sequence(_) => "sequence",
            PrefValue::Mapping(_) => "mapping",
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PrefValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            PrefValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[PrefValue]> {
        match self {
            PrefValue::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Parse a command-line argument: JSON when it parses as a representable
    /// value, otherwise the raw text as a string
    pub fn parse_arg(raw: &str) -> PrefValue {
        serde_json::from_str::<Value>(raw)
            .ok()
            .and_then(|json| PrefValue::try_from(json).ok())
            .unwrap_or_else(|| PrefValue::String(raw.to_string()))
    }
}

impl From<&str> for PrefValue {
    fn from(s: &str) -> Self {
        PrefValue::String(s.to_string())
    }
}

/// Deepest sequence/mapping nesting a value may have
///
/// serde_json refuses input nested 128 containers deep, and a settings document's
/// top-level object takes one of those levels.
pub const MAX_NESTING_DEPTH: usize = 126;

fn to_json(value: &PrefValue, depth: usize) -> Result<Value, BrowserinoError> {
    let is_container = matches!(value, PrefValue::Sequence(_) | PrefValue::Mapping(_));
    if is_container && depth >= MAX_NESTING_DEPTH {
        return Err(BrowserinoError::EncodeFailure(format!(
            "nested deeper than {} levels",
            MAX_NESTING_DEPTH
        )));
    }

    Ok(match value {
        PrefValue::Bool(b) => Value::Bool(*b),
        PrefValue::Int(n) => Value::Number(Number::from(*n)),
        // serde_json would silently write `null` for NaN/inf
        PrefValue::Float(n) => Value::Number(Number::from_f64(*n).ok_or_else(|| {
            BrowserinoError::EncodeFailure(format!("{} is not a JSON number", n))
        })?),
        PrefValue::String(s) => Value::String(s.clone()),
        PrefValue::Sequence(items) => Value::Array(
            items
                .iter()
                .map(|item| to_json(item, depth + 1))
                .collect::<Result<Vec<_>, _>>()?,
        ),
        PrefValue::Mapping(entries) => {
            let mut object = Map::new();
            for (key, item) in entries {
                object.insert(key.clone(), to_json(item, depth + 1)?);
            }
            Value::Object(object)
        }
    })
}

impl TryFrom<&PrefValue> for Value {
    type Error = BrowserinoError;

    fn try_from(value: &PrefValue) -> Result<Self, Self::Error> {
        to_json(value, 0)
    }
}

impl TryFrom<Value> for PrefValue {
    type Error = BrowserinoError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Ok(match value {
            Value::Null => {
                return Err(BrowserinoError::CorruptDocument(
                    "null is not a preference value".to_string(),
                ))
            }
            Value::Bool(b) => PrefValue::Bool(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => PrefValue::Int(i),
                None => PrefValue::Float(n.as_f64().ok_or_else(|| {
                    BrowserinoError::CorruptDocument(format!("unsupported number {}", n))
                })?),
            },
            Value::String(s) => PrefValue::String(s),
            Value::Array(items) => PrefValue::Sequence(
                items
                    .into_iter()
                    .map(PrefValue::try_from)
                    .collect::<Result<Vec<_>, _>>()?,
            ),
            Value::Object(object) => {
                let mut entries = BTreeMap::new();
                for (key, item) in object {
                    entries.insert(key, PrefValue::try_from(item)?);
                }
                PrefValue::Mapping(entries)
            }
        })
    }
}

impl fmt::Display for PrefValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match Value::try_from(self) {
            Ok(json) => write!(f, "{}", json),
            // Non-finite floats
            Err(_) => match self {
                PrefValue::Float(n) => write!(f, "{}", n),
                _ => write!(f, "{:?}", self),
            },
        }
    }
}
