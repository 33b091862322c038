//! Form field value objects

use serde::{Deserialize, Serialize};

/// Type-safe field values
///
/// Serializes untagged, so a value appears on the wire as a plain string,
/// boolean, or array of strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Text(String),
    Multi(Vec<String>),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Discriminant of a [`FieldValue`], used in type-mismatch errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Bool,
    Multi,
}

/// A typed extraction was attempted on a value of a different kind
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected {expected:?} field value, found {found:?}")]
pub struct TypeError {
    pub expected: FieldKind,
    pub found: FieldKind,
}

impl FieldValue {
    /// The kind of this value
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Text(_) => FieldKind::Text,
            FieldValue::Bool(_) => FieldKind::Bool,
            FieldValue::Multi(_) => FieldKind::Multi,
        }
    }

    /// Get the text value (returns empty string for other kinds)
    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(s) => s,
            _ => "",
        }
    }

    /// Get the boolean value (returns false for other kinds)
    pub fn as_bool(&self) -> bool {
        match self {
            FieldValue::Bool(b) => *b,
            _ => false,
        }
    }

    /// Get the selected values (returns an empty slice for other kinds)
    pub fn as_multi(&self) -> &[String] {
        match self {
            FieldValue::Multi(v) => v,
            _ => &[],
        }
    }

    /// Truthiness as checkbox toggling sees it: non-empty text is truthy,
    /// a selection list is always truthy, booleans are themselves.
    pub fn is_truthy(&self) -> bool {
        match self {
            FieldValue::Text(s) => !s.is_empty(),
            FieldValue::Bool(b) => *b,
            FieldValue::Multi(_) => true,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(value: Vec<String>) -> Self {
        FieldValue::Multi(value)
    }
}

impl TryFrom<FieldValue> for String {
    type Error = TypeError;

    fn try_from(value: FieldValue) -> Result<Self, Self::Error> {
        match value {
            FieldValue::Text(s) => Ok(s),
            other => Err(TypeError {
                expected: FieldKind::Text,
                found: other.kind(),
            }),
        }
    }
}

impl TryFrom<FieldValue> for bool {
    type Error = TypeError;

    fn try_from(value: FieldValue) -> Result<Self, Self::Error> {
        match value {
            FieldValue::Bool(b) => Ok(b),
            other => Err(TypeError {
                expected: FieldKind::Bool,
                found: other.kind(),
            }),
        }
    }
}

impl TryFrom<FieldValue> for Vec<String> {
    type Error = TypeError;

    fn try_from(value: FieldValue) -> Result<Self, Self::Error> {
        match value {
            FieldValue::Multi(v) => Ok(v),
            other => Err(TypeError {
                expected: FieldKind::Multi,
                found: other.kind(),
            }),
        }
    }
}
