//! Dynamically typed field values.

use std::fmt;

use crate::schema::FieldKind;
use crate::types::Timestamp;

/// One field value, tagged with its semantic kind.
///
/// A value stored in a row slot always matches the kind the schema declares
/// for that slot; dynamic writes through
/// [`UsAccident::set_value`](crate::UsAccident::set_value) enforce the match
/// and typed accessors guarantee it by construction.
#[derive(Debug, Clone)]
pub enum Value {
    Int(i32),
    Float(f64),
    Bool(bool),
    Text(String),
    Timestamp(Timestamp),
}

impl Value {
    /// The schema kind this value belongs to.
    pub fn kind(&self) -> FieldKind {
        match self {
            Value::Int(_) => FieldKind::Int,
            Value::Float(_) => FieldKind::Float,
            Value::Bool(_) => FieldKind::Bool,
            Value::Text(_) => FieldKind::Text,
            Value::Timestamp(_) => FieldKind::Timestamp,
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(v) => Some(v.as_str()),
            _ => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<Timestamp> {
        match self {
            Value::Timestamp(v) => Some(*v),
            _ => None,
        }
    }
}

/// Floats compare by IEEE-754 bit pattern: NaN equals NaN and `0.0` differs
/// from `-0.0`. Rows that carry NaN through a binary round trip therefore
/// still compare equal, and value equality stays a true equivalence
/// relation.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a.to_bits() == b.to_bits(),
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::Timestamp(a), Value::Timestamp(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

/// Renders the value the way the text codec spells it: `true`/`false` for
/// booleans, the timestamp literal layout for timestamps, plain digits for
/// numbers, the text itself for strings.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Bool(v) => write!(f, "{v}"),
            Value::Text(v) => f.write_str(v),
            Value::Timestamp(v) => write!(f, "{v}"),
        }
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<Timestamp> for Value {
    fn from(v: Timestamp) -> Self {
        Value::Timestamp(v)
    }
}
