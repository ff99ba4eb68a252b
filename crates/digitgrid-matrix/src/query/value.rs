//! Heterogeneous values with a numeric / non-numeric tag fixed at construction.

use std::borrow::Borrow;

use serde::{Deserialize, Serialize};

/// A value from a mixed collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Value {
    Int(i64),
    UInt(u64),
    Float(f64),
    /// Fixed-point decimal kept in its textual form, e.g. `"89.30"`.
    Decimal(String),
    Text(String),
    List(Vec<Value>),
    /// Any other composite value, identified by its kind name.
    Object { kind: String },
}

impl Value {
    pub fn decimal(text: impl Into<String>) -> Self {
        Self::Decimal(text.into())
    }

    pub fn object(kind: impl Into<String>) -> Self {
        Self::Object { kind: kind.into() }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            Self::Int(_) | Self::UInt(_) | Self::Float(_) | Self::Decimal(_)
        )
    }

    /// Composite values: lists and objects, not strings or numbers.
    pub fn is_composite(&self) -> bool {
        matches!(self, Self::List(_) | Self::Object { .. })
    }

    /// Grouping name; objects report their own kind.
    pub fn kind_name(&self) -> &str {
        match self {
            Self::Int(_) => "Int",
            Self::UInt(_) => "UInt",
            Self::Float(_) => "Float",
            Self::Decimal(_) => "Decimal",
            Self::Text(_) => "Text",
            Self::List(_) => "List",
            Self::Object { kind } => kind.as_str(),
        }
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(v.into())
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Self::UInt(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Self::List(v)
    }
}

/// Keep only numeric values, in order. Works on owned or borrowed values.
pub fn filter_numerics<I>(values: I) -> Vec<I::Item>
where
    I: IntoIterator,
    I::Item: Borrow<Value>,
{
    values
        .into_iter()
        .filter(|v| v.borrow().is_numeric())
        .collect()
}
