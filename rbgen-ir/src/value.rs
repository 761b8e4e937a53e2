//! Constant literal values.

use serde::{Deserialize, Serialize};

/// A literal as written in the IDL.
///
/// Values are typed only when rendered against a [`Type`](crate::Type). Map
/// entries keep the order the upstream stage stored them in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstValue {
    Integer(i64),
    Double(f64),
    String(String),
    List(Vec<ConstValue>),
    Map(Vec<(ConstValue, ConstValue)>),
    /// A bare identifier, e.g. an enum member `Color.RED`.
    Identifier(String),
}

impl ConstValue {
    pub fn string(s: impl Into<String>) -> Self {
        ConstValue::String(s.into())
    }

    pub fn identifier(s: impl Into<String>) -> Self {
        ConstValue::Identifier(s.into())
    }

    /// Integer view of the literal, as used for bools, integers and enums.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            ConstValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// String view of the literal, as used for struct literal keys.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConstValue::String(s) | ConstValue::Identifier(s) => Some(s),
            _ => None,
        }
    }

    /// Short name of the literal kind, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            ConstValue::Integer(_) => "integer",
            ConstValue::Double(_) => "double",
            ConstValue::String(_) => "string",
            ConstValue::List(_) => "list",
            ConstValue::Map(_) => "map",
            ConstValue::Identifier(_) => "identifier",
        }
    }
}
