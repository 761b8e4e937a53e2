//! Type definitions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Reference to a named type declared in some program of the schema.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeRef {
    /// Name of the declaring program.
    pub program: String,
    /// Declared name of the type within that program.
    pub name: String,
}

impl TypeRef {
    pub fn new(program: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.program, self.name)
    }
}

/// A resolved IDL type.
///
/// Named types are references into the [`Schema`](crate::Schema); they are
/// never expanded inline, which keeps self-referencing records finite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Type {
    Void,
    Bool,
    I8,
    I16,
    I32,
    I64,
    Double,
    String,
    Binary,
    Uuid,
    Enum(TypeRef),
    Struct(TypeRef),
    Union(TypeRef),
    Exception(TypeRef),
    List {
        elem: Box<Type>,
    },
    Set {
        elem: Box<Type>,
    },
    Map {
        key: Box<Type>,
        value: Box<Type>,
    },
    /// A typedef alias. Transparent for every generator.
    Typedef {
        name: String,
        target: Box<Type>,
    },
}

impl Type {
    pub fn list(elem: Type) -> Self {
        Type::List {
            elem: Box::new(elem),
        }
    }

    pub fn set(elem: Type) -> Self {
        Type::Set {
            elem: Box::new(elem),
        }
    }

    pub fn map(key: Type, value: Type) -> Self {
        Type::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    pub fn typedef(name: impl Into<String>, target: Type) -> Self {
        Type::Typedef {
            name: name.into(),
            target: Box::new(target),
        }
    }

    /// Strip every typedef layer.
    pub fn resolved(&self) -> &Type {
        let mut ty = self;
        while let Type::Typedef { target, .. } = ty {
            ty = target;
        }
        ty
    }

    pub fn is_void(&self) -> bool {
        matches!(self.resolved(), Type::Void)
    }

    pub fn is_bool(&self) -> bool {
        matches!(self.resolved(), Type::Bool)
    }

    pub fn is_enum(&self) -> bool {
        matches!(self.resolved(), Type::Enum(_))
    }

    /// True for `string` and `binary`, which share a base type on the wire.
    pub fn is_string(&self) -> bool {
        matches!(self.resolved(), Type::String | Type::Binary)
    }

    /// The type reference of a named type, after typedef resolution.
    pub fn type_ref(&self) -> Option<&TypeRef> {
        match self.resolved() {
            Type::Enum(r) | Type::Struct(r) | Type::Union(r) | Type::Exception(r) => Some(r),
            _ => None,
        }
    }

    /// Human readable name used in diagnostics.
    pub fn describe(&self) -> String {
        match self {
            Type::Void => "void".to_string(),
            Type::Bool => "bool".to_string(),
            Type::I8 => "i8".to_string(),
            Type::I16 => "i16".to_string(),
            Type::I32 => "i32".to_string(),
            Type::I64 => "i64".to_string(),
            Type::Double => "double".to_string(),
            Type::String => "string".to_string(),
            Type::Binary => "binary".to_string(),
            Type::Uuid => "uuid".to_string(),
            Type::Enum(r) | Type::Struct(r) | Type::Union(r) | Type::Exception(r) => r.to_string(),
            Type::List { elem } => format!("list<{}>", elem.describe()),
            Type::Set { elem } => format!("set<{}>", elem.describe()),
            Type::Map { key, value } => format!("map<{},{}>", key.describe(), value.describe()),
            Type::Typedef { name, .. } => name.clone(),
        }
    }
}

/// Field requiredness.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Requiredness {
    Required,
    Optional,
    /// Neither keyword given: written when set, read if present.
    #[default]
    Default,
}
