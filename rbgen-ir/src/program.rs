//! Program-level definitions.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{ConstValue, Requiredness, Type, TypeRef};

/// A compilation unit: one IDL file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub name: String,
    /// Names of included programs, in include order.
    #[serde(default)]
    pub includes: Vec<String>,
    /// Namespace declarations keyed by language (`rb`, `py`, ...).
    #[serde(default)]
    pub namespaces: IndexMap<String, String>,
    #[serde(default)]
    pub typedefs: Vec<Typedef>,
    #[serde(default)]
    pub enums: Vec<EnumDef>,
    #[serde(default)]
    pub consts: Vec<ConstDef>,
    /// Structs, unions and exceptions in declaration order.
    #[serde(default)]
    pub structs: Vec<StructDef>,
    #[serde(default)]
    pub services: Vec<Service>,
}

impl Program {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Namespace declared for `language`, or an empty string.
    pub fn namespace(&self, language: &str) -> &str {
        self.namespaces
            .get(language)
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn with_namespace(mut self, language: &str, namespace: impl Into<String>) -> Self {
        self.namespaces
            .insert(language.to_string(), namespace.into());
        self
    }

    pub fn with_include(mut self, program: impl Into<String>) -> Self {
        self.includes.push(program.into());
        self
    }

    pub fn with_enum(mut self, def: EnumDef) -> Self {
        self.enums.push(def);
        self
    }

    pub fn with_const(mut self, def: ConstDef) -> Self {
        self.consts.push(def);
        self
    }

    pub fn with_struct(mut self, def: StructDef) -> Self {
        self.structs.push(def);
        self
    }

    pub fn with_service(mut self, service: Service) -> Self {
        self.services.push(service);
        self
    }

    pub fn find_struct(&self, name: &str) -> Option<&StructDef> {
        self.structs.iter().find(|s| s.name == name)
    }

    pub fn find_enum(&self, name: &str) -> Option<&EnumDef> {
        self.enums.iter().find(|e| e.name == name)
    }

    pub fn find_service(&self, name: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.name == name)
    }
}

/// A typedef declaration. Generators never emit these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Typedef {
    pub name: String,
    #[serde(rename = "type")]
    pub target: Type,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumValue {
    pub name: String,
    pub value: i32,
    #[serde(default)]
    pub doc: Option<String>,
}

/// An enumeration. Names and values are unique, values need not be contiguous.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumDef {
    pub name: String,
    pub values: Vec<EnumValue>,
    #[serde(default)]
    pub doc: Option<String>,
}

impl EnumDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: Vec::new(),
            doc: None,
        }
    }

    pub fn value(mut self, name: impl Into<String>, value: i32) -> Self {
        self.values.push(EnumValue {
            name: name.into(),
            value,
            doc: None,
        });
        self
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn find_value(&self, name: &str) -> Option<&EnumValue> {
        self.values.iter().find(|v| v.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstDef {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: Type,
    pub value: ConstValue,
    #[serde(default)]
    pub doc: Option<String>,
}

impl ConstDef {
    pub fn new(name: impl Into<String>, ty: Type, value: ConstValue) -> Self {
        Self {
            name: name.into(),
            ty,
            value,
            doc: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StructKind {
    #[default]
    Struct,
    Union,
    Exception,
}

/// A record: struct, union or exception.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructDef {
    pub name: String,
    #[serde(default)]
    pub kind: StructKind,
    #[serde(default)]
    pub fields: Vec<Field>,
    #[serde(default)]
    pub doc: Option<String>,
}

impl StructDef {
    pub fn new(name: impl Into<String>, kind: StructKind) -> Self {
        Self {
            name: name.into(),
            kind,
            fields: Vec::new(),
            doc: None,
        }
    }

    pub fn structure(name: impl Into<String>) -> Self {
        Self::new(name, StructKind::Struct)
    }

    pub fn union(name: impl Into<String>) -> Self {
        Self::new(name, StructKind::Union)
    }

    pub fn exception(name: impl Into<String>) -> Self {
        Self::new(name, StructKind::Exception)
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn find_field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn is_exception(&self) -> bool {
        self.kind == StructKind::Exception
    }
}

/// A member of a record, argument list or exception list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub id: i32,
    pub name: String,
    #[serde(rename = "type")]
    pub ty: Type,
    #[serde(default)]
    pub requiredness: Requiredness,
    #[serde(default)]
    pub default: Option<ConstValue>,
    #[serde(default)]
    pub doc: Option<String>,
}

impl Field {
    pub fn new(id: i32, name: impl Into<String>, ty: Type) -> Self {
        Self {
            id,
            name: name.into(),
            ty,
            requiredness: Requiredness::Default,
            default: None,
            doc: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.requiredness = Requiredness::Required;
        self
    }

    pub fn optional(mut self) -> Self {
        self.requiredness = Requiredness::Optional;
        self
    }

    pub fn with_default(mut self, value: ConstValue) -> Self {
        self.default = Some(value);
        self
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }
}

/// An RPC function.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Function {
    pub name: String,
    #[serde(default = "void")]
    pub returns: Type,
    #[serde(default)]
    pub args: Vec<Field>,
    #[serde(default)]
    pub throws: Vec<Field>,
    #[serde(default)]
    pub oneway: bool,
    #[serde(default)]
    pub doc: Option<String>,
}

fn void() -> Type {
    Type::Void
}

impl Function {
    pub fn new(name: impl Into<String>, returns: Type) -> Self {
        Self {
            name: name.into(),
            returns,
            args: Vec::new(),
            throws: Vec::new(),
            oneway: false,
            doc: None,
        }
    }

    pub fn arg(mut self, field: Field) -> Self {
        self.args.push(field);
        self
    }

    pub fn throws(mut self, field: Field) -> Self {
        self.throws.push(field);
        self
    }

    pub fn oneway(mut self) -> Self {
        self.oneway = true;
        self
    }
}

/// A service, optionally extending another one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub name: String,
    #[serde(default)]
    pub extends: Option<TypeRef>,
    #[serde(default)]
    pub functions: Vec<Function>,
    #[serde(default)]
    pub doc: Option<String>,
}

impl Service {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extends: None,
            functions: Vec::new(),
            doc: None,
        }
    }

    pub fn extends(mut self, parent: TypeRef) -> Self {
        self.extends = Some(parent);
        self
    }

    pub fn function(mut self, function: Function) -> Self {
        self.functions.push(function);
        self
    }
}
