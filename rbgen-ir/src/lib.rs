//! Typed schema model for rbgen.
//!
//! This crate provides the definitions consumed by code generators once the
//! IDL has been parsed and type-checked by an upstream stage.
//!
//! # Architecture
//!
//! ```text
//! .thrift (IDL) → parser/type-checker (external) → schema.json → rbgen-ir → codegen
//! ```
//!
//! The schema is read-only for the generators: nothing in here validates
//! types, it only describes and looks them up.

mod program;
mod schema;
mod types;
mod value;

pub use program::{
    ConstDef, EnumDef, EnumValue, Field, Function, Program, Service, StructDef, StructKind,
    Typedef,
};
pub use schema::Schema;
pub use types::{Requiredness, Type, TypeRef};
pub use value::ConstValue;
