//! Entity emitters.
//!
//! Each emitter writes one schema entity into an open [`CodeBuilder`],
//! leaving file headers and module scopes to the layout that owns the file.
//!
//! [`CodeBuilder`]: rbgen_codegen::CodeBuilder

pub mod consts;
pub mod enums;
pub mod services;
pub mod structs;
