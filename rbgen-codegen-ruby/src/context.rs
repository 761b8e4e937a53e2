//! Run-wide lookup state shared by every emitter.

use std::rc::Rc;

use rbgen_ir::{EnumDef, Program, Schema, StructDef, StructKind, Type, TypeRef};

use crate::{
    Error, GeneratorOptions, Layout, Result,
    namespace::{Namespace, NamespaceResolver},
    naming::{NamingPolicy, file_name},
};

/// Schema, options and memoized namespaces for one generation run.
#[derive(Debug)]
pub struct Context<'a> {
    pub schema: &'a Schema,
    pub options: GeneratorOptions,
    naming: NamingPolicy,
    namespaces: NamespaceResolver,
}

impl<'a> Context<'a> {
    pub fn new(schema: &'a Schema, options: GeneratorOptions) -> Self {
        let naming = options.layout.naming();
        Self {
            schema,
            options,
            naming,
            namespaces: NamespaceResolver::new(naming),
        }
    }

    pub fn layout(&self) -> Layout {
        self.options.layout
    }

    pub fn is_autoload(&self) -> bool {
        self.options.layout.is_autoload()
    }

    /// Ruby constant name for a schema identifier under the active layout.
    pub fn constant_name(&self, name: &str) -> Result<String> {
        self.naming.constant_name(name)
    }

    pub fn namespace(&self, program: &Program) -> Result<Rc<Namespace>> {
        self.namespaces.resolve(program)
    }

    pub fn program(&self, name: &str) -> Result<&'a Program> {
        self.schema
            .program(name)
            .ok_or_else(|| Error::unresolved("program", name))
    }

    /// Namespace of the program declaring `r`.
    pub fn namespace_of(&self, r: &TypeRef) -> Result<Rc<Namespace>> {
        self.namespace(self.program(&r.program)?)
    }

    /// Fully qualified constant, e.g. `::Shop::Point`.
    pub fn full_type_name(&self, r: &TypeRef) -> Result<String> {
        let namespace = self.namespace_of(r)?;
        Ok(format!(
            "::{}{}",
            namespace.constant_prefix,
            self.constant_name(&r.name)?
        ))
    }

    /// Output path of a constant declared in `program`.
    pub fn symbol_path(&self, program: &Program, constant: &str) -> Result<String> {
        Ok(format!(
            "{}{}",
            self.namespace(program)?.path_prefix,
            file_name(constant)
        ))
    }

    /// Record definition behind a struct, union or exception type.
    pub fn find_record(&self, ty: &Type) -> Result<&'a StructDef> {
        let (r, kind) = match ty.resolved() {
            Type::Struct(r) => (r, StructKind::Struct),
            Type::Union(r) => (r, StructKind::Union),
            Type::Exception(r) => (r, StructKind::Exception),
            other => return Err(Error::unhandled_type(other.describe(), "record lookup")),
        };
        let Some(def) = self.schema.find_struct(r) else {
            if self.schema.find_enum(r).is_some() {
                return Err(Error::unhandled_type(ty.describe(), "record lookup"));
            }
            return Err(Error::unresolved("struct", r.to_string()));
        };
        if def.kind != kind {
            return Err(Error::unhandled_type(ty.describe(), "record lookup"));
        }
        Ok(def)
    }

    /// Enum definition behind `r`; a record of that name is a variant mismatch.
    pub fn find_enum(&self, r: &TypeRef) -> Result<&'a EnumDef> {
        if let Some(def) = self.schema.find_enum(r) {
            return Ok(def);
        }
        if self.schema.find_struct(r).is_some() {
            return Err(Error::unhandled_type(format!("enum {r}"), "enum lookup"));
        }
        Err(Error::unresolved("enum", r.to_string()))
    }
}
