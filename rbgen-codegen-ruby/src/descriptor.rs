//! Field metadata literals (`{:type => ::Thrift::Types::I32, ...}`).

use rbgen_codegen::CodeBuilder;
use rbgen_ir::{ConstValue, Type};

use crate::{Context, Error, Result, value::render_const_value};

/// Wire-level type tag of a serialized value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireType {
    Bool,
    Byte,
    I16,
    I32,
    I64,
    Double,
    String,
    Uuid,
    Struct,
    Map,
    Set,
    List,
}

impl WireType {
    /// Tag of a (typedef-resolved) type. Enums travel as `I32`.
    pub fn of(ty: &Type) -> Result<Self> {
        Ok(match ty.resolved() {
            Type::Bool => WireType::Bool,
            Type::I8 => WireType::Byte,
            Type::I16 => WireType::I16,
            Type::I32 | Type::Enum(_) => WireType::I32,
            Type::I64 => WireType::I64,
            Type::Double => WireType::Double,
            Type::String | Type::Binary => WireType::String,
            Type::Uuid => WireType::Uuid,
            Type::Struct(_) | Type::Union(_) | Type::Exception(_) => WireType::Struct,
            Type::Map { .. } => WireType::Map,
            Type::Set { .. } => WireType::Set,
            Type::List { .. } => WireType::List,
            Type::Void | Type::Typedef { .. } => {
                return Err(Error::unsupported_const_type(ty.describe()));
            }
        })
    }

    /// Ruby constant holding this tag.
    pub fn tag(self) -> &'static str {
        match self {
            WireType::Bool => "::Thrift::Types::BOOL",
            WireType::Byte => "::Thrift::Types::BYTE",
            WireType::I16 => "::Thrift::Types::I16",
            WireType::I32 => "::Thrift::Types::I32",
            WireType::I64 => "::Thrift::Types::I64",
            WireType::Double => "::Thrift::Types::DOUBLE",
            WireType::String => "::Thrift::Types::STRING",
            WireType::Uuid => "::Thrift::Types::UUID",
            WireType::Struct => "::Thrift::Types::STRUCT",
            WireType::Map => "::Thrift::Types::MAP",
            WireType::Set => "::Thrift::Types::SET",
            WireType::List => "::Thrift::Types::LIST",
        }
    }
}

/// Per-field extras of a descriptor. Nested element descriptors use the
/// default (all empty).
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldData<'f> {
    pub name: Option<&'f str>,
    pub default: Option<&'f ConstValue>,
    pub optional: bool,
}

/// Write the descriptor literal for `ty` at the current position.
///
/// Records and enums are linked by `:class`/`:enum_class` in the flat
/// layouts. Under autoload the target constant may not be loaded yet, so
/// they are named by string instead (`:class_name`/`:enum_name`).
pub fn render_field_data(
    ctx: &Context<'_>,
    out: &mut CodeBuilder,
    ty: &Type,
    data: FieldData<'_>,
) -> Result<()> {
    let resolved = ty.resolved();
    out.push_raw("{:type => ")
        .push_raw(WireType::of(resolved)?.tag());

    if let Some(name) = data.name {
        out.push_raw(&format!(", :name => '{name}'"));
    }

    if let Some(default) = data.default {
        out.push_raw(", :default => ");
        render_const_value(ctx, out, resolved, default)?;
    }

    match resolved {
        Type::Struct(r) | Type::Union(r) | Type::Exception(r) => {
            let full = ctx.full_type_name(r)?;
            if ctx.is_autoload() {
                out.push_raw(&format!(", :class_name => '{full}'"));
            } else {
                out.push_raw(&format!(", :class => {full}"));
            }
        }
        Type::List { elem } | Type::Set { elem } => {
            out.push_raw(", :element => ");
            render_field_data(ctx, out, elem, FieldData::default())?;
        }
        Type::Map { key, value } => {
            out.push_raw(", :key => ");
            render_field_data(ctx, out, key, FieldData::default())?;
            out.push_raw(", :value => ");
            render_field_data(ctx, out, value, FieldData::default())?;
        }
        Type::Binary => {
            out.push_raw(", :binary => true");
        }
        _ => {}
    }

    if data.optional {
        out.push_raw(", :optional => true");
    }

    if let Type::Enum(r) = resolved {
        let full = ctx.full_type_name(r)?;
        if ctx.is_autoload() {
            out.push_raw(&format!(", :enum_name => '{full}'"));
        } else {
            out.push_raw(&format!(", :enum_class => {full}"));
        }
    }

    out.push_raw("}");
    Ok(())
}
