//! Structs, exceptions and unions.

use rbgen_codegen::CodeBuilder;
use rbgen_core::upcase;
use rbgen_ir::{Field, Requiredness, StructDef, StructKind};
use tracing::debug;

use crate::{
    Context, Error, Result,
    descriptor::{FieldData, render_field_data},
    header::write_doc,
};

const INVALID_DATA: &str =
    "raise ::Thrift::ProtocolException.new(::Thrift::ProtocolException::INVALID_DATA, ";

/// `class Name; end` so records may reference each other before definition.
pub fn write_forward_declaration(
    ctx: &Context<'_>,
    out: &mut CodeBuilder,
    def: &StructDef,
) -> Result<()> {
    let name = ctx.constant_name(&def.name)?;
    let parent = match def.kind {
        StructKind::Struct => "",
        StructKind::Union => " < ::Thrift::Union",
        StructKind::Exception => " < ::Thrift::Exception",
    };
    out.push_line(&format!("class {name}{parent}; end")).push_blank();
    Ok(())
}

/// Emit a record of any kind.
pub fn write_record(ctx: &Context<'_>, out: &mut CodeBuilder, def: &StructDef) -> Result<()> {
    match def.kind {
        StructKind::Union => write_union(ctx, out, def),
        StructKind::Struct | StructKind::Exception => write_struct(ctx, out, def),
    }
}

/// Emit a struct or exception class.
pub fn write_struct(ctx: &Context<'_>, out: &mut CodeBuilder, def: &StructDef) -> Result<()> {
    let name = ctx.constant_name(&def.name)?;
    debug!(name = %name, kind = ?def.kind, "emitting record");

    write_doc(out, def.doc.as_deref());
    if def.is_exception() {
        out.push_line(&format!("class {name} < ::Thrift::Exception"));
    } else {
        out.push_line(&format!("class {name}"));
    }
    out.push_indent()
        .push_line("include ::Thrift::Struct, ::Thrift::Struct_Union");

    if def.is_exception() {
        write_exception_constructor(out, def);
    }

    write_field_constants(out, &def.fields);
    write_field_table(ctx, out, &def.fields)?;
    write_struct_validator(ctx, out, &def.fields)?;

    out.push_line("::Thrift::Struct.generate_accessors self")
        .push_dedent()
        .push_line("end")
        .push_blank();
    Ok(())
}

/// Emit a union class with one factory method per member.
pub fn write_union(ctx: &Context<'_>, out: &mut CodeBuilder, def: &StructDef) -> Result<()> {
    let name = ctx.constant_name(&def.name)?;
    debug!(name = %name, "emitting union");

    write_doc(out, def.doc.as_deref());
    out.push_line(&format!("class {name} < ::Thrift::Union"))
        .push_indent()
        .push_line("include ::Thrift::Struct_Union");

    out.push_line("class << self").push_indent();
    for (i, field) in def.fields.iter().enumerate() {
        if i > 0 {
            out.push_blank();
        }
        out.push_line(&format!("def {}(val)", field.name))
            .push_line(&format!("  {name}.new(:{}, val)", field.name))
            .push_line("end");
    }
    out.push_dedent().push_line("end").push_blank();

    write_field_constants(out, &def.fields);
    write_field_table(ctx, out, &def.fields)?;
    write_union_validator(ctx, out, &def.fields)?;

    out.push_line("::Thrift::Union.generate_accessors self")
        .push_dedent()
        .push_line("end")
        .push_blank();
    Ok(())
}

/// `Exception.new("text")` support for exceptions with one string member.
fn write_exception_constructor(out: &mut CodeBuilder, def: &StructDef) {
    let [field] = def.fields.as_slice() else {
        return;
    };
    if !field.ty.is_string() {
        return;
    }
    out.push_line("def initialize(message=nil)")
        .push_indent()
        .push_line("super()")
        .push_line(&format!("self.{} = message", field.name))
        .push_dedent()
        .push_line("end")
        .push_blank();
    if field.name != "message" {
        out.push_line(&format!("def message; {} end", field.name))
            .push_blank();
    }
}

fn write_field_constants(out: &mut CodeBuilder, fields: &[Field]) {
    for field in fields {
        out.push_line(&format!("{} = {}", upcase(&field.name), field.id));
    }
    out.push_blank();
}

/// The `FIELDS` descriptor table and its `struct_fields` accessor.
fn write_field_table(ctx: &Context<'_>, out: &mut CodeBuilder, fields: &[Field]) -> Result<()> {
    out.push_line("FIELDS = {").push_indent();
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push_raw(",\n");
        }
        write_doc(out, field.doc.as_deref());
        out.push_indented(&format!("{} => ", upcase(&field.name)));
        let data = FieldData {
            name: Some(&field.name),
            default: field.default.as_ref(),
            optional: field.requiredness == Requiredness::Optional,
        };
        render_field_data(ctx, out, &field.ty, data)?;
    }
    out.push_dedent()
        .push_raw("\n")
        .push_line("}")
        .push_blank()
        .push_line("def struct_fields; FIELDS; end")
        .push_blank();
    Ok(())
}

fn write_struct_validator(ctx: &Context<'_>, out: &mut CodeBuilder, fields: &[Field]) -> Result<()> {
    out.push_line("def validate").push_indent();

    for field in fields
        .iter()
        .filter(|f| f.requiredness == Requiredness::Required)
    {
        let check = if field.ty.is_bool() {
            format!("if @{}.nil?", field.name)
        } else {
            format!("unless @{}", field.name)
        };
        out.push_line(&format!(
            "{INVALID_DATA}'Required field {} is unset!') {check}",
            field.name
        ));
    }

    for field in fields.iter().filter(|f| f.ty.is_enum()) {
        let enum_name = enum_constant(ctx, field)?;
        out.push_line(&format!(
            "unless @{0}.nil? || {enum_name}::VALID_VALUES.include?(@{0})",
            field.name
        ))
        .push_indent()
        .push_line(&format!(
            "{INVALID_DATA}'Invalid value of field {}!')",
            field.name
        ))
        .push_dedent()
        .push_line("end");
    }

    out.push_dedent().push_line("end").push_blank();
    Ok(())
}

fn write_union_validator(ctx: &Context<'_>, out: &mut CodeBuilder, fields: &[Field]) -> Result<()> {
    out.push_line("def validate")
        .push_indent()
        .push_line(&format!(
            "{INVALID_DATA}'Union fields are not set.') if get_set_field.nil? || get_value.nil?"
        ));

    for field in fields.iter().filter(|f| f.ty.is_enum()) {
        let enum_name = enum_constant(ctx, field)?;
        out.push_line(&format!("if get_set_field == :{}", field.name))
            .push_line(&format!(
                "  {INVALID_DATA}'Invalid value of field {}!') unless {enum_name}::VALID_VALUES.include?(get_value)",
                field.name
            ))
            .push_line("end");
    }

    out.push_dedent().push_line("end").push_blank();
    Ok(())
}

fn enum_constant(ctx: &Context<'_>, field: &Field) -> Result<String> {
    let r = field
        .ty
        .type_ref()
        .ok_or_else(|| Error::unhandled_type(field.ty.describe(), "enum validation"))?;
    ctx.full_type_name(r)
}
