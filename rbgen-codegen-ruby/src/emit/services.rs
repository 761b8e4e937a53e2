//! Service client, processor and per-function helper records.

use rbgen_codegen::CodeBuilder;
use rbgen_ir::{Field, Function, Service, StructDef, TypeRef};
use tracing::debug;

use crate::{Context, Error, Result, emit::structs::write_struct, header::write_doc};

/// Record carrying a function's arguments: `<fn>_args`.
pub fn args_record(function: &Function) -> StructDef {
    let mut record = StructDef::structure(format!("{}_args", function.name));
    record.fields = function.args.clone();
    record
}

/// Record carrying a function's outcome: `<fn>_result`.
///
/// Holds `success` (id 0) unless the function returns void, then one field
/// per declared exception.
pub fn result_record(function: &Function) -> StructDef {
    let mut record = StructDef::structure(format!("{}_result", function.name));
    if !function.returns.is_void() {
        record
            .fields
            .push(Field::new(0, "success", function.returns.clone()));
    }
    record.fields.extend(function.throws.iter().cloned());
    record
}

/// ` < ::Parent::<unit>` for services that extend another one.
fn parent_clause(ctx: &Context<'_>, service: &Service, unit: &str) -> Result<String> {
    match &service.extends {
        Some(parent) => Ok(format!(" < {}::{unit}", parent_constant(ctx, parent)?)),
        None => Ok(String::new()),
    }
}

/// Fully qualified constant of an extended service.
pub fn parent_constant(ctx: &Context<'_>, parent: &TypeRef) -> Result<String> {
    ctx.schema
        .find_service(parent)
        .ok_or_else(|| Error::unresolved("service", parent.to_string()))?;
    ctx.full_type_name(parent)
}

fn argument_list(fields: &[Field]) -> String {
    fields
        .iter()
        .map(|f| f.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Emit the `Client` class.
pub fn write_client(ctx: &Context<'_>, out: &mut CodeBuilder, service: &Service) -> Result<()> {
    debug!(service = %service.name, "emitting client");
    let parent = parent_clause(ctx, service, "Client")?;
    out.push_line(&format!("class Client{parent}"))
        .push_indent()
        .push_line("include ::Thrift::Client")
        .push_blank();

    for function in &service.functions {
        write_client_function(ctx, out, function)?;
    }

    out.push_dedent().push_line("end").push_blank();
    Ok(())
}

fn write_client_function(ctx: &Context<'_>, out: &mut CodeBuilder, function: &Function) -> Result<()> {
    let name = &function.name;
    let args = argument_list(&function.args);

    write_doc(out, function.doc.as_deref());
    out.push_line(&format!("def {name}({args})"))
        .push_indent()
        .push_line(&format!("send_{name}({args})"));
    if !function.oneway {
        let ret = if function.returns.is_void() { "" } else { "return " };
        out.push_line(&format!("{ret}recv_{name}()"));
    }
    out.push_dedent().push_line("end").push_blank();

    let args_name = ctx.constant_name(&format!("{name}_args"))?;
    let send = if function.oneway {
        "send_oneway_message"
    } else {
        "send_message"
    };
    let named_args: String = function
        .args
        .iter()
        .map(|f| format!(", :{0} => {0}", f.name))
        .collect();
    out.push_line(&format!("def send_{name}({args})"))
        .push_indent()
        .push_line(&format!("{send}('{name}', {args_name}{named_args})"))
        .push_dedent()
        .push_line("end")
        .push_blank();

    if function.oneway {
        return Ok(());
    }

    let result_name = ctx.constant_name(&format!("{name}_result"))?;
    out.push_line(&format!("def recv_{name}()"))
        .push_indent()
        .push_line("fname, mtype, rseqid = receive_message_begin()")
        .push_line("handle_exception(mtype)")
        .push_line("if reply_seqid(rseqid)==false")
        .push_line("  raise \"seqid reply failed\"")
        .push_line("end")
        .push_line(&format!("result = receive_message({result_name})"));
    if !function.returns.is_void() {
        out.push_line("return result.success unless result.success.nil?");
    }
    for exception in &function.throws {
        out.push_line(&format!(
            "raise result.{0} unless result.{0}.nil?",
            exception.name
        ));
    }
    if function.returns.is_void() {
        out.push_line("return");
    } else {
        out.push_line(&format!(
            "raise ::Thrift::ApplicationException.new(::Thrift::ApplicationException::MISSING_RESULT, '{name} failed: unknown result')"
        ));
    }
    out.push_dedent().push_line("end").push_blank();
    Ok(())
}

/// Emit the `Processor` class.
pub fn write_processor(ctx: &Context<'_>, out: &mut CodeBuilder, service: &Service) -> Result<()> {
    debug!(service = %service.name, "emitting processor");
    let parent = parent_clause(ctx, service, "Processor")?;
    out.push_line(&format!("class Processor{parent}"))
        .push_indent()
        .push_line("include ::Thrift::Processor")
        .push_blank();

    for function in &service.functions {
        write_process_function(ctx, out, function)?;
    }

    out.push_dedent().push_line("end").push_blank();
    Ok(())
}

fn write_process_function(ctx: &Context<'_>, out: &mut CodeBuilder, function: &Function) -> Result<()> {
    let name = &function.name;
    let args_name = ctx.constant_name(&format!("{name}_args"))?;
    let result_name = ctx.constant_name(&format!("{name}_result"))?;
    let catches = !function.oneway && !function.throws.is_empty();

    out.push_line(&format!("def process_{name}(seqid, iprot, oprot)"))
        .push_indent()
        .push_line(&format!("args = read_args(iprot, {args_name})"));
    if !function.oneway {
        out.push_line(&format!("result = {result_name}.new()"));
    }
    if catches {
        out.push_line("begin").push_indent();
    }

    let assign = if !function.oneway && !function.returns.is_void() {
        "result.success = "
    } else {
        ""
    };
    let call_args = function
        .args
        .iter()
        .map(|f| format!("args.{}", f.name))
        .collect::<Vec<_>>()
        .join(", ");
    out.push_line(&format!("{assign}@handler.{name}({call_args})"));

    if catches {
        out.push_dedent();
        for exception in &function.throws {
            let r = exception
                .ty
                .type_ref()
                .ok_or_else(|| Error::unhandled_type(exception.ty.describe(), "exception handler"))?;
            out.push_line(&format!(
                "rescue {} => {}",
                ctx.full_type_name(r)?,
                exception.name
            ))
            .push_line(&format!("  result.{0} = {0}", exception.name));
        }
        out.push_line("end");
    }

    if function.oneway {
        out.push_line("return");
    } else {
        out.push_line(&format!("write_result(result, oprot, '{name}', seqid)"));
    }
    out.push_dedent().push_line("end").push_blank();
    Ok(())
}

/// The `_args` and `_result` records of every function, in declaration
/// order, under a helper banner.
pub fn write_helpers(ctx: &Context<'_>, out: &mut CodeBuilder, service: &Service) -> Result<()> {
    out.push_line("# HELPER FUNCTIONS AND STRUCTURES").push_blank();
    for function in &service.functions {
        write_struct(ctx, out, &args_record(function))?;
        write_struct(ctx, out, &result_record(function))?;
    }
    Ok(())
}
