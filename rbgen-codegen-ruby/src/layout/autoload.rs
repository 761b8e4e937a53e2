use rbgen_codegen::FileEntry;
use rbgen_core::underscore;
use rbgen_ir::{Program, Service};

use crate::{
    Context, Result,
    autoload::{AutoloadRegistry, Unit},
    emit::{
        consts::write_const,
        enums::write_enum,
        services::{args_record, result_record, write_client, write_processor},
        structs::{write_record, write_struct},
    },
    naming::file_name,
};

/// One unit per enum, record, constant and service part of `program`.
pub fn emit_program(
    ctx: &Context<'_>,
    registry: &mut AutoloadRegistry,
    program: &Program,
) -> Result<Vec<FileEntry>> {
    let prefix = ctx.namespace(program)?.constant_prefix.clone();
    let mut files = Vec::new();

    for def in &program.enums {
        let name = ctx.constant_name(&def.name)?;
        let mut unit = Unit::open(
            ctx,
            registry,
            program,
            &qualified(program, "enum", &def.name),
            &format!("{prefix}{name}"),
            &ctx.symbol_path(program, &name)?,
        )?;
        write_enum(ctx, unit.out(), def)?;
        files.push(unit.close());
    }

    for def in &program.structs {
        let name = ctx.constant_name(&def.name)?;
        let mut unit = Unit::open(
            ctx,
            registry,
            program,
            &qualified(program, "struct", &def.name),
            &format!("{prefix}{name}"),
            &ctx.symbol_path(program, &name)?,
        )?;
        write_record(ctx, unit.out(), def)?;
        files.push(unit.close());
    }

    for def in &program.consts {
        let name = ctx.constant_name(&def.name)?;
        let mut unit = Unit::open(
            ctx,
            registry,
            program,
            &qualified(program, "const", &def.name),
            &format!("{prefix}{name}"),
            &ctx.symbol_path(program, &name)?,
        )?;
        write_const(ctx, unit.out(), def)?;
        files.push(unit.close());
    }

    for service in &program.services {
        emit_service(ctx, registry, program, service, &mut files)?;
    }

    Ok(files)
}

/// Marker module, `Client`, `Processor`, and an args/result pair per
/// function, each in its own file under `<service>/`.
fn emit_service(
    ctx: &Context<'_>,
    registry: &mut AutoloadRegistry,
    program: &Program,
    service: &Service,
    files: &mut Vec<FileEntry>,
) -> Result<()> {
    let service_name = ctx.constant_name(&service.name)?;
    let namespace = ctx.namespace(program)?;
    let symbol = format!("{}{service_name}", namespace.constant_prefix);
    let base_path = format!("{}{}/", namespace.path_prefix, underscore(&service_name));
    let schema_name = qualified(program, "service", &service.name);

    let unit = Unit::open_service(
        ctx,
        registry,
        program,
        &service_name,
        &schema_name,
        &symbol,
        &ctx.symbol_path(program, &service_name)?,
    )?;
    files.push(unit.close());

    let mut unit = Unit::open_service(
        ctx,
        registry,
        program,
        &service_name,
        &format!("{schema_name}.Client"),
        &format!("{symbol}::Client"),
        &format!("{base_path}client.rb"),
    )?;
    write_client(ctx, unit.out(), service)?;
    files.push(unit.close());

    let mut unit = Unit::open_service(
        ctx,
        registry,
        program,
        &service_name,
        &format!("{schema_name}.Processor"),
        &format!("{symbol}::Processor"),
        &format!("{base_path}processor.rb"),
    )?;
    write_processor(ctx, unit.out(), service)?;
    files.push(unit.close());

    for function in &service.functions {
        for record in [args_record(function), result_record(function)] {
            let name = ctx.constant_name(&record.name)?;
            let mut unit = Unit::open_service(
                ctx,
                registry,
                program,
                &service_name,
                &format!("{schema_name}.{}", record.name),
                &format!("{symbol}::{name}"),
                &format!("{base_path}{}", file_name(&name)),
            )?;
            write_struct(ctx, unit.out(), &record)?;
            files.push(unit.close());
        }
    }
    Ok(())
}

/// Schema-level identity of a declaration, e.g. `tutorial.struct.Work`.
///
/// The kind keeps a struct and a constant sharing a name apart, so they
/// collide on their ruby symbol instead of passing as one entity.
fn qualified(program: &Program, kind: &str, name: &str) -> String {
    format!("{}.{kind}.{name}", program.name)
}
