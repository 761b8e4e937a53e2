use rbgen_codegen::{CodeBuilder, FileEntry};
use rbgen_core::underscore;
use rbgen_ir::{Program, Service};
use tracing::debug;

use crate::{
    Context, Layout, Result,
    emit::{
        consts::write_const,
        enums::write_enum,
        services::{write_client, write_helpers, write_processor},
        structs::{write_forward_declaration, write_record},
    },
    header::{autogen_comment, begin_namespace, end_namespace, require, require_thrift},
};

/// Files of one program: `<program>_types.rb`, `<program>_constants.rb` and
/// one `<service>.rb` per service.
pub fn emit_program(ctx: &Context<'_>, program: &Program) -> Result<Vec<FileEntry>> {
    let prefix = require_prefix(ctx, program)?;
    let base = underscore(&program.name);

    let mut files = vec![
        FileEntry::new(
            format!("{prefix}{base}_types.rb"),
            types_file(ctx, program)?,
        ),
        FileEntry::new(
            format!("{prefix}{base}_constants.rb"),
            constants_file(ctx, program, &prefix)?,
        ),
    ];
    for service in &program.services {
        files.push(FileEntry::new(
            format!("{prefix}{}.rb", underscore(&service.name)),
            service_file(ctx, program, service, &prefix)?,
        ));
    }
    Ok(files)
}

/// Directory (and require) prefix of a program's files.
fn require_prefix(ctx: &Context<'_>, program: &Program) -> Result<String> {
    Ok(match ctx.layout() {
        Layout::Namespaced => ctx.namespace(program)?.path_prefix.clone(),
        Layout::Flat | Layout::Autoload => String::new(),
    })
}

fn types_file(ctx: &Context<'_>, program: &Program) -> Result<String> {
    let namespace = ctx.namespace(program)?;
    let mut out = CodeBuilder::ruby();
    out.push_raw(&autogen_comment())
        .push_blank()
        .push_raw(require_thrift(ctx.options.rubygems));
    for include in &program.includes {
        let included = ctx.program(include)?;
        out.push_raw(&require(&format!(
            "{}{}_types",
            require_prefix(ctx, included)?,
            underscore(&included.name)
        )));
    }
    if !program.includes.is_empty() {
        out.push_blank();
    }
    out.push_blank();
    begin_namespace(&mut out, &namespace);

    for def in &program.enums {
        write_enum(ctx, &mut out, def)?;
    }
    for def in &program.structs {
        write_forward_declaration(ctx, &mut out, def)?;
    }
    for def in &program.structs {
        write_record(ctx, &mut out, def)?;
    }

    end_namespace(&mut out, &namespace);
    Ok(out.build())
}

fn constants_file(ctx: &Context<'_>, program: &Program, prefix: &str) -> Result<String> {
    let namespace = ctx.namespace(program)?;
    let mut out = CodeBuilder::ruby();
    out.push_raw(&autogen_comment())
        .push_blank()
        .push_raw(require_thrift(ctx.options.rubygems))
        .push_raw(&require(&format!(
            "{prefix}{}_types",
            underscore(&program.name)
        )))
        .push_blank();
    begin_namespace(&mut out, &namespace);

    for def in &program.consts {
        write_const(ctx, &mut out, def)?;
    }

    end_namespace(&mut out, &namespace);
    Ok(out.build())
}

fn service_file(
    ctx: &Context<'_>,
    program: &Program,
    service: &Service,
    prefix: &str,
) -> Result<String> {
    debug!(service = %service.name, "emitting service file");
    let namespace = ctx.namespace(program)?;
    let mut out = CodeBuilder::ruby();
    out.push_raw(&autogen_comment())
        .push_blank()
        .push_raw(require_thrift(ctx.options.rubygems));
    if let Some(parent) = &service.extends {
        let parent_prefix = match ctx.layout() {
            Layout::Namespaced => ctx.namespace_of(parent)?.path_prefix.clone(),
            Layout::Flat | Layout::Autoload => prefix.to_string(),
        };
        out.push_raw(&require(&format!(
            "{parent_prefix}{}",
            underscore(&parent.name)
        )));
    }
    out.push_raw(&require(&format!(
        "{prefix}{}_types",
        underscore(&program.name)
    )))
    .push_blank();

    begin_namespace(&mut out, &namespace);
    out.push_line(&format!("module {}", ctx.constant_name(&service.name)?))
        .push_indent();
    write_client(ctx, &mut out, service)?;
    write_processor(ctx, &mut out, service)?;
    write_helpers(ctx, &mut out, service)?;
    out.push_dedent().push_line("end").push_blank();
    end_namespace(&mut out, &namespace);
    Ok(out.build())
}

#[cfg(test)]
mod tests {
    use rbgen_ir::{Schema, TypeRef};

    use super::*;
    use crate::GeneratorOptions;

    fn paths(layout: Layout) -> Vec<String> {
        let schema = Schema::new(vec![
            Program::new("SharedTypes")
                .with_namespace("rb", "acme.shared")
                .with_service(Service::new("BaseService")),
        ]);
        let options = GeneratorOptions {
            layout,
            ..Default::default()
        };
        let ctx = Context::new(&schema, options);
        emit_program(&ctx, &schema.programs[0])
            .unwrap()
            .into_iter()
            .map(|f| f.path)
            .collect()
    }

    #[test]
    fn test_flat_paths() {
        assert_eq!(
            paths(Layout::Flat),
            vec![
                "shared_types_types.rb",
                "shared_types_constants.rb",
                "base_service.rb"
            ]
        );
    }

    #[test]
    fn test_namespaced_paths() {
        assert_eq!(
            paths(Layout::Namespaced),
            vec![
                "acme/shared/shared_types_types.rb",
                "acme/shared/shared_types_constants.rb",
                "acme/shared/base_service.rb"
            ]
        );
    }

    #[test]
    fn test_extends_require_uses_parent_namespace() {
        let schema = Schema::new(vec![
            Program::new("base")
                .with_namespace("rb", "core")
                .with_service(Service::new("BaseService")),
            Program::new("calc")
                .with_namespace("rb", "calc")
                .with_include("base")
                .with_service(
                    Service::new("Calculator").extends(TypeRef::new("base", "BaseService")),
                ),
        ]);
        let options = GeneratorOptions {
            layout: Layout::Namespaced,
            ..Default::default()
        };
        let ctx = Context::new(&schema, options);
        let files = emit_program(&ctx, &schema.programs[1]).unwrap();

        let types = &files[0].content;
        assert!(types.contains("require 'thrift'\nrequire 'core/base_types'\n\n\nmodule Calc\n"));

        let service = &files[2];
        assert_eq!(service.path, "calc/calculator.rb");
        assert!(service.content.contains(
            "require 'thrift'\nrequire 'core/base_service'\nrequire 'calc/calc_types'\n\n"
        ));
        assert!(service.content.contains("class Client < ::Core::BaseService::Client\n"));
    }
}
