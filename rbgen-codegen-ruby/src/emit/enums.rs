use rbgen_codegen::CodeBuilder;
use rbgen_core::capitalize;
use rbgen_ir::EnumDef;
use tracing::debug;

use crate::{Context, Result, header::write_doc};

/// Emit an enum as a module of integer constants plus lookup tables.
///
/// Member names are capitalized (first letter only) in every layout.
pub fn write_enum(ctx: &Context<'_>, out: &mut CodeBuilder, def: &EnumDef) -> Result<()> {
    let name = ctx.constant_name(&def.name)?;
    debug!(name = %name, "emitting enum");

    write_doc(out, def.doc.as_deref());
    out.push_line(&format!("module {name}")).push_indent();

    for value in &def.values {
        write_doc(out, value.doc.as_deref());
        out.push_line(&format!("{} = {}", capitalize(&value.name), value.value));
    }

    let value_map = def
        .values
        .iter()
        .map(|v| format!("{} => \"{}\"", v.value, capitalize(&v.name)))
        .collect::<Vec<_>>()
        .join(", ");
    out.push_line(&format!("VALUE_MAP = {{{value_map}}}"));

    let valid = def
        .values
        .iter()
        .map(|v| capitalize(&v.name))
        .collect::<Vec<_>>()
        .join(", ");
    out.push_line(&format!("VALID_VALUES = Set.new([{valid}]).freeze"));

    out.push_dedent().push_line("end").push_blank();
    Ok(())
}

#[cfg(test)]
mod tests {
    use rbgen_ir::{Program, Schema};

    use super::*;
    use crate::GeneratorOptions;

    #[test]
    fn test_enum_module() {
        let schema = Schema::new(vec![Program::new("t")]);
        let ctx = Context::new(&schema, GeneratorOptions::default());
        let def = EnumDef::new("Color")
            .value("RED", 0)
            .value("green", 1)
            .value("BLUE", 5);

        let mut out = CodeBuilder::ruby();
        write_enum(&ctx, &mut out, &def).unwrap();
        assert_eq!(
            out.build(),
            "module Color\n  RED = 0\n  Green = 1\n  BLUE = 5\n  \
             VALUE_MAP = {0 => \"RED\", 1 => \"Green\", 5 => \"BLUE\"}\n  \
             VALID_VALUES = Set.new([RED, Green, BLUE]).freeze\nend\n\n"
        );
    }

    #[test]
    fn test_empty_enum() {
        let schema = Schema::new(vec![Program::new("t")]);
        let ctx = Context::new(&schema, GeneratorOptions::default());
        let mut out = CodeBuilder::ruby();
        write_enum(&ctx, &mut out, &EnumDef::new("Nothing")).unwrap();
        assert_eq!(
            out.build(),
            "module Nothing\n  VALUE_MAP = {}\n  VALID_VALUES = Set.new([]).freeze\nend\n\n"
        );
    }
}
