use rbgen_codegen::CodeBuilder;
use rbgen_ir::ConstDef;
use tracing::debug;

use crate::{Context, Result, header::write_doc, value::render_const_value};

/// Emit `Name = <literal>` followed by a blank line.
pub fn write_const(ctx: &Context<'_>, out: &mut CodeBuilder, def: &ConstDef) -> Result<()> {
    let name = ctx.constant_name(&def.name)?;
    debug!(name = %name, "emitting constant");

    write_doc(out, def.doc.as_deref());
    out.push_indented(&format!("{name} = "));
    render_const_value(ctx, out, &def.ty, &def.value)?;
    out.push_raw("\n").push_blank();
    Ok(())
}
