//! One-symbol-per-file output units for zeitwerk autoloading.

use std::rc::Rc;

use indexmap::IndexMap;
use rbgen_codegen::{CodeBuilder, FileEntry};
use rbgen_ir::Program;
use tracing::debug;

use crate::{
    Context, Error, Result,
    header::{autogen_comment, begin_namespace, end_namespace, require_thrift},
    namespace::Namespace,
};

/// Claimed ruby symbols and file paths for one generation run.
///
/// Both maps stay injective: a symbol belongs to exactly one schema entity
/// and a path holds exactly one symbol. Re-claiming an existing pair with
/// the same owner is allowed.
#[derive(Debug, Default)]
pub struct AutoloadRegistry {
    /// Ruby symbol -> schema entity that produced it.
    symbols: IndexMap<String, String>,
    /// Relative file path -> ruby symbol stored there.
    paths: IndexMap<String, String>,
}

impl AutoloadRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check both maps, then record both mappings.
    pub fn claim(&mut self, schema_name: &str, symbol: &str, path: &str) -> Result<()> {
        if let Some(existing) = self.symbols.get(symbol).filter(|s| *s != schema_name) {
            return Err(Box::new(Error::SymbolCollision {
                symbol: symbol.to_string(),
                existing: existing.clone(),
                incoming: schema_name.to_string(),
            }));
        }
        if let Some(existing) = self.paths.get(path).filter(|s| *s != symbol) {
            return Err(Box::new(Error::PathCollision {
                path: path.to_string(),
                existing: existing.clone(),
                incoming: symbol.to_string(),
            }));
        }
        self.symbols
            .insert(symbol.to_string(), schema_name.to_string());
        self.paths.insert(path.to_string(), symbol.to_string());
        Ok(())
    }

    /// Schema entity owning `symbol`.
    pub fn origin(&self, symbol: &str) -> Option<&str> {
        self.symbols.get(symbol).map(String::as_str)
    }

    /// Symbol stored at `path`.
    pub fn symbol_at(&self, path: &str) -> Option<&str> {
        self.paths.get(path).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

/// An open output unit: header written, namespace modules open.
#[derive(Debug)]
pub struct Unit {
    path: String,
    namespace: Rc<Namespace>,
    service: bool,
    out: CodeBuilder,
}

impl Unit {
    /// Claim `symbol` at `path` and start the file.
    pub fn open(
        ctx: &Context<'_>,
        registry: &mut AutoloadRegistry,
        program: &Program,
        schema_name: &str,
        symbol: &str,
        path: &str,
    ) -> Result<Self> {
        registry.claim(schema_name, symbol, path)?;
        debug!(symbol, path, "opened autoload unit");

        let namespace = ctx.namespace(program)?;
        let mut out = CodeBuilder::ruby();
        out.push_raw(&autogen_comment())
            .push_blank()
            .push_raw(require_thrift(ctx.options.rubygems))
            .push_blank();
        begin_namespace(&mut out, &namespace);

        Ok(Self {
            path: path.to_string(),
            namespace,
            service: false,
            out,
        })
    }

    /// Like [`Unit::open`], additionally wrapping the body in the service
    /// module named `service_constant`.
    pub fn open_service(
        ctx: &Context<'_>,
        registry: &mut AutoloadRegistry,
        program: &Program,
        service_constant: &str,
        schema_name: &str,
        symbol: &str,
        path: &str,
    ) -> Result<Self> {
        let mut unit = Self::open(ctx, registry, program, schema_name, symbol, path)?;
        unit.out
            .push_line(&format!("module {service_constant}"))
            .push_indent();
        unit.service = true;
        Ok(unit)
    }

    pub fn out(&mut self) -> &mut CodeBuilder {
        &mut self.out
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Close every open scope and hand the file over for writing.
    pub fn close(mut self) -> FileEntry {
        if self.service {
            self.out.push_dedent().push_line("end").push_blank();
        }
        end_namespace(&mut self.out, &self.namespace);
        FileEntry::new(self.path, self.out.build())
    }
}
