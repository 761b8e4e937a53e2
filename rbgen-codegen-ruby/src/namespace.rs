//! Program namespace resolution.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use rbgen_core::underscore;
use rbgen_ir::Program;

use crate::{Result, naming::NamingPolicy};

/// Namespace key read from program declarations.
pub const NAMESPACE_KEY: &str = "rb";

/// Ruby module nesting derived from a program's `rb` namespace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Namespace {
    /// Module names, outermost first.
    pub modules: Vec<String>,
    /// Directory prefix ending in `/`, or empty.
    pub path_prefix: String,
    /// Constant prefix ending in `::`, or empty.
    pub constant_prefix: String,
}

impl Namespace {
    /// Derive the namespace from a dotted declaration such as `foo.bar_baz`.
    pub fn parse(declaration: &str, naming: NamingPolicy) -> Result<Self> {
        let mut namespace = Namespace::default();
        if declaration.is_empty() {
            return Ok(namespace);
        }
        for segment in declaration.split('.') {
            let module = naming.constant_name(segment)?;
            namespace.path_prefix.push_str(&underscore(&module));
            namespace.path_prefix.push('/');
            namespace.constant_prefix.push_str(&module);
            namespace.constant_prefix.push_str("::");
            namespace.modules.push(module);
        }
        Ok(namespace)
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

/// Memoizing resolver, one entry per program for the whole run.
#[derive(Debug)]
pub struct NamespaceResolver {
    naming: NamingPolicy,
    cache: RefCell<HashMap<String, Rc<Namespace>>>,
}

impl NamespaceResolver {
    pub fn new(naming: NamingPolicy) -> Self {
        Self {
            naming,
            cache: RefCell::new(HashMap::new()),
        }
    }

    /// Namespace of `program`, computed on first use.
    pub fn resolve(&self, program: &Program) -> Result<Rc<Namespace>> {
        if let Some(cached) = self.cache.borrow().get(&program.name) {
            return Ok(Rc::clone(cached));
        }
        let namespace = Rc::new(Namespace::parse(
            program.namespace(NAMESPACE_KEY),
            self.naming,
        )?);
        self.cache
            .borrow_mut()
            .insert(program.name.clone(), Rc::clone(&namespace));
        Ok(namespace)
    }
}
