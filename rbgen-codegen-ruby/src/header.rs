//! File banners, require lines and module scopes.

use rbgen_codegen::{CodeBuilder, CodeFragment};

use crate::namespace::Namespace;

/// Generation banner that opens every file.
pub fn autogen_comment() -> String {
    format!(
        "#\n# Autogenerated by rbgen ({})\n#\n# DO NOT EDIT UNLESS YOU ARE SURE THAT YOU KNOW WHAT YOU ARE DOING\n#\n",
        env!("CARGO_PKG_VERSION")
    )
}

/// `require 'thrift'`, preceded by `require 'rubygems'` when asked for.
pub fn require_thrift(rubygems: bool) -> &'static str {
    if rubygems {
        "require 'rubygems'\nrequire 'thrift'\n"
    } else {
        "require 'thrift'\n"
    }
}

pub fn require(path: &str) -> String {
    format!("require '{path}'\n")
}

/// Open one `module` per namespace segment.
pub fn begin_namespace(out: &mut CodeBuilder, namespace: &Namespace) {
    for module in &namespace.modules {
        out.push_line(&format!("module {module}")).push_indent();
    }
}

/// Close the modules opened by [`begin_namespace`], innermost first.
pub fn end_namespace(out: &mut CodeBuilder, namespace: &Namespace) {
    for _ in namespace.modules.iter().rev() {
        out.push_dedent().push_line("end");
    }
}

/// `# ` comment lines for a doc string, if any.
pub fn write_doc(out: &mut CodeBuilder, doc: Option<&str>) {
    if let Some(doc) = doc.map(str::trim_end).filter(|d| !d.is_empty()) {
        out.emit(&CodeFragment::hash_comment(doc));
    }
}
