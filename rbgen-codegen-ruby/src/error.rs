use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for Ruby generation (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Every condition that aborts a generation run.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("ruby options zeitwerk and namespaced are mutually exclusive")]
    #[diagnostic(
        code(rbgen::configuration_conflict),
        help("pick one layout: 'namespaced' for nested per-program files, 'zeitwerk' for one file per symbol")
    )]
    ConfigurationConflict,

    #[error("unknown option ruby:{name}")]
    #[diagnostic(
        code(rbgen::unknown_option),
        help("recognized options are: rubygems, namespaced, zeitwerk")
    )]
    UnknownOption { name: String },

    #[error("cannot normalize empty ruby identifier '{name}'")]
    #[diagnostic(
        code(rbgen::empty_identifier),
        help("identifiers made only of underscores have no zeitwerk constant name")
    )]
    EmptyIdentifier { name: String },

    #[error("zeitwerk symbol collision for {symbol}: {existing} vs {incoming}")]
    #[diagnostic(
        code(rbgen::symbol_collision),
        help("rename one of the declarations so they map to different ruby constants")
    )]
    SymbolCollision {
        symbol: String,
        existing: String,
        incoming: String,
    },

    #[error("zeitwerk path collision for {path}: {existing} vs {incoming}")]
    #[diagnostic(
        code(rbgen::path_collision),
        help("two constants underscore to the same file name; rename one of them")
    )]
    PathCollision {
        path: String,
        existing: String,
        incoming: String,
    },

    #[error("output file {path} generated twice")]
    #[diagnostic(
        code(rbgen::duplicate_output),
        help("a program, service or type name maps onto a file another declaration already produces")
    )]
    DuplicateOutput { path: String },

    #[error("type error: {ty} {detail}")]
    #[diagnostic(code(rbgen::schema_mismatch))]
    SchemaMismatch { ty: String, detail: String },

    #[error("cannot generate constant for type {ty}")]
    #[diagnostic(code(rbgen::unsupported_const_type))]
    UnsupportedConstType { ty: String },

    #[error("unhandled type {ty} in {context}")]
    #[diagnostic(code(rbgen::unhandled_type))]
    UnhandledTypeVariant { ty: String, context: &'static str },

    #[error("unresolved reference to {kind} '{name}'")]
    #[diagnostic(
        code(rbgen::unresolved_reference),
        help("every referenced program and type must be part of the schema document")
    )]
    UnresolvedReference { kind: &'static str, name: String },

    #[error("failed to read '{path}'")]
    #[diagnostic(code(rbgen::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse rbgen.toml")]
    #[diagnostic(code(rbgen::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },
}

impl Error {
    pub fn unknown_option(name: impl Into<String>) -> Box<Self> {
        Box::new(Error::UnknownOption { name: name.into() })
    }

    pub fn empty_identifier(name: impl Into<String>) -> Box<Self> {
        Box::new(Error::EmptyIdentifier { name: name.into() })
    }

    pub fn schema_mismatch(ty: impl Into<String>, detail: impl Into<String>) -> Box<Self> {
        Box::new(Error::SchemaMismatch {
            ty: ty.into(),
            detail: detail.into(),
        })
    }

    pub fn unsupported_const_type(ty: impl Into<String>) -> Box<Self> {
        Box::new(Error::UnsupportedConstType { ty: ty.into() })
    }

    pub fn unhandled_type(ty: impl Into<String>, context: &'static str) -> Box<Self> {
        Box::new(Error::UnhandledTypeVariant {
            ty: ty.into(),
            context,
        })
    }

    pub fn unresolved(kind: &'static str, name: impl Into<String>) -> Box<Self> {
        Box::new(Error::UnresolvedReference {
            kind,
            name: name.into(),
        })
    }

    /// Create a parse error from a toml error with source context
    pub fn parse(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }
}
