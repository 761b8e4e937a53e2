//! Ruby code generator for rbgen.
//!
//! Turns a parsed IDL [`Schema`](rbgen_ir::Schema) into ruby sources for the
//! `thrift` runtime gem: enums, constants, structs, unions, exceptions and
//! service clients/processors.
//!
//! # Usage
//!
//! ```ignore
//! use rbgen_codegen_ruby::{Generator, GeneratorOptions, LanguageCodegen};
//! use rbgen_ir::Schema;
//! use std::path::Path;
//!
//! let schema = Schema::from_file("tutorial.json")?;
//! let options = GeneratorOptions::parse(["namespaced"])?;
//! let generator = Generator::new(&schema, options);
//!
//! // Preview files without writing
//! let files = generator.preview()?;
//!
//! // Generate files to disk
//! let result = generator.generate(Path::new("gen-rb"))?;
//! ```
//!
//! # Layouts
//!
//! - flat (default) - `<program>_types.rb`, `<program>_constants.rb` and
//!   `<service>.rb` in the output root
//! - `namespaced` - the same files under directories mirroring the `rb`
//!   namespace
//! - `zeitwerk` - one file per ruby constant, loadable by zeitwerk

mod autoload;
mod config;
mod context;
mod descriptor;
mod error;
mod generator;
mod header;
mod namespace;
mod naming;
mod options;
mod value;

pub mod emit;
pub mod layout;

pub use autoload::{AutoloadRegistry, Unit};
pub use config::{DEFAULT_OUT_DIR, RbgenToml, RubySection};
pub use context::Context;
pub use descriptor::{FieldData, WireType, render_field_data};
pub use error::{Error, Result};
pub use generator::Generator;
pub use namespace::{NAMESPACE_KEY, Namespace, NamespaceResolver};
pub use naming::{NamingPolicy, file_name};
pub use options::{GeneratorOptions, Layout, OptionFlags};
pub use rbgen_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile};
pub use value::{const_value_to_string, quote, render_const_value};
