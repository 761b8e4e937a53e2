//! Shared code generation utilities for rbgen.
//!
//! This crate provides language-agnostic abstractions and utilities
//! used by language-specific code generators (e.g., `rbgen-codegen-ruby`).
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`generation`] - Output management (FileRegistry, WriteStats)
//! - [`language`] - Language-specific abstractions (LanguageCodegen, PreviewFile, etc.)

pub mod builder;
pub mod generation;
pub mod language;

pub use builder::{CodeBuilder, CodeFragment, Indent, Renderable};
pub use generation::{FileEntry, FileRegistry, WriteStats};
pub use language::{GenerateResult, LanguageCodegen, PreviewFile};
