//! Ruby constant and file naming.

use rbgen_core::{capitalize, to_pascal_case, underscore};

use crate::{Error, Result};

/// Converts schema identifiers into ruby constant names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamingPolicy {
    /// Upper-case the first letter only: `foo_bar` -> `Foo_bar`.
    Capitalize,
    /// Split on `_` and capitalize each segment: `foo_bar` -> `FooBar`.
    Zeitwerk,
}

impl NamingPolicy {
    /// Ruby constant name for a schema identifier.
    pub fn constant_name(self, name: &str) -> Result<String> {
        match self {
            NamingPolicy::Capitalize => Ok(capitalize(name)),
            NamingPolicy::Zeitwerk => {
                let normalized = to_pascal_case(name);
                if normalized.is_empty() {
                    return Err(Error::empty_identifier(name));
                }
                Ok(normalized)
            }
        }
    }
}

/// File name (with extension) holding a ruby constant.
pub fn file_name(constant: &str) -> String {
    format!("{}.rb", underscore(constant))
}
