//! Renderable trait and CodeFragment for decoupled code generation.
//!
//! Syntax nodes that know their own shape render to fragments, and the
//! builder lays them out at the current indentation.

/// Represents a fragment of generated code.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// A line comment: `prefix` followed by one line per text line.
    ///
    /// Empty text lines render as the trimmed prefix alone.
    Comment { prefix: &'static str, text: String },
}

impl CodeFragment {
    /// Create a hash-prefixed comment fragment (`# text`).
    pub fn hash_comment(text: impl Into<String>) -> Self {
        Self::Comment {
            prefix: "# ",
            text: text.into(),
        }
    }
}

/// Trait for types that can be rendered to code fragments.
pub trait Renderable {
    /// Convert this node into a sequence of code fragments.
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

impl Renderable for CodeFragment {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![self.clone()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_comment() {
        assert_eq!(
            CodeFragment::hash_comment("doc"),
            CodeFragment::Comment {
                prefix: "# ",
                text: "doc".to_string()
            }
        );
        assert_eq!(CodeFragment::hash_comment("a\nb").to_fragments().len(), 1);
    }
}
