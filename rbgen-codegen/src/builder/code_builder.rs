//! Code builder utility for generating properly indented code.

use super::{CodeFragment, Indent, Renderable};

/// Output sink that tracks the current indentation level.
///
/// Besides whole lines, the builder accepts indented text without a line
/// break ([`push_indented`](Self::push_indented)) followed by raw text, so
/// that recursive renderers can continue a line started by their caller and
/// still emit nested lines at the right depth.
///
/// # Example
///
/// ```
/// use rbgen_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::ruby();
/// builder
///     .push_line("module Tutorial")
///     .push_indent()
///     .push_indented("ANSWER = ")
///     .push_raw("42\n")
///     .push_dedent()
///     .push_line("end");
///
/// assert_eq!(builder.build(), "module Tutorial\n  ANSWER = 42\nend\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with 2-space indentation (Ruby default).
    pub fn ruby() -> Self {
        Self::new(Indent::RUBY)
    }

    /// Add a line of code with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Add raw text without indentation or newline.
    pub fn push_raw(&mut self, s: &str) -> &mut Self {
        self.buffer.push_str(s);
        self
    }

    /// Add the current indentation followed by `s`, without a newline.
    pub fn push_indented(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Emit a Renderable node.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Comment { prefix, text } => {
                for line in text.lines() {
                    if line.is_empty() {
                        self.push_line(prefix.trim_end());
                    } else {
                        self.write_indent();
                        self.buffer.push_str(prefix);
                        self.buffer.push_str(line);
                        self.buffer.push('\n');
                    }
                }
            }
        }
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        self.indent.write_to(&mut self.buffer, self.indent_level);
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::ruby()
    }
}
