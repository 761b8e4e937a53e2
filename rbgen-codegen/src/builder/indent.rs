//! Indentation unit of generated sources.

/// Number of spaces written per indentation level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indent(pub u8);

impl Indent {
    /// Two spaces, the ruby convention.
    pub const RUBY: Self = Self(2);

    /// Write `level` indentation units to `buf`.
    pub fn write_to(self, buf: &mut String, level: usize) {
        buf.extend(std::iter::repeat_n(' ', usize::from(self.0) * level));
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::RUBY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(indent: Indent, level: usize) -> String {
        let mut buf = String::new();
        indent.write_to(&mut buf, level);
        buf
    }

    #[test]
    fn test_levels() {
        assert_eq!(render(Indent::RUBY, 0), "");
        assert_eq!(render(Indent::RUBY, 3), "      ");
        assert_eq!(render(Indent(3), 1), "   ");
    }

    #[test]
    fn test_default_is_ruby() {
        assert_eq!(Indent::default(), Indent(2));
    }
}
