//! `rbgen.toml` configuration file.
//!
//! ```toml
//! [ruby]
//! rubygems = false
//! namespaced = true
//! zeitwerk = false
//! out_dir = "gen-rb"
//! ```

use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::Deserialize;

use crate::{Error, GeneratorOptions, Result, options::OptionFlags};

/// Output directory used when neither the CLI nor the config names one.
pub const DEFAULT_OUT_DIR: &str = "gen-rb";

/// Parsed `rbgen.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RbgenToml {
    #[serde(default)]
    pub ruby: RubySection,
}

/// The `[ruby]` table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RubySection {
    #[serde(default)]
    pub rubygems: bool,
    #[serde(default)]
    pub namespaced: bool,
    #[serde(default)]
    pub zeitwerk: bool,
    pub out_dir: Option<PathBuf>,
}

impl FromStr for RbgenToml {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, "rbgen.toml")
    }
}

impl RbgenToml {
    /// Parse an rbgen.toml file from the given path
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse from a string with a custom filename for error reporting
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| Error::parse(e, content, filename))?;
        config.options()?;
        Ok(config)
    }

    /// Option switches set by this file.
    pub fn flags(&self) -> OptionFlags {
        OptionFlags {
            rubygems: self.ruby.rubygems,
            namespaced: self.ruby.namespaced,
            zeitwerk: self.ruby.zeitwerk,
        }
    }

    /// Generator options described by this file alone.
    pub fn options(&self) -> Result<GeneratorOptions> {
        self.flags().build()
    }

    /// Configured output directory, or [`DEFAULT_OUT_DIR`].
    pub fn out_dir(&self) -> PathBuf {
        self.ruby
            .out_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIR))
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::Layout;

    #[test]
    fn test_parse_full_config() {
        let config: RbgenToml = r#"
            [ruby]
            rubygems = true
            namespaced = true
            out_dir = "lib/gen"
        "#
        .parse()
        .unwrap();

        let options = config.options().unwrap();
        assert!(options.rubygems);
        assert_eq!(options.layout, Layout::Namespaced);
        assert_eq!(config.out_dir(), PathBuf::from("lib/gen"));
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: RbgenToml = "".parse().unwrap();
        assert_eq!(config.options().unwrap(), GeneratorOptions::default());
        assert_eq!(config.out_dir(), PathBuf::from("gen-rb"));
    }

    #[test]
    fn test_conflicting_layouts_rejected() {
        let err = "[ruby]\nnamespaced = true\nzeitwerk = true\n"
            .parse::<RbgenToml>()
            .unwrap_err();
        assert!(matches!(*err, Error::ConfigurationConflict));
    }

    #[test]
    fn test_unknown_key_is_parse_error() {
        let err = "[ruby]\nfrozen = true\n".parse::<RbgenToml>().unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("rbgen.toml");
        std::fs::write(&path, "[ruby]\nzeitwerk = true\n").unwrap();

        let config = RbgenToml::from_file(&path).unwrap();
        assert_eq!(config.options().unwrap().layout, Layout::Autoload);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let temp = TempDir::new().unwrap();
        let err = RbgenToml::from_file(temp.path().join("missing.toml")).unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
