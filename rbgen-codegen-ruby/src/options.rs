//! Generator options and output layout selection.

use crate::{Error, Result, naming::NamingPolicy};

/// How generated files are laid out on disk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Layout {
    /// Per-program `_types`/`_constants` files plus one file per service,
    /// all in the output root.
    #[default]
    Flat,
    /// Like [`Layout::Flat`], but files live in directories mirroring the
    /// program namespace.
    Namespaced,
    /// One file per addressable constant, named for zeitwerk autoloading.
    Autoload,
}

impl Layout {
    pub fn is_autoload(self) -> bool {
        matches!(self, Layout::Autoload)
    }

    /// Naming policy used for ruby constants under this layout.
    pub fn naming(self) -> NamingPolicy {
        match self {
            Layout::Autoload => NamingPolicy::Zeitwerk,
            Layout::Flat | Layout::Namespaced => NamingPolicy::Capitalize,
        }
    }
}

/// Options recognized by the Ruby generator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Prefix every file with `require 'rubygems'`.
    pub rubygems: bool,
    pub layout: Layout,
}

impl GeneratorOptions {
    /// Build options from raw option flags.
    ///
    /// Accepts `rubygems`, `namespaced` and `zeitwerk`, separated by commas
    /// or given as separate items. Empty items are ignored.
    ///
    /// ```
    /// use rbgen_codegen_ruby::{GeneratorOptions, Layout};
    ///
    /// let options = GeneratorOptions::parse(["rubygems,zeitwerk"]).unwrap();
    /// assert!(options.rubygems);
    /// assert_eq!(options.layout, Layout::Autoload);
    ///
    /// assert!(GeneratorOptions::parse(["namespaced", "zeitwerk"]).is_err());
    /// ```
    pub fn parse<I, S>(options: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut flags = OptionFlags::default();
        for item in options {
            for name in item.as_ref().split(',').map(str::trim) {
                match name {
                    "" => {}
                    "rubygems" => flags.rubygems = true,
                    "namespaced" => flags.namespaced = true,
                    "zeitwerk" => flags.zeitwerk = true,
                    other => return Err(Error::unknown_option(other)),
                }
            }
        }
        flags.build()
    }
}

/// Boolean option switches before the conflict check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OptionFlags {
    pub rubygems: bool,
    pub namespaced: bool,
    pub zeitwerk: bool,
}

impl OptionFlags {
    /// Resolve the switches into options, rejecting `namespaced` + `zeitwerk`.
    pub fn build(self) -> Result<GeneratorOptions> {
        let layout = match (self.namespaced, self.zeitwerk) {
            (true, true) => return Err(Box::new(Error::ConfigurationConflict)),
            (true, false) => Layout::Namespaced,
            (false, true) => Layout::Autoload,
            (false, false) => Layout::Flat,
        };
        Ok(GeneratorOptions {
            rubygems: self.rubygems,
            layout,
        })
    }

    /// Combine two sets of switches; a switch set in either is set.
    pub fn merge(self, other: OptionFlags) -> OptionFlags {
        OptionFlags {
            rubygems: self.rubygems || other.rubygems,
            namespaced: self.namespaced || other.namespaced,
            zeitwerk: self.zeitwerk || other.zeitwerk,
        }
    }
}

impl From<GeneratorOptions> for OptionFlags {
    fn from(options: GeneratorOptions) -> Self {
        OptionFlags {
            rubygems: options.rubygems,
            namespaced: options.layout == Layout::Namespaced,
            zeitwerk: options.layout == Layout::Autoload,
        }
    }
}
