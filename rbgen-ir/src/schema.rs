//! The set of programs handled by one generation run.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{EnumDef, Program, Service, StructDef, TypeRef};

/// Every program of a run, in the order the driver handed them over.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    pub programs: Vec<Program>,
}

impl Schema {
    pub fn new(programs: Vec<Program>) -> Self {
        Self { programs }
    }

    /// Parse a schema from its JSON representation.
    pub fn from_json(src: &str) -> serde_json::Result<Self> {
        serde_json::from_str(src)
    }

    /// Read and parse a JSON schema file.
    pub fn from_file(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let src = std::fs::read_to_string(path)?;
        Self::from_json(&src).map_err(std::io::Error::other)
    }

    pub fn program(&self, name: &str) -> Option<&Program> {
        self.programs.iter().find(|p| p.name == name)
    }

    pub fn find_struct(&self, r: &TypeRef) -> Option<&StructDef> {
        self.program(&r.program)?.find_struct(&r.name)
    }

    pub fn find_enum(&self, r: &TypeRef) -> Option<&EnumDef> {
        self.program(&r.program)?.find_enum(&r.name)
    }

    pub fn find_service(&self, r: &TypeRef) -> Option<&Service> {
        self.program(&r.program)?.find_service(&r.name)
    }
}
