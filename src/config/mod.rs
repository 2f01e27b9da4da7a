#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::domain::model::FieldPair;
use crate::utils::error::Result;
use crate::utils::validation::{validate_fields, validate_path, Validate};
use std::path::{Path, PathBuf};

pub const DEFAULT_REFERENCE_PATH: &str = "correct.txt";

/// Fully resolved settings for one check run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckSettings {
    pub work_path: PathBuf,
    pub reference_path: PathBuf,
    pub fields: FieldPair,
}

impl CheckSettings {
    pub fn new(work_path: impl Into<PathBuf>) -> Self {
        Self {
            work_path: work_path.into(),
            reference_path: PathBuf::from(DEFAULT_REFERENCE_PATH),
            fields: FieldPair::default(),
        }
    }

    pub fn with_reference(mut self, reference_path: impl Into<PathBuf>) -> Self {
        self.reference_path = reference_path.into();
        self
    }

    pub fn with_fields(mut self, fields: FieldPair) -> Self {
        self.fields = fields;
        self
    }
}

impl ConfigProvider for CheckSettings {
    fn work_path(&self) -> &Path {
        &self.work_path
    }

    fn reference_path(&self) -> &Path {
        &self.reference_path
    }

    fn fields(&self) -> FieldPair {
        self.fields
    }
}

impl Validate for CheckSettings {
    fn validate(&self) -> Result<()> {
        validate_path("work_file", &self.work_path)?;
        validate_path("reference", &self.reference_path)?;
        validate_fields("fields", self.fields)?;
        Ok(())
    }
}
