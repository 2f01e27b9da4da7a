use crate::core::comparator::compare;
use crate::core::parser::parse_records;
use crate::core::{ConfigProvider, RecordSet, Storage, Verdict};
use crate::utils::error::Result;
use std::path::Path;

pub struct Checker<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> Checker<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    fn load(&self, path: &Path) -> Result<RecordSet> {
        tracing::debug!("Reading {}", path.display());
        let content = self.storage.read_to_string(path)?;
        parse_records(&path.display().to_string(), &content, self.config.fields())
    }

    /// Reads the work file, then the reference file, and compares them.
    pub fn run(&self) -> Result<Verdict> {
        let fields = self.config.fields();
        tracing::debug!("Comparing fields {}", fields);

        let work = self.load(self.config.work_path())?;
        let reference = self.load(self.config.reference_path())?;

        let verdict = compare(&work, &reference);
        match &verdict {
            Verdict::Same { compared } => {
                tracing::debug!("All {} compared records match", compared);
            }
            Verdict::Different(m) => {
                tracing::info!(
                    "Pair {} differs: {}:{} {} != {}:{} {}",
                    m.index,
                    work.source,
                    m.work.line,
                    m.work,
                    reference.source,
                    m.reference.line,
                    m.reference
                );
            }
        }

        Ok(verdict)
    }
}
