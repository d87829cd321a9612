use crate::source::SourceProvider;
use crate::{Result, SgfPreviewError};
use std::collections::BTreeMap;

/// Records held in memory, keyed by id
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    records: BTreeMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(mut self, id: &str, text: &str) -> Self {
        self.records.insert(id.to_string(), text.to_string());
        self
    }
}

impl SourceProvider for MemorySource {
    fn list_available(&self) -> Result<Vec<String>> {
        Ok(self.records.keys().cloned().collect())
    }

    fn read(&self, id: &str) -> Result<String> {
        self.records
            .get(id)
            .cloned()
            .ok_or_else(|| SgfPreviewError::InvalidSource(id.to_string()))
    }

    fn describe(&self) -> String {
        format!("memory ({} records)", self.records.len())
    }
}
