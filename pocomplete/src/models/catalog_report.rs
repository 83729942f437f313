// src/models/catalog_report.rs
use crate::models::{CompletenessRecord, ScanFailure};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Completeness records of every analyzed catalog, keyed by language code.
#[derive(Debug, Default)]
pub struct CatalogReport {
    pub records: BTreeMap<String, CompletenessRecord>,
    pub failures: Vec<ScanFailure>,
    pub expected_total_strings: u64,
    sources: BTreeMap<String, PathBuf>,
}

impl CatalogReport {
    #[inline]
    #[must_use]
    pub const fn new(expected_total_strings: u64) -> Self {
        Self {
            records: BTreeMap::new(),
            failures: Vec::new(),
            expected_total_strings,
            sources: BTreeMap::new(),
        }
    }

    /// Stores the record analyzed from `source`. If the language code was
    /// already present, the earlier record is replaced and its file returned.
    #[inline]
    pub fn insert(&mut self, record: CompletenessRecord, source: PathBuf) -> Option<PathBuf> {
        let code = record.language_code.clone();
        self.records.insert(code.clone(), record);
        self.sources.insert(code, source)
    }

    #[inline]
    #[must_use]
    pub fn get(&self, language_code: &str) -> Option<&CompletenessRecord> {
        self.records.get(language_code)
    }

    /// The catalog file the record for `language_code` was read from.
    #[inline]
    #[must_use]
    pub fn source(&self, language_code: &str) -> Option<&Path> {
        self.sources.get(language_code).map(PathBuf::as_path)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }
}
