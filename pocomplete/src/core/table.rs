// src/core/table.rs
use anyhow::{Context as _, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Static lookup table from English source strings to translations.
///
/// Stored as TOML:
///
/// ```toml
/// language = "nl"
///
/// [translations]
/// "Security check failed" = "Beveiligingscontrole"
/// ```
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct TranslationTable {
    pub language: String,
    #[serde(default)]
    translations: BTreeMap<String, String>,
}

impl TranslationTable {
    /// # Errors
    ///
    /// Returns an error if the text is not a valid translation table.
    #[inline]
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse translation table")
    }

    /// # Errors
    ///
    /// This function may return an error if:
    /// * The file cannot be read
    /// * The file is not a valid translation table
    #[inline]
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read translation table: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid translation table: {}", path.display()))
    }

    #[inline]
    #[must_use]
    pub fn get(&self, source: &str) -> Option<&str> {
        self.translations.get(source).map(String::as_str)
    }
}
