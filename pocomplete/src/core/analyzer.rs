// src/core/analyzer.rs
use crate::models::CompletenessRecord;
use anyhow::{Context as _, Result};
use std::fs;
use std::path::Path;

const MSGID_PREFIX: &str = "msgid \"";
const EMPTY_MSGSTR: &str = "msgstr \"\"";

/// Counts the message ids and the empty translations in catalog text.
///
/// Both counts are line-anchored: a message id is any line starting with
/// `msgid "`, an empty translation is a line that is exactly `msgstr ""`.
/// Continuation lines, plural forms and flags are not interpreted.
///
/// Returns `(total, empty)`.
#[inline]
#[must_use]
pub fn count_entries(content: &str) -> (u64, u64) {
    let mut total: u64 = 0;
    let mut empty: u64 = 0;

    for line in content.lines() {
        if line.starts_with(MSGID_PREFIX) {
            total = total.saturating_add(1);
        } else if line == EMPTY_MSGSTR {
            empty = empty.saturating_add(1);
        }
    }

    (total, empty)
}

/// Computes the completeness record of a catalog from its text.
#[inline]
#[must_use]
pub fn analyze_catalog(language_code: &str, content: &str) -> CompletenessRecord {
    let (total, empty) = count_entries(content);
    CompletenessRecord::from_counts(language_code, total, empty)
}

/// Reads a catalog file and computes its completeness record.
///
/// # Errors
///
/// This function may return an error if:
/// * The file does not exist or cannot be read
/// * The file is not valid UTF-8 text
#[inline]
pub fn analyze_file(language_code: &str, path: &Path) -> Result<CompletenessRecord> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;
    Ok(analyze_catalog(language_code, &content))
}
