// src/models/completeness_record.rs
use serde::Serialize;

/// Translation completeness of a single catalog file.
///
/// `translated_strings + untranslated_strings == total_strings` always holds,
/// and `percentage_complete` is rounded to one decimal place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletenessRecord {
    pub language_code: String,
    pub total_strings: u64,
    pub translated_strings: u64,
    pub untranslated_strings: u64,
    pub percentage_complete: f64,
}

impl CompletenessRecord {
    /// Builds a record from the raw entry counts of a catalog.
    ///
    /// `empty` is clamped to `total`: a catalog with more empty translations
    /// than message ids still yields a record that adds up.
    #[inline]
    #[must_use]
    pub fn from_counts(language_code: impl Into<String>, total: u64, empty: u64) -> Self {
        let untranslated = empty.min(total);
        let translated = total.saturating_sub(untranslated);
        Self {
            language_code: language_code.into(),
            total_strings: total,
            translated_strings: translated,
            untranslated_strings: untranslated,
            percentage_complete: percentage(translated, total),
        }
    }
}

#[allow(clippy::cast_precision_loss, reason = "Precision not critical")]
fn percentage(translated: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round_to_tenth(translated as f64 / total as f64 * 100.0)
}

/// Rounds to one decimal place, halves away from zero.
fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
