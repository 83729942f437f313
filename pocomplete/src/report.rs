// src/report.rs
use crate::models::{CatalogReport, CompletenessRecord, ScanFailure};
use anyhow::{Context as _, Result};
use serde::Serialize;
use std::collections::BTreeMap;

const RULE_WIDTH: usize = 60;

/// Renders the per-language completeness table followed by the summary line.
#[must_use]
pub fn render_table(report: &CatalogReport) -> String {
    let mut lines = vec![
        String::from("Translation completeness per language:"),
        "=".repeat(RULE_WIDTH),
        format!(
            "{:<12} {:<10} {:<8} {:<10} {:<12}",
            "Language", "Translated", "Total", "Complete", "Missing"
        ),
        "-".repeat(RULE_WIDTH),
    ];
    lines.extend(report.records.values().map(render_row));

    lines.push(String::new());
    lines.push(format!(
        "Total strings to translate (from .pot): {}",
        report.expected_total_strings
    ));

    if !report.failures.is_empty() {
        lines.push(String::new());
        lines.push(format!(
            "Skipped {} unreadable catalog(s):",
            report.failures.len()
        ));
        lines.extend(
            report
                .failures
                .iter()
                .map(|f| format!("  {}: {}", f.path.display(), f.message)),
        );
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn render_row(record: &CompletenessRecord) -> String {
    let percentage = format!("{:.1}", record.percentage_complete);
    format!(
        "{:<12} {:<10} {:<8} {:<10}% {:<12}",
        record.language_code,
        record.translated_strings,
        record.total_strings,
        percentage,
        record.untranslated_strings
    )
}

#[derive(Serialize)]
struct TomlReport<'a> {
    expected_total_strings: u64,
    failures: &'a [ScanFailure],
    languages: &'a BTreeMap<String, CompletenessRecord>,
}

/// Renders the report as TOML, one `[languages.<code>]` table per catalog.
///
/// # Errors
///
/// Returns an error if the report cannot be serialized.
pub fn render_toml(report: &CatalogReport) -> Result<String> {
    let document = TomlReport {
        expected_total_strings: report.expected_total_strings,
        failures: &report.failures,
        languages: &report.records,
    };
    toml::to_string(&document).context("Failed to serialize report")
}
