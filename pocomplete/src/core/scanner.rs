// src/core/scanner.rs
use crate::config::{Config, FailurePolicy};
use crate::core::analyzer::analyze_file;
use crate::core::exclude::ExcludePatterns;
use crate::models::{CatalogReport, ScanFailure};
use anyhow::{Context as _, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Derives the language code from a catalog file name.
///
/// The extension is stripped first, then the prefix if the name carries it.
/// `ai-translate-fr.po` with prefix `ai-translate-` and extension `.po`
/// yields `fr`; `fr.po` yields `fr` as well.
#[inline]
#[must_use]
pub fn language_code(file_name: &str, prefix: &str, extension: &str) -> String {
    let stem = file_name.strip_suffix(extension).unwrap_or(file_name);
    stem.strip_prefix(prefix).unwrap_or(stem).to_owned()
}

#[inline]
#[must_use]
pub fn is_catalog(file_name: &str, extension: &str) -> bool {
    file_name.ends_with(extension)
}

/// Lists the catalog files directly inside the configured directory.
///
/// Subdirectories are not descended into. Results are sorted by file name.
/// A catalog name that cannot be resolved (a dangling symlink) is still
/// listed so the read failure reaches the failure policy; other unresolvable
/// entries are skipped.
///
/// # Errors
///
/// This function may return an error if:
/// * The catalog directory does not exist or cannot be read
/// * An exclude pattern has invalid glob syntax
pub fn find_catalogs(config: &Config) -> Result<Vec<PathBuf>> {
    let dir = &config.catalog_directory;
    let excludes = ExcludePatterns::from_patterns(&config.exclude)?;
    let mut catalogs = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("Catalog directory not found: {}", dir.display());
    }

    for entry in WalkDir::new(dir)
        .follow_links(true)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let path = match entry {
            Ok(entry) if entry.file_type().is_file() => entry.into_path(),
            Ok(_) => continue,
            Err(err) if err.depth() == 0 => {
                return Err(err).with_context(|| {
                    format!("Failed to list catalog directory: {}", dir.display())
                });
            }
            Err(err) => {
                match err.path().filter(|p| selects(p, config, &excludes)) {
                    Some(path) => catalogs.push(path.to_path_buf()),
                    None => warn!(error = %err, "skipping unreadable directory entry"),
                }
                continue;
            }
        };

        if selects(&path, config, &excludes) {
            catalogs.push(path);
        }
    }

    catalogs.sort();
    Ok(catalogs)
}

fn selects(path: &Path, config: &Config, excludes: &ExcludePatterns) -> bool {
    let Some(file_name) = path.file_name().and_then(|f| f.to_str()) else {
        warn!(path = %path.display(), "skipping non UTF-8 file name");
        return false;
    };
    if !is_catalog(file_name, &config.filename_extension) {
        return false;
    }
    if excludes.matches(path) {
        debug!(file = file_name, "excluded by pattern");
        return false;
    }
    true
}

/// Analyzes every catalog in the configured directory.
///
/// Catalogs are processed in file-name order. When two files map to the same
/// language code, the later one replaces the earlier record.
///
/// # Errors
///
/// This function may return an error if:
/// * The catalog directory cannot be listed
/// * A catalog cannot be read and the failure policy is [`FailurePolicy::Abort`]
pub fn scan_catalogs(config: &Config) -> Result<CatalogReport> {
    let mut report = CatalogReport::new(config.expected_total_strings);

    for path in find_catalogs(config)? {
        let file_name = path
            .file_name()
            .map(|f| f.to_string_lossy().into_owned())
            .unwrap_or_default();
        let code = language_code(
            &file_name,
            &config.filename_prefix,
            &config.filename_extension,
        );

        let record = match analyze_file(&code, &path) {
            Ok(record) => record,
            Err(err) => match config.on_error {
                FailurePolicy::Abort => return Err(err),
                FailurePolicy::Skip => {
                    let message = format!("{err:#}");
                    warn!(file = %file_name, error = %message, "skipping catalog");
                    report.failures.push(ScanFailure { path, message });
                    continue;
                }
            },
        };

        debug!(
            language = %code,
            total = record.total_strings,
            untranslated = record.untranslated_strings,
            "analyzed {file_name}"
        );

        if let Some(replaced) = report.insert(record, path) {
            warn!(
                language = %code,
                kept = %file_name,
                replaced = %replaced.display(),
                "duplicate language code, keeping the later catalog"
            );
        }
    }

    info!(
        languages = report.len(),
        skipped = report.failures.len(),
        "catalog scan finished"
    );
    Ok(report)
}
