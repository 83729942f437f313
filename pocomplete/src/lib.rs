// src/lib.rs
//! Translation completeness reporting for gettext `.po` catalogs.
//!
//! Every catalog in a directory is reduced to a [`CompletenessRecord`] by
//! counting `msgid "` lines and exact `msgstr ""` lines, and the records are
//! rendered as a table sorted by language code.

pub mod cli;
pub mod config;
pub mod core;
pub mod models;
pub mod report;

pub use cli::{Args, OutputFormat, execute, run};
pub use config::{Config, FailurePolicy};
pub use crate::core::analyzer::{analyze_catalog, analyze_file, count_entries};
pub use crate::core::exclude::ExcludePatterns;
pub use crate::core::scanner::{find_catalogs, is_catalog, language_code, scan_catalogs};
pub use crate::core::table::TranslationTable;
pub use models::{CatalogReport, CompletenessRecord, ScanFailure};
pub use report::{render_table, render_toml};
