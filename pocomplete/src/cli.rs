// src/cli.rs
use anyhow::{Context as _, Result, bail};
use clap::{Parser, ValueEnum};
use std::env;
use std::path::PathBuf;

use crate::config::{Config, FailurePolicy};
use crate::core::scanner::scan_catalogs;
use crate::core::table::TranslationTable;
use crate::report::{render_table, render_toml};

#[derive(ValueEnum, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Toml,
}

#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory containing the catalogs [default: languages]
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    /// File name prefix stripped to get the language code [default: ai-translate-]
    #[arg(long)]
    pub prefix: Option<String>,

    /// Catalog file extension [default: .po]
    #[arg(long)]
    pub extension: Option<String>,

    /// Number of strings in the master template, shown in the summary [default: 179]
    #[arg(short = 'e', long)]
    pub expected_total: Option<u64>,

    /// Catalog file names to skip (comma-separated globs)
    #[arg(short = 'x', long, value_delimiter = ',')]
    pub exclude: Vec<String>,

    /// What to do when a catalog cannot be read [default: abort]
    #[arg(long, value_enum)]
    pub on_error: Option<FailurePolicy>,

    /// Output format of the report
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Configuration file (defaults to ./pocomplete.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log each analyzed catalog
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the translation of this source string instead of the report
    #[arg(long, requires = "table")]
    pub lookup: Option<String>,

    /// Translation table (TOML) used by --lookup
    #[arg(long)]
    pub table: Option<PathBuf>,
}

impl Args {
    /// Layers the command-line overrides on top of `config`.
    #[must_use]
    pub fn apply_to(&self, mut config: Config) -> Config {
        if let Some(directory) = &self.directory {
            config.catalog_directory.clone_from(directory);
        }
        if let Some(prefix) = &self.prefix {
            config.filename_prefix.clone_from(prefix);
        }
        if let Some(extension) = &self.extension {
            config.filename_extension.clone_from(extension);
        }
        if let Some(expected) = self.expected_total {
            config.expected_total_strings = expected;
        }
        config.exclude.extend(self.exclude.iter().cloned());
        if let Some(policy) = self.on_error {
            config.on_error = policy;
        }
        config
    }
}

/// Produces the text `run` prints for `args`.
///
/// # Errors
///
/// This function may return an error if:
/// * The configuration file cannot be loaded
/// * The catalog directory cannot be scanned
/// * A lookup is requested and the table cannot be loaded or has no entry
pub fn execute(args: &Args) -> Result<String> {
    if let Some(source) = args.lookup.as_deref() {
        let path = args.table.as_deref().context("--lookup requires --table")?;
        let table = TranslationTable::load(path)?;
        return match table.get(source) {
            Some(translation) => Ok(format!("{translation}\n")),
            None => bail!("No '{}' translation for: {source}", table.language),
        };
    }

    let cwd = env::current_dir()?;
    let config = args.apply_to(Config::resolve(args.config.as_deref(), &cwd)?);
    let report = scan_catalogs(&config).with_context(|| {
        format!(
            "Failed to scan catalog directory: {}",
            config.catalog_directory.display()
        )
    })?;

    match args.format {
        OutputFormat::Table => Ok(render_table(&report)),
        OutputFormat::Toml => render_toml(&report),
    }
}

/// # Errors
///
/// Returns any error from [`execute`].
pub fn run(args: Args) -> Result<()> {
    let output = execute(&args)?;
    print!("{output}");
    Ok(())
}
