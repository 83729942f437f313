// tests/integration_tests/scanning_test.rs
use super::common::{config_for, create_test_file, setup_test_directory};
use anyhow::Result;
use pocomplete::{Config, FailurePolicy, find_catalogs, scan_catalogs};

#[test]
fn test_scan_reports_each_language() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let report = scan_catalogs(&config_for(temp_dir.path()))?;

    let codes: Vec<&str> = report.records.keys().map(String::as_str).collect();
    assert_eq!(codes, vec!["de", "fr", "nl"], "Should only scan top-level .po files");

    let fr = report.get("fr").expect("fr should be present");
    assert_eq!(fr.total_strings, 4);
    assert_eq!(fr.untranslated_strings, 3);
    assert!((fr.percentage_complete - 25.0).abs() < f64::EPSILON);

    let de = report.get("de").expect("de should be present");
    assert_eq!(de.untranslated_strings, 0);
    assert!((de.percentage_complete - 100.0).abs() < f64::EPSILON);

    Ok(())
}

#[test]
fn test_french_file_name_yields_fr() -> Result<()> {
    let temp_dir = tempfile::TempDir::new()?;
    create_test_file(temp_dir.path(), "ai-translate-fr.po", "msgid \"a\"\nmsgstr \"b\"\n")?;

    let report = scan_catalogs(&config_for(temp_dir.path()))?;
    assert!(report.get("fr").is_some());
    assert_eq!(report.len(), 1);
    Ok(())
}

#[test]
fn test_custom_prefix_and_extension() -> Result<()> {
    let temp_dir = tempfile::TempDir::new()?;
    create_test_file(temp_dir.path(), "messages-pt.pofile", "msgid \"a\"\nmsgstr \"\"\n")?;
    create_test_file(temp_dir.path(), "messages-pt.po", "msgid \"a\"\nmsgstr \"b\"\n")?;

    let config = Config {
        filename_prefix: String::from("messages-"),
        filename_extension: String::from(".pofile"),
        ..config_for(temp_dir.path())
    };
    let report = scan_catalogs(&config)?;

    assert_eq!(report.len(), 1);
    assert_eq!(report.get("pt").map(|r| r.untranslated_strings), Some(1));
    Ok(())
}

#[test]
fn test_exclude_patterns() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let config = Config {
        exclude: vec![String::from("ai-translate-de.po"), String::from("*-fr.*")],
        ..config_for(temp_dir.path())
    };

    let catalogs = find_catalogs(&config)?;
    assert_eq!(catalogs.len(), 1);
    assert!(catalogs[0].ends_with("ai-translate-nl.po"));
    Ok(())
}

#[test]
fn test_unreadable_catalog_policies() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    std::fs::write(temp_dir.path().join("ai-translate-ja.po"), [0xc3, 0x28, 0xa0])?;

    let abort = config_for(temp_dir.path());
    let err = scan_catalogs(&abort).expect_err("Abort policy should fail the batch");
    assert!(format!("{err:#}").contains("ai-translate-ja.po"));

    let skip = Config {
        on_error: FailurePolicy::Skip,
        ..config_for(temp_dir.path())
    };
    let report = scan_catalogs(&skip)?;
    assert_eq!(report.len(), 3, "Readable catalogs should still be reported");
    assert_eq!(report.failures.len(), 1);
    assert!(report.get("ja").is_none());
    Ok(())
}

#[test]
fn test_missing_directory_fails() {
    let config = config_for(std::path::Path::new("/nonexistent/pocomplete/languages"));
    assert!(scan_catalogs(&config).is_err());
}

#[cfg(unix)]
#[test]
fn test_dangling_links_follow_failure_policy() -> Result<()> {
    use std::os::unix::fs::symlink;

    let temp_dir = setup_test_directory()?;
    symlink(temp_dir.path().join("gone"), temp_dir.path().join("notes.txt"))?;

    let report = scan_catalogs(&config_for(temp_dir.path()))?;
    assert_eq!(report.len(), 3, "Unrelated dangling link should not abort the scan");

    symlink(
        temp_dir.path().join("gone.po"),
        temp_dir.path().join("ai-translate-xx.po"),
    )?;
    let skip = Config {
        on_error: FailurePolicy::Skip,
        ..config_for(temp_dir.path())
    };
    let report = scan_catalogs(&skip)?;
    assert_eq!(report.len(), 3);
    assert_eq!(report.failures.len(), 1);
    assert!(report.failures[0].path.ends_with("ai-translate-xx.po"));

    assert!(scan_catalogs(&config_for(temp_dir.path())).is_err());
    Ok(())
}
