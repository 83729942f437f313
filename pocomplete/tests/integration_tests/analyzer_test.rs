// tests/integration_tests/analyzer_test.rs
use super::common::DUTCH_CATALOG;
use pocomplete::{analyze_catalog, count_entries};

#[test]
fn test_three_entries_one_untranslated() {
    let content = "msgid \"a\"\nmsgstr \"x\"\nmsgid \"b\"\nmsgstr \"\"\nmsgid \"c\"\nmsgstr \"y\"\n";
    let record = analyze_catalog("nl", content);

    assert_eq!(record.total_strings, 3);
    assert_eq!(record.untranslated_strings, 1);
    assert_eq!(record.translated_strings, 2);
    assert!((record.percentage_complete - 66.7).abs() < f64::EPSILON);
}

#[test]
fn test_no_entries_is_zero_percent() {
    let record = analyze_catalog("fr", "\n# nothing here\n");
    assert_eq!(record.total_strings, 0);
    assert_eq!(record.translated_strings, 0);
    assert_eq!(record.untranslated_strings, 0);
    assert!(record.percentage_complete.abs() < f64::EPSILON);
}

#[test]
fn test_non_empty_translation_counts_as_translated() {
    let (_, empty) = count_entries("msgid \"hello\"\nmsgstr \"hello\"\n");
    assert_eq!(empty, 0);
}

#[test]
fn test_indented_empty_translation_ignored() {
    let (total, empty) = count_entries("msgid \"hello\"\n    msgstr \"\"\n");
    assert_eq!((total, empty), (1, 0));
}

#[test]
fn test_records_add_up_and_stay_in_range() {
    let inputs = [
        DUTCH_CATALOG,
        "",
        "msgstr \"\"\nmsgstr \"\"\n",
        "msgid \"\"\nmsgstr \"\"\n",
        "msgid \"a\"\nmsgid \"b\"\nmsgid \"c\"\nmsgstr \"\"\n",
    ];

    for content in inputs {
        let record = analyze_catalog("xx", content);
        assert_eq!(
            record.translated_strings + record.untranslated_strings,
            record.total_strings,
            "counts should add up for {content:?}"
        );
        assert!(
            (0.0..=100.0).contains(&record.percentage_complete),
            "percentage out of range for {content:?}"
        );
        assert_eq!(record, analyze_catalog("xx", content));
    }
}
