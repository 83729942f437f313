// src/models.rs
mod catalog_report;
mod completeness_record;
mod scan_failure;

pub use catalog_report::CatalogReport;
pub use completeness_record::CompletenessRecord;
pub use scan_failure::ScanFailure;
