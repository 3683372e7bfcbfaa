use crate::domain::catalog::{ErrorCode, ErrorCodeCatalog};
use crate::domain::record::InputRecord;
use crate::domain::report::{ReportRow, ValidationReport};
use crate::domain::schema::{SectionDefinition, SubSectionDefinition};
use crate::engine::message::build_message;
use crate::engine::observer::ValidationObserver;

use super::classify::classify;
use super::length::{length_ok, rendered_length};
use super::resolve::resolve;

/// Validates every sub-section of `section` against `record`, appending one
/// row and one message per sub-section to `report` in schema order.
pub fn validate_record(
    record: &InputRecord,
    section: &SectionDefinition,
    catalog: &ErrorCodeCatalog,
    observer: &mut dyn ValidationObserver,
    report: &mut ValidationReport,
) {
    observer.record_started(record);
    for sub_section in &section.sub_sections {
        let row = validate_field(record, &section.key, sub_section);
        if row.error_code == ErrorCode::E05 {
            observer.field_missing(&row);
        } else {
            observer.field_validated(&row);
        }

        let message = build_message(
            catalog.entry(row.error_code),
            &row.section,
            &row.sub_section,
            sub_section.data_type,
            sub_section.max_length,
        );
        report.push(row, message);
    }
}

/// Builds the report row for one sub-section of a record.
pub fn validate_field(
    record: &InputRecord,
    section_key: &str,
    sub_section: &SubSectionDefinition,
) -> ReportRow {
    let mut row = ReportRow {
        section: section_key.to_string(),
        sub_section: sub_section.key.clone(),
        given_data_type: None,
        expected_data_type: sub_section.data_type,
        given_length: None,
        expected_max_length: sub_section.max_length,
        error_code: ErrorCode::E05,
    };

    if let Some(value) = record.field(sub_section.column(section_key)) {
        let given = classify(value);
        row.given_data_type = Some(given);
        row.given_length = Some(rendered_length(value));
        row.error_code = resolve(
            given,
            sub_section.data_type,
            length_ok(sub_section.max_length, value),
        );
    }

    row
}
