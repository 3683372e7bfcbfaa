pub mod classify;
pub mod length;
pub mod record;
pub mod resolve;

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::catalog::ErrorCodeCatalog;
use crate::domain::record::InputRecord;
use crate::domain::report::ValidationReport;
use crate::domain::schema::SchemaDefinition;
use crate::engine::observer::ValidationObserver;

/// What to do with a record whose section is absent from the schema.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UnknownSectionPolicy {
    /// Abort the run with [`ValidateError::SchemaLookupFailure`].
    #[default]
    Fail,
    /// Leave the record out of the report.
    Skip,
}

impl UnknownSectionPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fail => "fail",
            Self::Skip => "skip",
        }
    }
}

impl fmt::Display for UnknownSectionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidateOptions {
    pub unknown_sections: UnknownSectionPolicy,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidateError {
    #[error("record {record} references section `{section}` which is not in the standard definition")]
    SchemaLookupFailure { section: String, record: usize },
}

/// Validates all records in input order and collects report rows and
/// summary messages.
pub fn generate_report(
    records: &[InputRecord],
    schema: &SchemaDefinition,
    catalog: &ErrorCodeCatalog,
    options: ValidateOptions,
    observer: &mut dyn ValidationObserver,
) -> Result<ValidationReport, ValidateError> {
    let mut report = ValidationReport::default();

    for input in records {
        let Some(section) = schema.section(&input.section) else {
            match options.unknown_sections {
                UnknownSectionPolicy::Fail => {
                    return Err(ValidateError::SchemaLookupFailure {
                        section: input.section.clone(),
                        record: input.index,
                    });
                }
                UnknownSectionPolicy::Skip => {
                    observer.section_skipped(input);
                    report.records_skipped += 1;
                    continue;
                }
            }
        };

        record::validate_record(input, section, catalog, observer, &mut report);
        report.records_processed += 1;
    }

    observer.run_finished(report.rows.len(), report.records_processed);
    Ok(report)
}
