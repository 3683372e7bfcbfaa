use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::catalog::ErrorCode;
use crate::domain::schema::DataType;

/// Report column headers, in output order.
pub const REPORT_COLUMNS: [&str; 7] = [
    "Section",
    "Sub-Section",
    "Given DataType",
    "Expected DataType",
    "Given Length",
    "Expected MaxLength",
    "Error Code",
];

/// One validated (record, sub-section) pair.
///
/// `given_data_type` and `given_length` are `None` when the field is missing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportRow {
    #[serde(rename = "Section")]
    pub section: String,
    #[serde(rename = "Sub-Section")]
    pub sub_section: String,
    #[serde(rename = "Given DataType")]
    pub given_data_type: Option<DataType>,
    #[serde(rename = "Expected DataType")]
    pub expected_data_type: DataType,
    #[serde(rename = "Given Length")]
    pub given_length: Option<usize>,
    #[serde(rename = "Expected MaxLength")]
    pub expected_max_length: usize,
    #[serde(rename = "Error Code")]
    pub error_code: ErrorCode,
}

impl ReportRow {
    /// Cells in `REPORT_COLUMNS` order; missing values render as empty cells.
    pub fn cells(&self) -> [String; 7] {
        [
            self.section.clone(),
            self.sub_section.clone(),
            self.given_data_type
                .map(|data_type| data_type.as_str().to_string())
                .unwrap_or_default(),
            self.expected_data_type.as_str().to_string(),
            self.given_length
                .map(|length| length.to_string())
                .unwrap_or_default(),
            self.expected_max_length.to_string(),
            self.error_code.as_str().to_string(),
        ]
    }
}

/// Rows and summary messages produced by one validation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub rows: Vec<ReportRow>,
    /// One newline-terminated sentence per row, in row order.
    pub messages: Vec<String>,
    pub records_processed: usize,
    pub records_skipped: usize,
}

impl ValidationReport {
    pub fn push(&mut self, row: ReportRow, message: String) {
        self.rows.push(row);
        self.messages.push(message);
    }

    /// Summary file contents: every message, in row order.
    pub fn summary_text(&self) -> String {
        self.messages.concat()
    }

    /// Row count per error code; every code is present, possibly with zero.
    pub fn code_counts(&self) -> BTreeMap<ErrorCode, usize> {
        let mut counts: BTreeMap<ErrorCode, usize> =
            ErrorCode::ALL.into_iter().map(|code| (code, 0)).collect();
        for row in &self.rows {
            *counts.entry(row.error_code).or_default() += 1;
        }
        counts
    }

    pub fn passed(&self) -> bool {
        self.rows.iter().all(|row| row.error_code == ErrorCode::E01)
    }
}

/// Machine-readable outcome printed after a `validate` run.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RunSummary {
    pub passed: bool,
    pub records_processed: usize,
    pub records_skipped: usize,
    pub row_count: usize,
    pub code_counts: BTreeMap<ErrorCode, usize>,
    pub report_path: String,
    pub summary_path: String,
}

impl RunSummary {
    pub fn new(
        report: &ValidationReport,
        report_path: impl Into<String>,
        summary_path: impl Into<String>,
    ) -> Self {
        Self {
            passed: report.passed(),
            records_processed: report.records_processed,
            records_skipped: report.records_skipped,
            row_count: report.rows.len(),
            code_counts: report.code_counts(),
            report_path: report_path.into(),
            summary_path: summary_path.into(),
        }
    }
}

/// Diagnostics report emitted when `--emit-pipeline` is enabled.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PipelineReport {
    pub command: String,
    pub input: PipelineInput,
    pub steps: Vec<String>,
    pub deterministic_guards: Vec<String>,
}

impl PipelineReport {
    pub fn new(
        command: impl Into<String>,
        input: PipelineInput,
        steps: Vec<String>,
        deterministic_guards: Vec<String>,
    ) -> Self {
        Self {
            command: command.into(),
            input,
            steps,
            deterministic_guards,
        }
    }
}

/// Input-source descriptors used in pipeline diagnostics.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PipelineInput {
    pub sources: Vec<PipelineInputSource>,
}

impl PipelineInput {
    pub fn new(sources: Vec<PipelineInputSource>) -> Self {
        Self { sources }
    }
}

/// Single input source descriptor.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PipelineInputSource {
    pub label: String,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl PipelineInputSource {
    pub fn path(label: impl Into<String>, path: impl Into<String>, format: Option<&str>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
            format: format.map(ToOwned::to_owned),
        }
    }
}
