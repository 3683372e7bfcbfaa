use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Value, json};

use crate::domain::catalog::{ErrorCodeCatalog, ErrorCodeEntry};
use crate::domain::error::CommandError;
use crate::domain::record::{InputRecord, records_from_values};
use crate::domain::report::{RunSummary, ValidationReport};
use crate::domain::schema::{SchemaDefinition, SectionDefinition};
use crate::engine::observer::ValidationObserver;
use crate::engine::validate::{self, UnknownSectionPolicy, ValidateOptions};
use crate::io::{self, Format};

/// Input arguments for the validate command execution API.
#[derive(Debug, Clone)]
pub struct ValidateCommandArgs {
    pub schema: PathBuf,
    pub error_codes: PathBuf,
    pub input: PathBuf,
    pub input_format: Option<Format>,
    pub delimiter: char,
    pub report: PathBuf,
    pub report_format: Option<Format>,
    pub summary: PathBuf,
    pub unknown_sections: UnknownSectionPolicy,
}

/// Structured command response that carries exit-code mapping and JSON payload.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ValidateCommandResponse {
    pub exit_code: i32,
    pub payload: Value,
}

/// Runs validation end to end and maps the outcome to an exit code:
/// 0 when every field passes, 2 when the report contains failures,
/// 3 for input or definition problems and 1 for output failures.
pub fn run(
    args: &ValidateCommandArgs,
    observer: &mut dyn ValidationObserver,
) -> ValidateCommandResponse {
    match execute(args, observer) {
        Ok(report) => {
            let summary = RunSummary::new(
                &report,
                args.report.display().to_string(),
                args.summary.display().to_string(),
            );
            let exit_code = if summary.passed { 0 } else { 2 };
            match serde_json::to_value(&summary) {
                Ok(payload) => ValidateCommandResponse { exit_code, payload },
                Err(_) => ValidateCommandResponse {
                    exit_code: 1,
                    payload: json!({
                        "error": "internal_error",
                        "message": "failed to serialize run summary"
                    }),
                },
            }
        }
        Err(error) => error_response(&error),
    }
}

pub fn error_response(error: &CommandError) -> ValidateCommandResponse {
    ValidateCommandResponse {
        exit_code: error.exit_code(),
        payload: json!({
            "error": error.kind(),
            "message": error.to_string(),
        }),
    }
}

/// Loads definitions and input, validates, and writes report and summary.
pub fn execute(
    args: &ValidateCommandArgs,
    observer: &mut dyn ValidationObserver,
) -> Result<ValidationReport, CommandError> {
    tracing::info!("started validation run");
    let schema = load_schema(&args.schema)?;
    tracing::info!(path = %args.schema.display(), sections = schema.len(), "read standard definition");
    if schema.is_empty() {
        tracing::warn!(path = %args.schema.display(), "standard definition declares no sections");
    }
    let catalog = load_catalog(&args.error_codes)?;
    tracing::info!(path = %args.error_codes.display(), "read error codes");
    let records = load_records(&args.input, args.input_format, args.delimiter)?;
    tracing::info!(path = %args.input.display(), records = records.len(), "parsed input");

    let options = ValidateOptions {
        unknown_sections: args.unknown_sections,
    };
    let report = validate::generate_report(&records, &schema, &catalog, options, observer)?;

    write_outputs(args, &report)?;
    tracing::info!("finished validation run");
    Ok(report)
}

pub fn load_schema(path: &Path) -> Result<SchemaDefinition, CommandError> {
    let sections: Vec<SectionDefinition> = load_definitions(path, "standard definition")?;
    Ok(SchemaDefinition::from_sections(sections))
}

pub fn load_catalog(path: &Path) -> Result<ErrorCodeCatalog, CommandError> {
    let entries: Vec<ErrorCodeEntry> = load_definitions(path, "error codes")?;
    ErrorCodeCatalog::from_entries(entries).map_err(|source| CommandError::Catalog {
        path: path.display().to_string(),
        source,
    })
}

pub fn load_records(
    path: &Path,
    format: Option<Format>,
    delimiter: char,
) -> Result<Vec<InputRecord>, CommandError> {
    let format = io::resolve_input_format(format, Some(path))
        .map_err(|source| CommandError::ResolveFormat {
            label: "input",
            source,
        })?;
    let values = io::reader::read_path(path, format, delimiter).map_err(|source| {
        CommandError::ReadFile {
            label: "input",
            path: path.display().to_string(),
            source,
        }
    })?;
    records_from_values(&values).map_err(|source| CommandError::Record {
        path: path.display().to_string(),
        source,
    })
}

fn load_definitions<T: DeserializeOwned>(
    path: &Path,
    label: &'static str,
) -> Result<Vec<T>, CommandError> {
    let format = io::resolve_input_format(None, Some(path))
        .map_err(|source| CommandError::ResolveFormat { label, source })?;
    let values = io::reader::read_path(path, format, io::format::delimited::DEFAULT_DELIMITER)
        .map_err(|source| CommandError::ReadFile {
            label,
            path: path.display().to_string(),
            source,
        })?;
    serde_json::from_value(Value::Array(values)).map_err(|source| {
        CommandError::InvalidDefinitions {
            label,
            path: path.display().to_string(),
            source,
        }
    })
}

fn write_outputs(args: &ValidateCommandArgs, report: &ValidationReport) -> Result<(), CommandError> {
    let report_format = io::resolve_output_format(args.report_format, Some(&args.report))
        .map_err(|source| CommandError::ResolveFormat {
            label: "report",
            source,
        })?;

    tracing::info!(path = %args.report.display(), format = %report_format, "writing report");
    io::writer::create_output(&args.report)
        .and_then(|writer| io::writer::write_report(writer, report_format, &report.rows))
        .map_err(|source| CommandError::WriteOutput {
            label: "report",
            path: args.report.display().to_string(),
            source,
        })?;

    tracing::info!(path = %args.summary.display(), "writing summary");
    io::writer::create_output(&args.summary)
        .and_then(|writer| io::writer::write_summary(writer, &report.summary_text()))
        .map_err(|source| CommandError::WriteOutput {
            label: "summary",
            path: args.summary.display().to_string(),
            source,
        })
}

/// Ordered pipeline-step names used for `--emit-pipeline` diagnostics.
pub fn pipeline_steps() -> Vec<String> {
    vec![
        "load_standard_definition".to_string(),
        "load_error_codes".to_string(),
        "read_input_records".to_string(),
        "validate_sub_sections".to_string(),
        "write_report".to_string(),
        "write_summary".to_string(),
    ]
}

/// Determinism guards planned for the `validate` command.
pub fn deterministic_guards() -> Vec<String> {
    vec![
        "rust_native_execution".to_string(),
        "input_record_order_preserved".to_string(),
        "schema_sub_section_order_preserved".to_string(),
    ]
}
