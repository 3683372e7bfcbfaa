//! Observability hooks for a validation run.
//!
//! Record and field progress is reported through a [`ValidationObserver`]
//! supplied by the caller. [`TracingObserver`] forwards
//! events to `tracing`, [`RecordingObserver`] keeps them for inspection.

use crate::domain::catalog::ErrorCode;
use crate::domain::record::InputRecord;
use crate::domain::report::ReportRow;

/// Receives structured events while records are validated.
pub trait ValidationObserver {
    fn record_started(&mut self, _record: &InputRecord) {}

    fn field_validated(&mut self, _row: &ReportRow) {}

    fn field_missing(&mut self, _row: &ReportRow) {}

    fn section_skipped(&mut self, _record: &InputRecord) {}

    fn run_finished(&mut self, _rows: usize, _records: usize) {}
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ValidationObserver for NoopObserver {}

/// Emits one `tracing` event per observation.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl ValidationObserver for TracingObserver {
    fn record_started(&mut self, record: &InputRecord) {
        tracing::info!(
            record = record.index,
            section = %record.section,
            "started processing sub-sections"
        );
    }

    fn field_validated(&mut self, row: &ReportRow) {
        tracing::debug!(
            section = %row.section,
            sub_section = %row.sub_section,
            given = row.given_data_type.map(|data_type| data_type.as_str()),
            expected = %row.expected_data_type,
            length = row.given_length,
            max_length = row.expected_max_length,
            code = %row.error_code,
            "validated field"
        );
    }

    fn field_missing(&mut self, row: &ReportRow) {
        tracing::warn!(
            section = %row.section,
            sub_section = %row.sub_section,
            "missing field"
        );
    }

    fn section_skipped(&mut self, record: &InputRecord) {
        tracing::warn!(
            record = record.index,
            section = %record.section,
            "skipping record with unknown section"
        );
    }

    fn run_finished(&mut self, rows: usize, records: usize) {
        tracing::info!(rows, records, "finished processing input records");
    }
}

/// Observation kept by [`RecordingObserver`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationEvent {
    RecordStarted { index: usize, section: String },
    FieldValidated { sub_section: String, code: ErrorCode },
    FieldMissing { sub_section: String },
    SectionSkipped { index: usize, section: String },
    RunFinished { rows: usize, records: usize },
}

/// Collects events in order.
#[derive(Debug, Default, Clone)]
pub struct RecordingObserver {
    pub events: Vec<ValidationEvent>,
}

impl ValidationObserver for RecordingObserver {
    fn record_started(&mut self, record: &InputRecord) {
        self.events.push(ValidationEvent::RecordStarted {
            index: record.index,
            section: record.section.clone(),
        });
    }

    fn field_validated(&mut self, row: &ReportRow) {
        self.events.push(ValidationEvent::FieldValidated {
            sub_section: row.sub_section.clone(),
            code: row.error_code,
        });
    }

    fn field_missing(&mut self, row: &ReportRow) {
        self.events.push(ValidationEvent::FieldMissing {
            sub_section: row.sub_section.clone(),
        });
    }

    fn section_skipped(&mut self, record: &InputRecord) {
        self.events.push(ValidationEvent::SectionSkipped {
            index: record.index,
            section: record.section.clone(),
        });
    }

    fn run_finished(&mut self, rows: usize, records: usize) {
        self.events.push(ValidationEvent::RunFinished { rows, records });
    }
}
