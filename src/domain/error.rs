use thiserror::Error;

use crate::domain::catalog::CatalogError;
use crate::domain::record::RecordError;
use crate::engine::validate::ValidateError;
use crate::io::IoError;

/// Errors produced by the `validate` and `codes` command boundaries.
#[derive(Debug, Error)]
pub enum CommandError {
    /// File format could not be resolved from flags or path.
    #[error("failed to resolve {label} format: {source}")]
    ResolveFormat {
        label: &'static str,
        #[source]
        source: IoError,
    },

    /// File could not be opened or parsed.
    #[error("failed to read {label} `{path}`: {source}")]
    ReadFile {
        label: &'static str,
        path: String,
        #[source]
        source: IoError,
    },

    /// Definition file parsed but does not have the expected shape.
    #[error("invalid {label} `{path}`: {source}")]
    InvalidDefinitions {
        label: &'static str,
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Error-code catalog is incomplete or inconsistent.
    #[error("unusable error code catalog `{path}`: {source}")]
    Catalog {
        path: String,
        #[source]
        source: CatalogError,
    },

    /// Input row could not be turned into a record.
    #[error("invalid input `{path}`: {source}")]
    Record {
        path: String,
        #[source]
        source: RecordError,
    },

    /// Validation aborted.
    #[error(transparent)]
    Validate(#[from] ValidateError),

    /// Output could not be written.
    #[error("failed to write {label} `{path}`: {source}")]
    WriteOutput {
        label: &'static str,
        path: String,
        #[source]
        source: IoError,
    },
}

impl CommandError {
    /// Machine-readable error kind used in CLI error payloads.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validate(ValidateError::SchemaLookupFailure { .. }) => "schema_lookup_failure",
            Self::Catalog { .. } | Self::InvalidDefinitions { .. } => "configuration_error",
            Self::WriteOutput {
                source: IoError::Io(_),
                ..
            } => "internal_error",
            _ => "input_usage_error",
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self.kind() {
            "internal_error" => 1,
            _ => 3,
        }
    }
}
