use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Outcome code assigned to every validated field.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ErrorCode {
    /// Passes type and length validation.
    E01,
    /// Fails type, passes length.
    E02,
    /// Passes type, fails length.
    E03,
    /// Fails type and length.
    E04,
    /// Field missing from the record.
    E05,
}

impl ErrorCode {
    pub const ALL: [ErrorCode; 5] = [Self::E01, Self::E02, Self::E03, Self::E04, Self::E05];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::E01 => "E01",
            Self::E02 => "E02",
            Self::E03 => "E03",
            Self::E04 => "E04",
            Self::E05 => "E05",
        }
    }

    /// Codes whose templates carry `{data_type}` / `{max_length}` slots.
    pub fn uses_format_slots(self) -> bool {
        matches!(self, Self::E02 | Self::E03)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One catalog entry as stored in the error-code definition file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorCodeEntry {
    pub code: ErrorCode,
    pub message_template: String,
}

/// Format slots a template may reference.
pub const TEMPLATE_SLOTS: [&str; 2] = ["data_type", "max_length"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("error code {code} is defined more than once")]
    DuplicateCode { code: ErrorCode },

    #[error("error code catalog has no entry for {code}")]
    MissingCode { code: ErrorCode },

    #[error("message template for {code} references undefined slot `{{{slot}}}`")]
    UndefinedSlot { code: ErrorCode, slot: String },
}

/// Complete, immutable mapping from every error code to its message template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorCodeCatalog {
    entries: BTreeMap<ErrorCode, ErrorCodeEntry>,
}

impl ErrorCodeCatalog {
    /// Indexes entries by code and checks the catalog is usable for a run.
    pub fn from_entries(entries: Vec<ErrorCodeEntry>) -> Result<Self, CatalogError> {
        let mut indexed = BTreeMap::new();
        for entry in entries {
            if entry.code.uses_format_slots() {
                check_template_slots(&entry)?;
            }
            let code = entry.code;
            if indexed.insert(code, entry).is_some() {
                return Err(CatalogError::DuplicateCode { code });
            }
        }

        for code in ErrorCode::ALL {
            if !indexed.contains_key(&code) {
                return Err(CatalogError::MissingCode { code });
            }
        }

        Ok(Self { entries: indexed })
    }

    pub fn entry(&self, code: ErrorCode) -> &ErrorCodeEntry {
        // Construction guarantees every code is present.
        &self.entries[&code]
    }

    pub fn entries(&self) -> impl Iterator<Item = &ErrorCodeEntry> {
        self.entries.values()
    }
}

fn check_template_slots(entry: &ErrorCodeEntry) -> Result<(), CatalogError> {
    for captures in slot_pattern().captures_iter(&entry.message_template) {
        let slot = &captures[1];
        if !TEMPLATE_SLOTS.contains(&slot) {
            return Err(CatalogError::UndefinedSlot {
                code: entry.code,
                slot: slot.to_string(),
            });
        }
    }
    Ok(())
}

fn slot_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\{([^{}]*)\}").expect("slot pattern is valid"))
}
