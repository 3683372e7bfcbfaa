use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Data type a field is declared as, or inferred to be.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum DataType {
    Digits,
    WordCharacters,
    Others,
}

impl DataType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Digits => "digits",
            Self::WordCharacters => "word_characters",
            Self::Others => "others",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Declared shape of one field within a section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubSectionDefinition {
    pub key: String,
    pub data_type: DataType,
    pub max_length: usize,
}

impl SubSectionDefinition {
    /// Column name holding this sub-section's value within a record of `section_key`.
    ///
    /// Sub-section keys extend their section key (`L1` + `1` = `L11`), so the
    /// column is the remaining suffix. A key that does not extend its section
    /// is used verbatim and will normally resolve to a missing column.
    pub fn column<'a>(&'a self, section_key: &str) -> &'a str {
        self.key.strip_prefix(section_key).unwrap_or(&self.key)
    }
}

/// Section descriptor with its ordered sub-sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SectionDefinition {
    pub key: String,
    #[serde(default)]
    pub sub_sections: Vec<SubSectionDefinition>,
}

/// Standard definition indexed by section key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaDefinition {
    sections: HashMap<String, SectionDefinition>,
}

impl SchemaDefinition {
    /// Indexes sections by key. A repeated key replaces the earlier section.
    pub fn from_sections(sections: Vec<SectionDefinition>) -> Self {
        let mut indexed = HashMap::with_capacity(sections.len());
        for section in sections {
            if let Some(previous) = indexed.insert(section.key.clone(), section) {
                tracing::warn!(
                    section = %previous.key,
                    "duplicate section definition; the later definition replaces it"
                );
            }
        }
        Self { sections: indexed }
    }

    pub fn section(&self, key: &str) -> Option<&SectionDefinition> {
        self.sections.get(key)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
