//! Run configuration loaded from an optional TOML file.
//!
//! Every field has a default matching the conventional layout
//! (`inputs/` for definitions and input, `parsed/` for outputs), so an empty
//! or absent file is a valid configuration. Command-line flags override
//! individual values after loading.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::engine::validate::UnknownSectionPolicy;
use crate::io::Format;
use crate::io::format::delimited::DEFAULT_DELIMITER;
use crate::logging::LogFormat;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file `{path}`: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file `{path}`: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("delimiter must be exactly one ASCII character, got `{value}`")]
    InvalidDelimiter { value: String },

    #[error("invalid input format `{value}`")]
    InvalidFormat { value: String },

    #[error("invalid log level `{value}`")]
    InvalidLogLevel { value: String },
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub definitions: DefinitionsConfig,
    pub input: InputConfig,
    pub output: OutputConfig,
    pub validation: ValidationConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct DefinitionsConfig {
    pub schema: PathBuf,
    pub error_codes: PathBuf,
}

impl Default for DefinitionsConfig {
    fn default() -> Self {
        Self {
            schema: PathBuf::from("inputs/standard_definition.json"),
            error_codes: PathBuf::from("inputs/error_codes.json"),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct InputConfig {
    pub path: PathBuf,
    /// Overrides extension-based detection when set.
    pub format: Option<String>,
    pub delimiter: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("inputs/input_file.txt"),
            format: None,
            delimiter: DEFAULT_DELIMITER.to_string(),
        }
    }
}

impl InputConfig {
    pub fn delimiter_char(&self) -> Result<char, ConfigError> {
        parse_delimiter(&self.delimiter)
    }

    pub fn explicit_format(&self) -> Result<Option<Format>, ConfigError> {
        self.format
            .as_deref()
            .map(|value| {
                value.parse::<Format>().map_err(|_| ConfigError::InvalidFormat {
                    value: value.to_string(),
                })
            })
            .transpose()
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub report: PathBuf,
    pub summary: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            report: PathBuf::from("parsed/report.csv"),
            summary: PathBuf::from("parsed/summary.txt"),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ValidationConfig {
    pub unknown_sections: UnknownSectionPolicy,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::Compact,
            file: None,
        }
    }
}

impl LoggingConfig {
    pub fn level(&self) -> Result<tracing::Level, ConfigError> {
        self.level
            .parse()
            .map_err(|_| ConfigError::InvalidLogLevel {
                value: self.level.clone(),
            })
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&text).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Loads `path` when given, otherwise returns the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

pub fn parse_delimiter(value: &str) -> Result<char, ConfigError> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) if ch.is_ascii() => Ok(ch),
        _ => Err(ConfigError::InvalidDelimiter {
            value: value.to_string(),
        }),
    }
}
