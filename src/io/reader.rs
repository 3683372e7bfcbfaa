use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde_json::Value;

use crate::io::format::delimited;
use crate::io::format::{csv, structured};
use crate::io::{Format, IoError};

/// Reads row objects; `delimiter` only applies to [`Format::Delimited`].
pub fn read_table<R: Read>(
    reader: R,
    format: Format,
    delimiter: char,
) -> Result<Vec<Value>, IoError> {
    match format {
        Format::Json => structured::read_json(reader),
        Format::Yaml => structured::read_yaml(reader),
        Format::Jsonl => structured::read_jsonl(reader),
        Format::Csv => csv::read_csv(reader),
        Format::Delimited => delimited::read_delimited(reader, delimiter),
    }
}

pub fn read_path(path: &Path, format: Format, delimiter: char) -> Result<Vec<Value>, IoError> {
    let file = File::open(path)?;
    read_table(file, format, delimiter)
}
