use std::io::{BufRead, BufReader, Read, Write};

use serde::Serialize;
use serde_json::Value;

use crate::io::IoError;

/// Reads a JSON document; a top-level array yields one value per element.
pub fn read_json<R: Read>(reader: R) -> Result<Vec<Value>, IoError> {
    let value: Value = serde_json::from_reader(reader)?;
    Ok(flatten_top_level(value))
}

/// Reads a YAML document with the same top-level array handling as JSON.
pub fn read_yaml<R: Read>(reader: R) -> Result<Vec<Value>, IoError> {
    let yaml_value: serde_yaml::Value = serde_yaml::from_reader(reader)?;
    let json_value = serde_json::to_value(yaml_value)?;
    Ok(flatten_top_level(json_value))
}

/// Reads one JSON value per non-blank line.
pub fn read_jsonl<R: Read>(reader: R) -> Result<Vec<Value>, IoError> {
    let mut values = Vec::new();
    for line in BufReader::new(reader).lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        values.push(serde_json::from_str(trimmed)?);
    }
    Ok(values)
}

/// Writes all values as one pretty-printed JSON array.
pub fn write_json<W: Write, T: Serialize>(mut writer: W, values: &[T]) -> Result<(), IoError> {
    serde_json::to_writer_pretty(&mut writer, values)?;
    writer.write_all(b"\n")?;
    Ok(())
}

pub fn write_yaml<W: Write, T: Serialize>(writer: W, values: &[T]) -> Result<(), IoError> {
    serde_yaml::to_writer(writer, values)?;
    Ok(())
}

pub fn write_jsonl<W: Write, T: Serialize>(mut writer: W, values: &[T]) -> Result<(), IoError> {
    for value in values {
        serde_json::to_writer(&mut writer, value)?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}

fn flatten_top_level(value: Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items,
        single => vec![single],
    }
}
