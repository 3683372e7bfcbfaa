use std::io::Read;

use serde_json::{Map, Value};

use crate::domain::record::SECTION_COLUMN;
use crate::io::IoError;

pub const DEFAULT_DELIMITER: char = '&';

/// Reads headerless delimited rows into row objects.
///
/// The first cell of each line is the section; the remaining cells become
/// columns `"1"`, `"2"`, ... The widest line fixes the column count and
/// shorter lines are padded with `null`. Blank lines are skipped and cells
/// are kept verbatim, quotes included.
pub fn read_delimited<R: Read>(reader: R, delimiter: char) -> Result<Vec<Value>, IoError> {
    let delimiter = u8::try_from(delimiter)
        .ok()
        .filter(u8::is_ascii)
        .ok_or(IoError::InvalidDelimiter { delimiter })?;
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .delimiter(delimiter)
        .from_reader(reader);

    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut width = 0;
    for record in csv_reader.records() {
        let record = record?;
        let cells: Vec<String> = record.iter().map(ToOwned::to_owned).collect();
        width = width.max(cells.len());
        rows.push(cells);
    }

    Ok(rows
        .into_iter()
        .map(|cells| row_object(cells, width))
        .collect())
}

fn row_object(cells: Vec<String>, width: usize) -> Value {
    let mut cells = cells.into_iter();
    let mut map = Map::new();
    map.insert(
        SECTION_COLUMN.to_string(),
        cells.next().map(Value::String).unwrap_or(Value::Null),
    );
    for column in 1..width {
        let cell = cells.next().map(Value::String).unwrap_or(Value::Null);
        map.insert(column.to_string(), cell);
    }
    Value::Object(map)
}
