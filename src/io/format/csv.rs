use std::io::{Read, Write};

use serde_json::{Map, Value};

use crate::io::IoError;

/// Reads a headed CSV table. Empty cells are read as `null` (missing).
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<Value>, IoError> {
    let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let headers = csv_reader.headers()?.clone();
    let mut out = Vec::new();
    for row in csv_reader.records() {
        let record = row?;
        let mut map = Map::new();
        for (index, cell) in record.iter().enumerate() {
            let key = headers
                .get(index)
                .map(ToOwned::to_owned)
                .unwrap_or_else(|| format!("col_{index}"));
            let value = if cell.is_empty() {
                Value::Null
            } else {
                Value::String(cell.to_string())
            };
            map.insert(key, value);
        }
        out.push(Value::Object(map));
    }
    Ok(out)
}

/// Writes a header followed by pre-rendered rows. The header is written even
/// when there are no rows.
pub fn write_rows<W, H, R, C>(writer: W, headers: &[H], rows: &[R]) -> Result<(), IoError>
where
    W: Write,
    H: AsRef<[u8]>,
    R: AsRef<[C]>,
    C: AsRef<[u8]>,
{
    let mut csv_writer = csv::WriterBuilder::new().from_writer(writer);
    if !headers.is_empty() {
        csv_writer.write_record(headers)?;
    }
    for row in rows {
        csv_writer.write_record(row.as_ref())?;
    }
    csv_writer.flush()?;
    Ok(())
}
