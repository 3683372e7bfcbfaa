use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::domain::report::{REPORT_COLUMNS, ReportRow};
use crate::io::format::{csv, structured};
use crate::io::{Format, IoError};

/// Writes report rows. CSV output always carries the fixed report header.
pub fn write_report<W: Write>(
    mut writer: W,
    format: Format,
    rows: &[ReportRow],
) -> Result<(), IoError> {
    match format {
        Format::Csv => {
            let cells: Vec<[String; 7]> = rows.iter().map(ReportRow::cells).collect();
            csv::write_rows(&mut writer, &REPORT_COLUMNS, &cells)?;
        }
        Format::Json => structured::write_json(&mut writer, rows)?,
        Format::Jsonl => structured::write_jsonl(&mut writer, rows)?,
        Format::Yaml => structured::write_yaml(&mut writer, rows)?,
        Format::Delimited => {
            return Err(IoError::UnsupportedOutput {
                format: Format::Delimited.as_str(),
            });
        }
    }
    writer.flush()?;
    Ok(())
}

pub fn write_summary<W: Write>(mut writer: W, summary: &str) -> Result<(), IoError> {
    writer.write_all(summary.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Creates `path` (and missing parent directories) for buffered writing.
pub fn create_output(path: &Path) -> Result<BufWriter<File>, IoError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(BufWriter::new(File::create(path)?))
}
