use super::Table;
use crate::error::{Result, SplitError};
use crate::header::read_raw_lines;
use csv::{ByteRecord, ReaderBuilder};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

/// Load the table that follows the first `skip` raw lines of `path`.
///
/// The first remaining record names the columns; every later record must
/// have the same number of fields. Blank lines are ignored.
pub fn load_table(path: &Path, skip: usize, delimiter: u8) -> Result<Table> {
    let file = File::open(path).map_err(|e| SplitError::io(path, e))?;
    let mut reader = BufReader::new(file);

    read_raw_lines(&mut reader, skip).map_err(|e| SplitError::io(path, e))?;

    let mut csv_reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(false)
        .from_reader(reader);

    let columns = csv_reader
        .byte_headers()
        .map_err(|e| map_csv_error(path, skip, e))?
        .clone();

    if columns.is_empty() {
        return Err(SplitError::Parse(format!(
            "{} has no column-name row after skipping {} header lines",
            path.display(),
            skip
        )));
    }

    let mut rows = Vec::new();
    let mut record = ByteRecord::new();
    while csv_reader
        .read_byte_record(&mut record)
        .map_err(|e| map_csv_error(path, skip, e))?
    {
        rows.push(record.clone());
    }

    debug!(
        path = %path.display(),
        columns = columns.len(),
        rows = rows.len(),
        "Loaded table"
    );

    Ok(Table::new(columns, rows))
}

/// Translate a csv reader error into I/O or parse failures.
///
/// Line numbers reported by the reader are relative to the first line after
/// the skipped header lines, so `skip` is added back.
fn map_csv_error(path: &Path, skip: usize, err: csv::Error) -> SplitError {
    let message = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(source) => SplitError::io(path, source),
        csv::ErrorKind::UnequalLengths {
            pos,
            expected_len,
            len,
        } => {
            let line = pos
                .map(|p| format!("line {}", p.line() + skip as u64))
                .unwrap_or_else(|| "unknown line".to_string());
            SplitError::Parse(format!(
                "{}: record on {} has {} fields, expected {}",
                path.display(),
                line,
                len,
                expected_len
            ))
        }
        _ => SplitError::Parse(format!("{}: {}", path.display(), message)),
    }
}
