mod layout;


pub use layout::OutputLayout;

use crate::error::{Result, SplitError};
use crate::header::HeaderLines;
use csv::{ByteRecord, Terminator, WriterBuilder};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Write one part file: raw header lines, the column-name row, then `rows`.
///
/// Records use `\n` as terminator and are quoted only where needed. An
/// existing file at `path` is replaced.
pub fn write_chunk(
    path: &Path,
    header: &HeaderLines,
    columns: &ByteRecord,
    rows: &[ByteRecord],
    delimiter: u8,
) -> Result<()> {
    let file = File::create(path).map_err(|e| SplitError::io(path, e))?;
    let mut out = BufWriter::new(file);

    header
        .write_to(&mut out)
        .map_err(|e| SplitError::io(path, e))?;

    let mut writer = WriterBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(out);

    writer
        .write_byte_record(columns)
        .map_err(|e| map_csv_error(path, e))?;

    for row in rows {
        writer
            .write_byte_record(row)
            .map_err(|e| map_csv_error(path, e))?;
    }

    // Explicit flush so a failed write is reported instead of lost on drop
    writer.flush().map_err(|e| SplitError::io(path, e))?;

    Ok(())
}

fn map_csv_error(path: &Path, err: csv::Error) -> SplitError {
    let message = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(source) => SplitError::io(path, source),
        _ => SplitError::Parse(format!("{}: {}", path.display(), message)),
    }
}
