use crate::error::{Result, SplitError};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

/// Raw leading lines of the input, repeated verbatim in every output file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderLines {
    lines: Vec<Vec<u8>>,
}

impl HeaderLines {
    pub fn new(lines: Vec<Vec<u8>>) -> Self {
        Self { lines }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &[u8]> {
        self.lines.iter().map(Vec::as_slice)
    }

    /// Write every line followed by `\n`
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        for line in &self.lines {
            writer.write_all(line)?;
            writer.write_all(b"\n")?;
        }
        Ok(())
    }
}

/// Read the first `count` raw lines of `path`.
///
/// Lines are returned without their terminator. Fails if the file holds
/// fewer than `count` lines.
pub fn read_header_lines(path: &Path, count: usize) -> Result<HeaderLines> {
    if count == 0 {
        return Ok(HeaderLines::default());
    }

    let file = File::open(path).map_err(|e| SplitError::io(path, e))?;
    let mut reader = BufReader::new(file);
    let lines = read_raw_lines(&mut reader, count).map_err(|e| SplitError::io(path, e))?;

    Ok(HeaderLines::new(lines))
}

/// Consume `count` lines from `reader`, stripping `\n` / `\r\n`.
///
/// Shared by the header pass and the table loader so both agree on what a
/// line is.
pub(crate) fn read_raw_lines<R: BufRead>(
    reader: &mut R,
    count: usize,
) -> io::Result<Vec<Vec<u8>>> {
    let mut lines = Vec::with_capacity(count);

    for _ in 0..count {
        let mut line = Vec::new();
        if reader.read_until(b'\n', &mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!(
                    "expected at least {} header lines, found {}",
                    count,
                    lines.len()
                ),
            ));
        }
        strip_terminator(&mut line);
        lines.push(line);
    }

    Ok(lines)
}

fn strip_terminator(line: &mut Vec<u8>) {
    if line.last() == Some(&b'\n') {
        line.pop();
        if line.last() == Some(&b'\r') {
            line.pop();
        }
    }
}
