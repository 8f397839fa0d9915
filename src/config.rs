use crate::error::{Result, SplitError};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

/// Default maximum data rows per output file (2^16 - 1)
pub const DEFAULT_LINES_PER_FILE: usize = 65_535;

/// Default number of raw leading lines repeated in every output file
pub const DEFAULT_HEADER_LINES: usize = 0;

/// Default field delimiter
pub const DEFAULT_DELIMITER: u8 = b',';

/// Validated settings for a single split run
#[derive(Debug, Clone)]
pub struct SplitConfig {
    /// Source CSV file
    pub input: PathBuf,
    /// Root directory that receives the per-input subdirectory
    pub output: PathBuf,
    /// Maximum data rows per output file
    pub lines_per_file: NonZeroUsize,
    /// Raw leading lines copied verbatim into every output file
    pub header_lines: usize,
    /// Field delimiter used for reading and writing
    pub delimiter: u8,
}

impl SplitConfig {
    /// Build a config from raw option values.
    ///
    /// Counts are taken as signed integers so that zero or negative values
    /// coming from the command line are reported as configuration errors.
    pub fn new(
        input: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
        lines_per_file: i64,
        header_lines: i64,
    ) -> Result<Self> {
        let lines_per_file = usize::try_from(lines_per_file)
            .ok()
            .and_then(NonZeroUsize::new)
            .ok_or_else(|| {
                SplitError::Config(format!(
                    "lines per file must be a positive integer, got {}",
                    lines_per_file
                ))
            })?;

        let header_lines = usize::try_from(header_lines).map_err(|_| {
            SplitError::Config(format!(
                "header lines must not be negative, got {}",
                header_lines
            ))
        })?;

        Ok(Self {
            input: input.into(),
            output: output.into(),
            lines_per_file,
            header_lines,
            delimiter: DEFAULT_DELIMITER,
        })
    }

    /// Set the field delimiter (must be a single ASCII character)
    pub fn with_delimiter(mut self, delimiter: char) -> Result<Self> {
        if !delimiter.is_ascii() || matches!(delimiter, '"' | '\n' | '\r') {
            return Err(SplitError::Config(format!(
                "delimiter must be a single ASCII character other than a quote or line break, got {:?}",
                delimiter
            )));
        }
        self.delimiter = delimiter as u8;
        Ok(self)
    }

    /// File name of the input without its final extension.
    ///
    /// Names both the per-input subdirectory and every part file.
    pub fn input_stem(&self) -> Result<String> {
        stem_of(&self.input)
    }
}

fn stem_of(path: &Path) -> Result<String> {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| {
            SplitError::Config(format!(
                "cannot derive an output name from input path {}",
                path.display()
            ))
        })?;

    Ok(stem.to_string())
}
