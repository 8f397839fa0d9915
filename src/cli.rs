use crate::config::{DEFAULT_DELIMITER, DEFAULT_HEADER_LINES, DEFAULT_LINES_PER_FILE, SplitConfig};
use crate::error::Result;
use clap::{ArgAction, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

/// Split a large CSV file into smaller files with a bounded number of rows
#[derive(Parser, Debug)]
#[command(name = "csvsplit", version, about)]
pub struct Cli {
    /// Path to the input CSV file
    #[arg(short, long)]
    pub input: PathBuf,

    /// Path to the output directory
    #[arg(short, long)]
    pub output: PathBuf,

    /// Number of data rows per output file
    #[arg(
        short = 'l',
        long,
        default_value_t = DEFAULT_LINES_PER_FILE as i64,
        allow_negative_numbers = true
    )]
    pub lines_per_file: i64,

    /// Number of raw leading lines repeated in each output file (short: -hl)
    #[arg(long, default_value_t = DEFAULT_HEADER_LINES as i64, allow_negative_numbers = true)]
    pub header_lines: i64,

    /// Field delimiter of the input, reused for the output files
    #[arg(short, long, default_value_t = DEFAULT_DELIMITER as char)]
    pub delimiter: char,

    /// Print the run report as JSON instead of the text summary
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Parse the process arguments, accepting the two-letter `-hl` flag
    pub fn parse_args() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }

    pub fn into_config(self) -> Result<SplitConfig> {
        SplitConfig::new(
            self.input,
            self.output,
            self.lines_per_file,
            self.header_lines,
        )?
        .with_delimiter(self.delimiter)
    }
}

/// Rewrite `-hl`, `-hl=N` and `-hlN` to `--header-lines` forms.
///
/// clap only supports single-character short flags and `-h` is taken by
/// help. Arguments after a bare `--` are passed through untouched.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut passthrough = false;

    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if passthrough {
                return arg;
            }
            let Some(text) = arg.to_str() else {
                return arg;
            };

            if text == "--" {
                passthrough = true;
                return arg;
            }
            if text == "-hl" {
                return OsString::from("--header-lines");
            }
            if let Some(value) = text.strip_prefix("-hl") {
                let value = value.strip_prefix('=').unwrap_or(value);
                if value.parse::<i64>().is_ok() {
                    return OsString::from(format!("--header-lines={}", value));
                }
            }
            arg
        })
        .collect()
}
