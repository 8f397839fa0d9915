mod report;


pub use report::{PartSummary, SplitReport};

use crate::config::SplitConfig;
use crate::error::Result;
use crate::header::read_header_lines;
use crate::partition::chunk_bounds;
use crate::table::load_table;
use crate::writer::{OutputLayout, write_chunk};
use tracing::{debug, info};

/// Runs one input file through header extraction, parsing, partitioning and
/// part writing
pub struct Splitter {
    config: SplitConfig,
}

impl Splitter {
    pub fn new(config: SplitConfig) -> Self {
        Self { config }
    }

    /// Execute the split.
    ///
    /// Stops at the first failure; part files already written are left in
    /// place.
    pub fn run(&self) -> Result<SplitReport> {
        let config = &self.config;
        let layout = OutputLayout::new(&config.output, config.input_stem()?);

        let header = read_header_lines(&config.input, config.header_lines)?;
        debug!(count = header.len(), "Read header lines");

        let table = load_table(&config.input, config.header_lines, config.delimiter)?;
        info!(
            input = %config.input.display(),
            rows = table.len(),
            columns = table.column_count(),
            "Loaded table"
        );

        let bounds = chunk_bounds(table.len(), config.lines_per_file);
        info!(
            rows = table.len(),
            lines_per_file = config.lines_per_file.get(),
            chunks = bounds.len(),
            "Partitioned table"
        );

        let directory = layout.prepare()?;

        let mut parts = Vec::with_capacity(bounds.len());
        for chunk in &bounds {
            let path = layout.part_path(chunk.part);
            write_chunk(
                &path,
                &header,
                table.columns(),
                &table.rows()[chunk.range()],
                config.delimiter,
            )?;

            debug!(
                part = chunk.part,
                rows = chunk.len(),
                path = %path.display(),
                "Wrote part file"
            );

            parts.push(PartSummary {
                part: chunk.part,
                path,
                rows: chunk.len(),
            });
        }

        info!(
            directory = %directory.display(),
            files = parts.len(),
            "Split complete"
        );

        Ok(SplitReport {
            input: config.input.clone(),
            directory,
            rows: table.len(),
            lines_per_file: config.lines_per_file.get(),
            header_lines: config.header_lines,
            parts,
        })
    }
}

/// Split the file described by `config`
pub fn split_csv(config: SplitConfig) -> Result<SplitReport> {
    Splitter::new(config).run()
}
