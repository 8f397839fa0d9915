use crate::partition::PartIndex;
use serde::Serialize;
use std::path::PathBuf;

/// One written part file
#[derive(Debug, Clone, Serialize)]
pub struct PartSummary {
    pub part: PartIndex,
    pub path: PathBuf,
    /// Data rows in this file, column-name row excluded
    pub rows: usize,
}

/// Outcome of a completed split run
#[derive(Debug, Clone, Serialize)]
pub struct SplitReport {
    pub input: PathBuf,
    /// Per-input subdirectory that received the parts
    pub directory: PathBuf,
    /// Data rows parsed from the input
    pub rows: usize,
    pub lines_per_file: usize,
    pub header_lines: usize,
    pub parts: Vec<PartSummary>,
}

impl SplitReport {
    pub fn file_count(&self) -> usize {
        self.parts.len()
    }

    pub fn paths(&self) -> impl Iterator<Item = &PathBuf> {
        self.parts.iter().map(|p| &p.path)
    }
}
