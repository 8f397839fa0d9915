use crate::error::{Result, SplitError};
use crate::partition::PartIndex;
use std::fs;
use std::path::PathBuf;

/// Where the parts of one input file end up:
/// `<root>/<stem>/<stem>_part<N>.csv`
#[derive(Debug, Clone)]
pub struct OutputLayout {
    root: PathBuf,
    stem: String,
}

impl OutputLayout {
    pub fn new(root: impl Into<PathBuf>, stem: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            stem: stem.into(),
        }
    }

    /// Per-input subdirectory holding every part file
    pub fn directory(&self) -> PathBuf {
        self.root.join(&self.stem)
    }

    pub fn part_file_name(&self, part: PartIndex) -> String {
        format!("{}_part{}.csv", self.stem, part)
    }

    pub fn part_path(&self, part: PartIndex) -> PathBuf {
        self.directory().join(self.part_file_name(part))
    }

    /// Create the root and per-input directories if they are missing
    pub fn prepare(&self) -> Result<PathBuf> {
        fs::create_dir_all(&self.root).map_err(|e| SplitError::io(&self.root, e))?;

        let directory = self.directory();
        fs::create_dir_all(&directory).map_err(|e| SplitError::io(&directory, e))?;

        Ok(directory)
    }
}
