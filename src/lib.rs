// Public API exports
pub mod cli;
pub mod config;
pub mod error;
pub mod header;
pub mod partition;
pub mod splitter;
pub mod table;
pub mod writer;

// Re-export main types for convenience
pub use cli::Cli;
pub use config::{DEFAULT_HEADER_LINES, DEFAULT_LINES_PER_FILE, SplitConfig};
pub use error::{ErrorKind, SplitError};

pub use header::{HeaderLines, read_header_lines};
pub use table::{Table, load_table};

pub use partition::{ChunkBounds, PartIndex, chunk_bounds, chunk_count};
pub use writer::{OutputLayout, write_chunk};

pub use splitter::{PartSummary, SplitReport, Splitter, split_csv};
