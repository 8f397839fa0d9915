mod bounds;


pub use bounds::{ChunkBounds, chunk_bounds, chunk_count};

/// 1-based position of a chunk among all chunks of a run
pub type PartIndex = usize;
