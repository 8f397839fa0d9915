use super::PartIndex;
use std::num::NonZeroUsize;
use std::ops::Range;

/// Half-open row range `[start, end)` assigned to one output file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkBounds {
    pub part: PartIndex,
    pub start: usize,
    pub end: usize,
}

impl ChunkBounds {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Number of chunks needed for `rows` rows, `chunk_size` rows at a time.
///
/// An empty table needs no chunks.
pub fn chunk_count(rows: usize, chunk_size: NonZeroUsize) -> usize {
    if rows == 0 {
        return 0;
    }
    (rows - 1) / chunk_size.get() + 1
}

/// Split `[0, rows)` into contiguous ranges of at most `chunk_size` rows.
///
/// Every range but the last is full; ranges come back in row order with
/// part indices starting at 1.
pub fn chunk_bounds(rows: usize, chunk_size: NonZeroUsize) -> Vec<ChunkBounds> {
    let size = chunk_size.get();

    (1..=chunk_count(rows, chunk_size))
        .map(|part| {
            let start = (part - 1) * size;
            let end = part.saturating_mul(size).min(rows);
            ChunkBounds { part, start, end }
        })
        .collect()
}

#[cfg(test)]
mod bounds_tests {
    use super::*;

    fn size(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn test_zero_rows() {
        assert_eq!(chunk_count(0, size(100)), 0);
        assert!(chunk_bounds(0, size(100)).is_empty());
    }

    #[test]
    fn test_exact_multiple() {
        assert_eq!(chunk_count(9, size(3)), 3);
        let bounds = chunk_bounds(9, size(3));
        assert_eq!(bounds.last().unwrap().range(), 6..9);
    }

    #[test]
    fn test_single_row() {
        let bounds = chunk_bounds(1, size(65_535));
        assert_eq!(bounds, vec![ChunkBounds { part: 1, start: 0, end: 1 }]);
    }

    #[test]
    fn test_chunk_size_one() {
        let bounds = chunk_bounds(4, size(1));
        assert_eq!(bounds.len(), 4);
        assert!(bounds.iter().all(|b| b.len() == 1));
    }

    #[test]
    fn test_huge_chunk_size() {
        let bounds = chunk_bounds(5, size(usize::MAX));
        assert_eq!(bounds, vec![ChunkBounds { part: 1, start: 0, end: 5 }]);
    }
}
