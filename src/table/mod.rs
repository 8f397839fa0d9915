mod loader;

#[cfg(test)]
mod tests;

pub use loader::load_table;

use csv::ByteRecord;

/// Parsed tabular content that follows the raw header lines
#[derive(Debug, Clone)]
pub struct Table {
    /// Column-name row
    columns: ByteRecord,
    /// Data rows, each with exactly `columns.len()` fields
    rows: Vec<ByteRecord>,
}

impl Table {
    pub fn new(columns: ByteRecord, rows: Vec<ByteRecord>) -> Self {
        Self { columns, rows }
    }

    pub fn columns(&self) -> &ByteRecord {
        &self.columns
    }

    pub fn rows(&self) -> &[ByteRecord] {
        &self.rows
    }

    /// Number of data rows (the column-name row is not counted)
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}
