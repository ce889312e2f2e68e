/// Rectangular integer matrix parsed from the bordered text grid.
/// Every row has the same width; zero rows means the upstream body
/// contained no data lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Matrix {
    pub rows: Vec<Vec<i64>>,
}

impl Matrix {
    pub fn new(rows: Vec<Vec<i64>>) -> Self {
        Self { rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn col_count(&self) -> usize {
        self.rows.first().map_or(0, |row| row.len())
    }

    pub fn cell_count(&self) -> usize {
        self.row_count() * self.col_count()
    }
}

/// Matrix elements flattened in clockwise spiral order.
pub type FlatResult = Vec<i64>;
