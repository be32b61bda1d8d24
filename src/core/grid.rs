//! Persistent two-dimensional grid.
//!
//! Backed by `im::Vector` in row-major order. Cloning is O(1) and `with`
//! returns a new grid that shares structure with the old one, so earlier
//! snapshots are never disturbed by later updates.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::error::EngineError;

/// Fixed-size `rows x cols` grid with copy-on-write updates.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawGrid<T>", bound(deserialize = "T: Deserialize<'de>"))]
pub struct Grid<T: Clone> {
    rows: usize,
    cols: usize,
    cells: Vector<T>,
}

#[derive(Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct RawGrid<T: Clone> {
    rows: usize,
    cols: usize,
    cells: Vector<T>,
}

impl<T: Clone> TryFrom<RawGrid<T>> for Grid<T> {
    type Error = EngineError;

    fn try_from(raw: RawGrid<T>) -> Result<Self, Self::Error> {
        if raw.rows.checked_mul(raw.cols) != Some(raw.cells.len()) {
            return Err(EngineError::InvalidSnapshot(format!(
                "{}x{} grid holds {} values",
                raw.rows,
                raw.cols,
                raw.cells.len()
            )));
        }
        Ok(Self {
            rows: raw.rows,
            cols: raw.cols,
            cells: raw.cells,
        })
    }
}

impl<T: Clone> Grid<T> {
    /// Create a grid with every slot set to `fill`.
    #[must_use]
    pub fn new(rows: usize, cols: usize, fill: T) -> Self {
        Self {
            rows,
            cols,
            cells: std::iter::repeat(fill).take(rows * cols).collect(),
        }
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    fn offset(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }

    /// Get the value at `(row, col)`, or `None` if out of range.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.offset(row, col).and_then(|i| self.cells.get(i))
    }

    /// Return a copy of this grid with `(row, col)` set to `value`.
    ///
    /// Returns `None` if the position is out of range.
    #[must_use]
    pub fn with(&self, row: usize, col: usize, value: T) -> Option<Self> {
        let index = self.offset(row, col)?;
        Some(Self {
            rows: self.rows,
            cols: self.cols,
            cells: self.cells.update(index, value),
        })
    }

    /// Iterate over one row, or nothing if `row` is out of range.
    pub fn row(&self, row: usize) -> impl Iterator<Item = &T> {
        let len = if row < self.rows { self.cols } else { 0 };
        self.cells.iter().skip(row.saturating_mul(self.cols)).take(len)
    }

    /// Iterate over `((row, col), &value)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), &T)> {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, v)| ((i / cols, i % cols), v))
    }

    /// Iterate over the values in row-major order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.cells.iter()
    }
}
