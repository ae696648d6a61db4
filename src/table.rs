//! Upper-triangular table storage used by the engine.
//!
//! An `IntervalTable` over `n` items stores one value per closed interval
//! `[i, j]` with `i <= j < n`, packed row by row into a single vector of
//! `n * (n + 1) / 2` cells.

use std::ops::Index;

/// Packed upper-triangular `n x n` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalTable<T> {
    size: usize,
    cells: Vec<T>,
}

impl<T: Clone> IntervalTable<T> {
    /// Table over `size` items with every cell set to `value`.
    pub fn filled(size: usize, value: T) -> Self {
        Self {
            size,
            cells: vec![value; triangle_len(size)],
        }
    }
}

impl<T> IntervalTable<T> {
    /// Number of items (the table is `size x size`).
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of stored cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if the table covers no items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Value for interval `[i, j]`, or `None` when `i > j` or `j >= size`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Option<&T> {
        self.offset(i, j).map(|idx| &self.cells[idx])
    }

    /// Overwrite the value for interval `[i, j]`.
    ///
    /// # Panics
    /// Panics if `i > j` or `j >= size`.
    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: T) {
        let idx = self
            .offset(i, j)
            .unwrap_or_else(|| panic!("interval [{i}, {j}] outside table of size {}", self.size));
        self.cells[idx] = value;
    }

    /// Entries `[i, i]` in index order.
    pub fn diagonal(&self) -> impl Iterator<Item = &T> + '_ {
        (0..self.size).map(move |i| &self.cells[row_start(self.size, i)])
    }

    fn offset(&self, i: usize, j: usize) -> Option<usize> {
        if i <= j && j < self.size {
            Some(row_start(self.size, i) + (j - i))
        } else {
            None
        }
    }
}

impl<T> Index<(usize, usize)> for IntervalTable<T> {
    type Output = T;

    fn index(&self, (i, j): (usize, usize)) -> &T {
        self.get(i, j)
            .unwrap_or_else(|| panic!("interval [{i}, {j}] outside table of size {}", self.size))
    }
}

#[inline]
fn triangle_len(size: usize) -> usize {
    size * (size + 1) / 2
}

/// Offset of cell `[i, i]`: rows before `i` hold `size`, `size - 1`, ... cells.
#[inline]
fn row_start(size: usize, i: usize) -> usize {
    i * size - i * i.saturating_sub(1) / 2
}
