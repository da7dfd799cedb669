//! Test utilities and mock types for prorata development.
//!
//! Provides [`VecRowSource`], an in-memory [`RowSource`] backed by a
//! vector of `(value, weight)` pairs, plus a [`CountingRowSource`]
//! wrapper that records how often each cell is read.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::cell::RefCell;
use std::collections::HashMap;

use prorata_core::{RowSource, SplitWidth};

/// Mock implementation of [`RowSource`] backed by a `Vec` of optional
/// `(value, weight)` pairs.
///
/// Construct with [`from_pairs`](VecRowSource::from_pairs) for full
/// control over absent cells, or [`present`](VecRowSource::present) when
/// every cell is populated.
#[derive(Clone, Debug)]
pub struct VecRowSource<W> {
    rows: Vec<(Option<W>, Option<W>)>,
}

impl<W: SplitWidth> VecRowSource<W> {
    /// Build a source from explicit optional cells.
    pub fn from_pairs(rows: Vec<(Option<W>, Option<W>)>) -> Self {
        Self { rows }
    }

    /// Build a source where every value and weight is present.
    ///
    /// # Panics
    ///
    /// Panics if the slices have different lengths.
    pub fn present(values: &[W], weights: &[W]) -> Self {
        assert_eq!(
            values.len(),
            weights.len(),
            "values and weights must have equal length"
        );
        Self {
            rows: values
                .iter()
                .zip(weights)
                .map(|(&v, &w)| (Some(v), Some(w)))
                .collect(),
        }
    }
}

impl<W: SplitWidth> RowSource<W> for VecRowSource<W> {
    fn len(&self) -> usize {
        self.rows.len()
    }

    fn value(&self, pos: usize) -> Option<W> {
        self.rows[pos].0
    }

    fn weight(&self, pos: usize) -> Option<W> {
        self.rows[pos].1
    }
}

/// Wraps another [`RowSource`] and counts reads per (column, position).
///
/// Used to assert the engine's read-once contract and that cached
/// lookups do not touch the source again.
pub struct CountingRowSource<S> {
    inner: S,
    reads: RefCell<HashMap<(u8, usize), usize>>,
}

/// Column tags for [`CountingRowSource::read_count`].
pub const COL_VALUE: u8 = 0;
/// See [`COL_VALUE`].
pub const COL_WEIGHT: u8 = 1;

impl<S> CountingRowSource<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            reads: RefCell::new(HashMap::new()),
        }
    }

    /// Number of reads observed for one (column, position) cell.
    pub fn read_count(&self, column: u8, pos: usize) -> usize {
        self.reads.borrow().get(&(column, pos)).copied().unwrap_or(0)
    }

    /// Total reads observed across all cells.
    pub fn total_reads(&self) -> usize {
        self.reads.borrow().values().sum()
    }

    fn record(&self, column: u8, pos: usize) {
        *self.reads.borrow_mut().entry((column, pos)).or_insert(0) += 1;
    }
}

impl<W: SplitWidth, S: RowSource<W>> RowSource<W> for CountingRowSource<S> {
    fn len(&self) -> usize {
        self.inner.len()
    }

    fn value(&self, pos: usize) -> Option<W> {
        self.record(COL_VALUE, pos);
        self.inner.value(pos)
    }

    fn weight(&self, pos: usize) -> Option<W> {
        self.record(COL_WEIGHT, pos);
        self.inner.weight(pos)
    }
}
