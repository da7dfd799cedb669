//! The [`RowSource`] trait through which a group's rows are supplied.

use crate::width::SplitWidth;

/// Random-access view of the current group's rows.
///
/// Implemented by the host's row storage to give the engine read access
/// to the two input columns of each row. The engine reads each
/// (row, column) pair exactly once per group computation, but in no
/// guaranteed order relative to other rows.
///
/// Group boundary detection is the host's concern: a `RowSource` always
/// presents exactly one group, with positions `0..len()`.
pub trait RowSource<W: SplitWidth> {
    /// Number of rows in the current group. May be zero.
    fn len(&self) -> usize;

    /// Whether the current group has no rows.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The numerator value of the row at `pos`, or `None` if absent.
    ///
    /// `pos` is in `0..len()`.
    fn value(&self, pos: usize) -> Option<W>;

    /// The weight of the row at `pos`, or `None` if absent.
    ///
    /// `pos` is in `0..len()`.
    fn weight(&self, pos: usize) -> Option<W>;
}
