//! The composed per-group computation and its width-named entry points.

use prorata_core::{DivPair, RowSource, SplitError, SplitWidth};

use crate::allocate::{allocate, AllocatedGroup};
use crate::rank::distribute_excess;
use crate::scan::scan_group;

/// One group's finished apportionment, ordered by row position.
///
/// Computed once by [`GroupSplit::compute`] and immutable thereafter, so
/// any number of [`share`](GroupSplit::share) lookups can follow without
/// recomputation or synchronization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupSplit<W> {
    shares: Vec<Option<DivPair<W>>>,
    total_weight: W,
}

impl<W: SplitWidth> GroupSplit<W> {
    /// Run the full scan → allocate → rank pipeline on one group.
    ///
    /// Fails atomically: on [`SplitError::ZeroWeightSum`] or
    /// [`SplitError::WeightSumOverflow`] no share exists for any row of
    /// the group.
    pub fn compute<S: RowSource<W>>(source: &S) -> Result<Self, SplitError> {
        let scanned = scan_group(source)?;
        let AllocatedGroup { mut shares, excess } = allocate(&scanned);
        distribute_excess(&mut shares, excess.quot);
        Ok(Self {
            shares,
            total_weight: scanned.total_weight,
        })
    }

    /// The integer share of the row at `pos`.
    ///
    /// `None` for null rows (absent value or weight) and for positions
    /// outside the group.
    pub fn share(&self, pos: usize) -> Option<W> {
        self.shares.get(pos).and_then(|s| s.map(|pair| pair.quot))
    }

    /// All shares in position order; `None` entries are null rows.
    pub fn shares(&self) -> impl Iterator<Item = Option<W>> + '_ {
        self.shares.iter().map(|s| s.map(|pair| pair.quot))
    }

    /// Sum of the weights of the group's non-null rows. Never zero.
    pub fn total_weight(&self) -> W {
        self.total_weight
    }

    /// Number of rows in the group, null rows included.
    pub fn len(&self) -> usize {
        self.shares.len()
    }

    /// Whether the group has no rows.
    ///
    /// Always false in practice: an empty group fails with
    /// [`SplitError::ZeroWeightSum`] before a `GroupSplit` exists.
    pub fn is_empty(&self) -> bool {
        self.shares.is_empty()
    }
}

/// Apportion one group of 32-bit rows.
///
/// Entry point for hosts dispatching on declared argument width; the
/// 64-bit twin is [`split_i64`].
pub fn split_i32<S: RowSource<i32>>(source: &S) -> Result<GroupSplit<i32>, SplitError> {
    GroupSplit::compute(source)
}

/// Apportion one group of 64-bit rows.
///
/// Entry point for hosts dispatching on declared argument width; the
/// 32-bit twin is [`split_i32`].
pub fn split_i64<S: RowSource<i64>>(source: &S) -> Result<GroupSplit<i64>, SplitError> {
    GroupSplit::compute(source)
}
