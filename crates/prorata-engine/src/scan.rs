//! Group scanning: materialize one group's rows and total its weights.

use prorata_core::{RowSource, SplitError, SplitWidth};

/// One group's rows after the scan pass.
///
/// A row is `Some((value, weight))` when both inputs were present, `None`
/// when either was absent. Position is the index into `rows`.
#[derive(Debug)]
pub(crate) struct ScannedGroup<W> {
    pub rows: Vec<Option<(W, W)>>,
    /// Sum of the weights of all non-null rows. Never zero.
    pub total_weight: W,
}

/// Read every row of the current group and accumulate the weight total.
///
/// The weight of a row is only fetched when its value is present, so the
/// source sees at most one read per (row, column) cell. Null rows do not
/// contribute to the total.
pub(crate) fn scan_group<W, S>(source: &S) -> Result<ScannedGroup<W>, SplitError>
where
    W: SplitWidth,
    S: RowSource<W>,
{
    let n = source.len();
    let mut rows = Vec::with_capacity(n);
    let mut total = W::ZERO;

    for pos in 0..n {
        let cell = match source.value(pos) {
            None => None,
            Some(value) => match source.weight(pos) {
                None => None,
                Some(weight) => {
                    total = total
                        .checked_add(weight)
                        .ok_or(SplitError::WeightSumOverflow { bits: W::BITS })?;
                    Some((value, weight))
                }
            },
        };
        rows.push(cell);
    }

    // Fires for empty groups, all-null groups, and weights that cancel
    // exactly. Negative weights are permitted up to this constraint.
    if total == W::ZERO {
        return Err(SplitError::ZeroWeightSum);
    }

    Ok(ScannedGroup {
        rows,
        total_weight: total,
    })
}
