//! Proportional allocation: exact per-row division and excess folding.

use prorata_core::{DivPair, SplitWidth};

use crate::scan::ScannedGroup;

/// One group's rows after the allocation pass.
pub(crate) struct AllocatedGroup<W> {
    /// Quotient/remainder per row, `None` for null rows. Remainders are
    /// canonical: within `[0, total_weight)` for a positive total.
    pub shares: Vec<Option<DivPair<W>>>,
    /// Aggregate leftover remainder mass. `quot` counts whole units of
    /// `total_weight` to redistribute; `rem` folds to zero.
    pub excess: DivPair<W>,
}

/// Divide every non-null row's `value * weight` by the group total.
///
/// Truncating division is canonicalized to floor division so each
/// remainder is non-negative, then the remainders are folded into the
/// running excess pair. The fold uses two's-complement wraparound on the
/// intermediate sum: when the add wraps the native width or reaches the
/// total, one whole unit moves into `excess.quot` and the total is
/// subtracted back out, so the intermediate never drifts.
pub(crate) fn allocate<W: SplitWidth>(scanned: &ScannedGroup<W>) -> AllocatedGroup<W> {
    let total = scanned.total_weight;
    let mut excess = DivPair {
        quot: W::ZERO,
        rem: W::ZERO,
    };

    let shares = scanned
        .rows
        .iter()
        .map(|row| {
            row.map(|(value, weight)| {
                let mut pair = value.muldiv(weight, total);
                if pair.rem < W::ZERO {
                    pair.rem = pair.rem.wrapping_add(total);
                    pair.quot = pair.quot.wrapping_sub(W::ONE);
                }
                let (sum, wrapped) = excess.rem.overflowing_add(pair.rem);
                if wrapped || sum >= total {
                    excess.rem = sum.wrapping_sub(total);
                    excess.quot = excess.quot.wrapping_add(W::ONE);
                } else {
                    excess.rem = sum;
                }
                pair
            })
        })
        .collect();

    // The remainder mass of a group is an exact multiple of the total
    // whenever the group's weighted sum is (e.g. the same value on every
    // row). A nonzero residue here is an implementation bug or a misuse,
    // not a data error.
    debug_assert_eq!(
        excess.rem,
        W::ZERO,
        "excess remainder must fold to zero, got {:?}",
        excess.rem
    );

    AllocatedGroup { shares, excess }
}
