//! Remainder ranking: distribute whole excess units as bonus quotients.

use prorata_core::{DivPair, SplitWidth};
use smallvec::SmallVec;

/// Add one bonus unit to each of the `excess_units` non-null rows with
/// the smallest canonical remainders.
///
/// Ordering is ascending remainder, ties broken by original position
/// (ascending), which makes the outcome reproducible across platforms.
/// The rows themselves never move: the sort runs over an index scratch,
/// so `shares` stays in original position order throughout.
///
/// Note the direction: bonus units go to the *smallest* remainders. This
/// is the reference behavior of the engine, deliberately the opposite of
/// the conventional largest-remainder apportionment method. Conservation
/// holds either way; which rows round up differs.
///
/// A negative `excess_units` (only reachable with a negative total
/// weight) distributes nothing.
pub(crate) fn distribute_excess<W: SplitWidth>(
    shares: &mut [Option<DivPair<W>>],
    excess_units: W,
) {
    let bonus = excess_units.clamp_to_index();
    if bonus == 0 {
        return;
    }

    let mut order: SmallVec<[(W, usize); 16]> = shares
        .iter()
        .enumerate()
        .filter_map(|(pos, share)| share.as_ref().map(|pair| (pair.rem, pos)))
        .collect();
    // Keys are unique (position component), so unstable sort is
    // deterministic here.
    order.sort_unstable();

    for &(_, pos) in order.iter().take(bonus) {
        if let Some(pair) = &mut shares[pos] {
            pair.quot = pair.quot.wrapping_add(W::ONE);
        }
    }
}
