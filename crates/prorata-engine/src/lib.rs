//! Exact proportional apportionment of grouped integer streams.
//!
//! Given one group of rows, each carrying a numerator `value` and an
//! integer `weight`, the engine computes every row's integer share of
//! `value * weight / total_weight` such that the shares conserve the
//! group's exact weighted sum: no rounding drift accumulates, ever.
//!
//! The pipeline runs in three passes over a materialized group:
//!
//! 1. **Scan**: read every row through
//!    [`RowSource`](prorata_core::RowSource), marking rows with an absent
//!    value or weight as null and accumulating the overflow-checked
//!    weight total.
//! 2. **Allocate**: exact double-width multiply-divide per non-null row,
//!    remainder canonicalized into `[0, total)`, leftover remainder mass
//!    folded into a whole-unit excess count.
//! 3. **Rank**: hand one bonus unit to each of the `excess` rows with
//!    the smallest remainders (ascending order, ties broken by original
//!    position), restoring exact conservation.
//!
//! [`GroupSplit::compute`] composes the passes; [`split_i32`] and
//! [`split_i64`] are the width-named entry points. [`SplitCache`]
//! memoizes one result per [`GroupId`](prorata_core::GroupId) so a group
//! is computed once no matter how many of its rows are looked up.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod allocate;
mod rank;
mod scan;

pub mod cache;
pub mod split;

pub use cache::SplitCache;
pub use split::{split_i32, split_i64, GroupSplit};
