//! Prorata: exact integer apportionment for grouped data streams.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the prorata sub-crates. For most users, adding `prorata` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use prorata::prelude::*;
//!
//! // A group of three rows splitting the value 100 by equal weights.
//! struct Rows;
//! impl RowSource<i32> for Rows {
//!     fn len(&self) -> usize { 3 }
//!     fn value(&self, _pos: usize) -> Option<i32> { Some(100) }
//!     fn weight(&self, _pos: usize) -> Option<i32> { Some(1) }
//! }
//!
//! let split = split_i32(&Rows).unwrap();
//! let shares: Vec<_> = split.shares().flatten().collect();
//! // 100 does not divide by 3; one row absorbs the rounding unit and
//! // the shares sum back to the exact original value.
//! assert_eq!(shares.iter().sum::<i32>(), 100);
//! assert_eq!(shares, vec![34, 33, 33]);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `prorata-core` | Width abstraction, errors, `RowSource`, `GroupId` |
//! | [`engine`] | `prorata-engine` | `GroupSplit`, `SplitCache`, entry points |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types: width abstraction, errors, identifiers, and the
/// [`RowSource`](prorata_core::RowSource) trait.
pub mod types {
    pub use prorata_core::{DivPair, GroupId, RowSource, SplitError, SplitWidth};
}

/// The apportionment engine: per-group computation and caching.
pub mod engine {
    pub use prorata_engine::{split_i32, split_i64, GroupSplit, SplitCache};
}

/// The types most callers need, importable in one line.
pub mod prelude {
    pub use prorata_core::{GroupId, RowSource, SplitError};
    pub use prorata_engine::{split_i32, split_i64, GroupSplit, SplitCache};
}

pub use prorata_core::{GroupId, RowSource, SplitError, SplitWidth};
pub use prorata_engine::{split_i32, split_i64, GroupSplit, SplitCache};
