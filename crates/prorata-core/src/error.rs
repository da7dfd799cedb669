//! Error types for the prorata apportionment engine.
//!
//! Both variants are fatal to the whole group: no share is produced for
//! any of its rows. A row with an absent value or weight is not an error;
//! it simply resolves to an absent share (see the engine crate).

use std::error::Error;
use std::fmt;

/// Errors from computing one group's apportionment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SplitError {
    /// The sum of the group's weights overflowed the native integer width
    /// during accumulation.
    WeightSumOverflow {
        /// Native width in bits (32 or 64).
        bits: u32,
    },
    /// The group's weights sum to exactly zero, so no proportional share
    /// is defined. Fires even when individual weights are non-zero but
    /// cancel exactly.
    ZeroWeightSum,
}

impl fmt::Display for SplitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WeightSumOverflow { bits } => {
                write!(f, "sum of split weights overflowed the {bits}-bit integer width")
            }
            Self::ZeroWeightSum => {
                write!(f, "sum of split weights in group must not be zero")
            }
        }
    }
}

impl Error for SplitError {}
