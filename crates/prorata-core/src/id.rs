//! Strongly-typed group identifier.

use std::fmt;

/// Identifies one group (a maximal run of rows sharing a partition key)
/// within the caller's stream.
///
/// The engine never derives group boundaries itself; the host assigns an
/// ID to each group and uses it to key cached results. IDs only need to
/// be unique among groups whose results are alive at the same time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupId(pub u64);

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for GroupId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
