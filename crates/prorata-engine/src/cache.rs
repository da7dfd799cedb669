//! Group-keyed memoization of finished apportionments.

use indexmap::IndexMap;
use prorata_core::{GroupId, RowSource, SplitError, SplitWidth};

use crate::split::GroupSplit;

/// Memoizes one [`GroupSplit`] per [`GroupId`].
///
/// The first [`resolve`](SplitCache::resolve) for any position of a group
/// runs the full computation; every later lookup for that group is served
/// from the cached result without touching the row source again. A failed
/// computation caches nothing, so the whole group either succeeds once or
/// fails on every attempt.
///
/// Entries live until [`release`](SplitCache::release); the host calls it
/// when a group's processing window ends. Entries are independent — there
/// is no cross-group state.
#[derive(Debug)]
pub struct SplitCache<W> {
    groups: IndexMap<GroupId, GroupSplit<W>>,
}

impl<W> Default for SplitCache<W> {
    fn default() -> Self {
        Self {
            groups: IndexMap::new(),
        }
    }
}

impl<W: SplitWidth> SplitCache<W> {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self {
            groups: IndexMap::new(),
        }
    }

    /// The share of the row at `pos` within `group`, computing the
    /// group's apportionment on first access.
    ///
    /// `Ok(None)` marks a null row (absent output); errors are fatal to
    /// the whole group and nothing is cached for it.
    pub fn resolve<S: RowSource<W>>(
        &mut self,
        group: GroupId,
        source: &S,
        pos: usize,
    ) -> Result<Option<W>, SplitError> {
        if !self.groups.contains_key(&group) {
            let split = GroupSplit::compute(source)?;
            self.groups.insert(group, split);
        }
        Ok(self.groups[&group].share(pos))
    }

    /// The cached result for `group`, if it has been computed.
    pub fn get(&self, group: GroupId) -> Option<&GroupSplit<W>> {
        self.groups.get(&group)
    }

    /// Drop the cached result for `group`. Returns whether an entry
    /// existed.
    pub fn release(&mut self, group: GroupId) -> bool {
        self.groups.shift_remove(&group).is_some()
    }

    /// Number of groups currently cached.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether no group is currently cached.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
