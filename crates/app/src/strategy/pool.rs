//! Candidate pool — the shrinking working set of one assembly run.
//!
//! Mutual exclusion between rules rests entirely on pool shrinkage: each
//! rule only ever sees the residue left by the rules before it, so no
//! entity can be claimed twice.

use homeboard_domain::filter::EntityFilter;
use homeboard_domain::id::EntityId;
use homeboard_domain::snapshot::Snapshot;

/// `pool - claimed`, preserving `pool` order.
///
/// An empty `claimed` list returns `pool` unchanged; this runs once per
/// rule, so the identity case must not copy.
#[must_use]
pub fn difference(pool: Vec<EntityId>, claimed: &[EntityId]) -> Vec<EntityId> {
    if claimed.is_empty() {
        return pool;
    }
    pool.into_iter().filter(|id| !claimed.contains(id)).collect()
}

/// Working set of entity identifiers not yet claimed by any rule.
///
/// Created fresh per assembly run, consumed rule by rule, discarded with
/// the run. Never shared.
#[derive(Debug)]
pub struct CandidatePool {
    ids: Vec<EntityId>,
}

impl CandidatePool {
    /// Start a run over the given admitted identifiers.
    #[must_use]
    pub fn new(ids: Vec<EntityId>) -> Self {
        Self { ids }
    }

    /// Whether any identifier is still unclaimed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Claim every pooled entity matching `filter`, in pool order.
    ///
    /// Claimed identifiers leave the pool; later rules never see them.
    pub fn take_matching(&mut self, snapshot: &Snapshot, filter: &EntityFilter) -> Vec<EntityId> {
        let claimed: Vec<EntityId> = self
            .ids
            .iter()
            .filter(|id| snapshot.entity(id).is_some_and(|entity| filter.matches(entity)))
            .cloned()
            .collect();
        self.ids = difference(std::mem::take(&mut self.ids), &claimed);
        claimed
    }

    /// End the run and drain the residue for the catch-all.
    #[must_use]
    pub fn into_remaining(self) -> Vec<EntityId> {
        self.ids
    }
}
