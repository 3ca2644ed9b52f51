use std::collections::HashSet;

use git2::{Oid, Repository};

use gitlore_core::CommitRecord;

use crate::error::QueryError;
use crate::index::WriteBatch;

/// Commits already seen during one indexing run.
#[derive(Debug, Default)]
pub struct VisitSet {
    seen: HashSet<Oid>,
}

impl VisitSet {
    /// Mark `oid` visited. Returns false if it already was.
    pub fn insert(&mut self, oid: Oid) -> bool {
        self.seen.insert(oid)
    }

    pub fn contains(&self, oid: &Oid) -> bool {
        self.seen.contains(oid)
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

/// Outcome of walking from one start point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkStats {
    /// Commits newly visited by this walk.
    pub visited: usize,
    /// Visited commits whose record could not be built.
    pub skipped: usize,
}

/// Depth-first walk from `tip` through every parent, queueing one record per
/// commit not yet in `visited`. Parents are taken in parent-index order.
pub fn walk_from(
    repo: &Repository,
    tip: Oid,
    id_prefix: &str,
    visited: &mut VisitSet,
    batch: &mut WriteBatch,
) -> Result<WalkStats, QueryError> {
    let mut stats = WalkStats::default();
    let mut pending = vec![tip];

    while let Some(oid) = pending.pop() {
        if !visited.insert(oid) {
            continue;
        }
        stats.visited += 1;

        let commit = repo.find_commit(oid)?;
        match CommitRecord::from_commit(id_prefix, &commit) {
            Ok(record) => batch.push(record),
            Err(e) => {
                tracing::warn!("Skipping commit {oid}: {e}");
                stats.skipped += 1;
            }
        }

        // Reversed so parent 0 is popped first.
        let parents: Vec<Oid> = commit.parent_ids().collect();
        pending.extend(parents.into_iter().rev());

        if stats.visited % 1000 == 0 {
            tracing::debug!("Visited {} commits", stats.visited);
        }
    }

    Ok(stats)
}
