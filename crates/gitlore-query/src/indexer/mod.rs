pub mod walk;

use std::path::Path;

use git2::{BranchType, Repository};

use gitlore_core::{BranchFilter, WalkMode};

use crate::error::QueryError;
use crate::index::{CommitIndexWriter, WriteBatch};

pub use walk::{walk_from, VisitSet, WalkStats};

/// Parameters for one indexing run.
#[derive(Debug, Clone, Default)]
pub struct IndexOptions {
    /// Prepended to every commit id to form the record key, so several
    /// repositories can share one index.
    pub id_prefix: String,
    pub branches: BranchFilter,
    pub walk: WalkMode,
}

/// Summary of an indexing run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexReport {
    /// Branches that matched the filter.
    pub branches: usize,
    /// Distinct commits visited.
    pub visited: usize,
    /// Records written to the index.
    pub indexed: usize,
    /// Commits visited but not indexed.
    pub skipped: usize,
}

/// Index every commit reachable from the selected branches of `repo` into
/// the index at `index_path`.
///
/// All records are written in one batch once the walk has finished, so a
/// failure to enumerate branches or resolve a commit leaves the index as it
/// was.
pub fn index_repository(
    repo: &Repository,
    index_path: &Path,
    opts: &IndexOptions,
) -> Result<IndexReport, QueryError> {
    let mut writer = CommitIndexWriter::open(index_path)?;
    let mut visited = VisitSet::default();
    let mut batch = WriteBatch::new();
    let mut report = IndexReport::default();

    for entry in repo.branches(None)? {
        let (branch, kind) = entry?;
        let name = String::from_utf8_lossy(branch.name_bytes()?).into_owned();
        if !opts.branches.matches(&name) {
            continue;
        }
        report.branches += 1;

        let tip = match opts.walk {
            WalkMode::BranchTips => branch.get().peel_to_commit()?.id(),
            WalkMode::Head => repo.head()?.peel_to_commit()?.id(),
        };

        let stats = walk_from(repo, tip, &opts.id_prefix, &mut visited, &mut batch)?;
        tracing::debug!(
            "Branch {name} ({}) from {tip}: {} new commit(s)",
            branch_kind(kind),
            stats.visited
        );
        report.visited += stats.visited;
        report.skipped += stats.skipped;
    }

    report.indexed = writer.submit(batch)?;

    tracing::info!(
        "Indexed {} commit(s) from {} branch(es) into {}",
        report.indexed,
        report.branches,
        index_path.display()
    );
    if report.skipped > 0 {
        tracing::warn!("Skipped {} commit(s) that could not be mapped", report.skipped);
    }
    Ok(report)
}

fn branch_kind(kind: BranchType) -> &'static str {
    match kind {
        BranchType::Local => "local",
        BranchType::Remote => "remote",
    }
}
