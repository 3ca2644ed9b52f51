use std::path::{Path, PathBuf};

use git2::Repository;

use gitlore_core::CommitRecord;

use crate::error::QueryError;
use crate::index::{CommitSearcher, SearchHit};
use crate::indexer::{index_repository, IndexOptions, IndexReport};

/// Directory name of the default index inside a repository's git dir.
pub const DEFAULT_INDEX_DIR: &str = "gitlore-index";

/// Return every record matching `query` with a score of at least
/// `min_score`, in relevance order.
pub fn search(
    index_path: &Path,
    query: &str,
    min_score: f32,
) -> Result<Vec<CommitRecord>, QueryError> {
    let searcher = CommitSearcher::open(index_path)?;
    let hits = searcher.search_hits(query, min_score)?;
    Ok(hits.into_iter().map(|hit| hit.record).collect())
}

/// Indexing and search against one index location.
pub struct SearchEngine {
    index_path: PathBuf,
}

impl SearchEngine {
    pub fn new(index_path: impl Into<PathBuf>) -> Self {
        Self {
            index_path: index_path.into(),
        }
    }

    /// Engine for a repository's own index, stored at `.git/gitlore-index/`.
    pub fn for_repo(repo: &Repository) -> Self {
        Self::new(repo.path().join(DEFAULT_INDEX_DIR))
    }

    /// Index the repository's history into this engine's index.
    pub fn index(
        &self,
        repo: &Repository,
        opts: &IndexOptions,
    ) -> Result<IndexReport, QueryError> {
        index_repository(repo, &self.index_path, opts)
    }

    /// Search commits, keeping scores.
    pub fn search(&self, query: &str, min_score: f32) -> Result<Vec<SearchHit>, QueryError> {
        CommitSearcher::open(&self.index_path)?.search_hits(query, min_score)
    }

    /// Return the index path.
    pub fn index_path(&self) -> &Path {
        &self.index_path
    }
}
