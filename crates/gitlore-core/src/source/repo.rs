use std::path::Path;

use git2::Repository;
use tempfile::TempDir;

use crate::error::CoreError;

/// A repository to index: either an existing local one, or a clone that
/// lives in a temporary directory for as long as this value does.
pub struct RepoSource {
    // Declared before `scratch` so the handle is closed before the
    // directory is removed.
    repo: Repository,
    scratch: Option<TempDir>,
}

impl RepoSource {
    /// Open the Git repository at the given path.
    pub fn open(path: &Path) -> Result<Self, CoreError> {
        let repo = Repository::open(path)?;
        Ok(Self {
            repo,
            scratch: None,
        })
    }

    /// Discover the Git repository containing `path`.
    pub fn discover(path: &Path) -> Result<Self, CoreError> {
        let repo = Repository::discover(path)?;
        Ok(Self {
            repo,
            scratch: None,
        })
    }

    /// Clone `url` into a fresh temporary directory.
    pub fn clone_remote(url: &str) -> Result<Self, CoreError> {
        let scratch = tempfile::Builder::new().prefix("gitlore").tempdir()?;
        tracing::info!("Cloning {url} into {}", scratch.path().display());
        let repo = Repository::clone(url, scratch.path())?;
        Ok(Self {
            repo,
            scratch: Some(scratch),
        })
    }

    /// Get the underlying git2::Repository reference.
    pub fn repo(&self) -> &Repository {
        &self.repo
    }

    /// The .git directory (or the repo dir for bare repos).
    pub fn git_dir(&self) -> &Path {
        self.repo.path()
    }

    /// Whether this repository is a temporary clone.
    pub fn is_clone(&self) -> bool {
        self.scratch.is_some()
    }
}
