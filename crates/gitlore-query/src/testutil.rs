use std::cell::Cell;

use git2::{Oid, Repository, Signature, Time};
use tempfile::TempDir;

use gitlore_core::{composite_id, CommitRecord};

pub fn record(prefix: &str, id: &str, message: &str) -> CommitRecord {
    CommitRecord {
        key: composite_id(prefix, id),
        id: id.to_string(),
        message: message.to_string(),
        author_name: "Tester".to_string(),
        author_email: "tester@example.com".to_string(),
        time: 1_700_000_000_000_000_000,
    }
}

/// A scratch repository whose commits all get distinct author times.
pub struct TestRepo {
    pub repo: Repository,
    pub dir: TempDir,
    clock: Cell<i64>,
}

impl TestRepo {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let repo = Repository::init(dir.path()).unwrap();
        Self {
            repo,
            dir,
            clock: Cell::new(1_700_000_000),
        }
    }

    pub fn commit(&self, message: &str, parents: &[Oid]) -> Oid {
        let secs = self.clock.get();
        self.clock.set(secs + 60);
        let sig = Signature::new("Tester", "tester@example.com", &Time::new(secs, 0)).unwrap();
        let tree_id = self.repo.treebuilder(None).unwrap().write().unwrap();
        let tree = self.repo.find_tree(tree_id).unwrap();
        let parents: Vec<_> = parents
            .iter()
            .map(|oid| self.repo.find_commit(*oid).unwrap())
            .collect();
        let parent_refs: Vec<_> = parents.iter().collect();
        self.repo
            .commit(None, &sig, &sig, message, &tree, &parent_refs)
            .unwrap()
    }

    /// Create or move a local branch.
    pub fn branch(&self, name: &str, target: Oid) {
        let commit = self.repo.find_commit(target).unwrap();
        self.repo.branch(name, &commit, true).unwrap();
    }

    pub fn checkout(&self, branch: &str) {
        self.repo.set_head(&format!("refs/heads/{branch}")).unwrap();
    }
}
