use std::path::Path;

use assert_cmd::Command;
use git2::{Oid, Repository, Signature, Time};
use predicates::prelude::*;
use tempfile::TempDir;

fn commit(repo: &Repository, message: &str, secs: i64, parents: &[Oid]) -> Oid {
    let sig = Signature::new("Alice", "alice@example.com", &Time::new(secs, 0)).unwrap();
    let tree_id = repo.treebuilder(None).unwrap().write().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();
    let parents: Vec<_> = parents.iter().map(|p| repo.find_commit(*p).unwrap()).collect();
    let parent_refs: Vec<_> = parents.iter().collect();
    repo.commit(None, &sig, &sig, message, &tree, &parent_refs)
        .unwrap()
}

fn sample_repo(path: &Path) -> Oid {
    let repo = Repository::init(path).unwrap();
    let a = commit(&repo, "Initial import", 1_700_000_000, &[]);
    let b = commit(&repo, "Teach the lexer about heredocs", 1_700_000_060, &[a]);
    let c = commit(&repo, "Release 1.0", 1_700_000_120, &[b]);
    repo.branch("main", &repo.find_commit(c).unwrap(), true)
        .unwrap();
    repo.set_head("refs/heads/main").unwrap();
    b
}

fn gitlore() -> Command {
    let mut cmd = Command::cargo_bin("gitlore").unwrap();
    cmd.env_remove("GITLORE_INDEX");
    cmd
}

#[test]
fn test_index_then_search() {
    let repo_dir = TempDir::new().unwrap();
    let index_dir = TempDir::new().unwrap();
    let heredoc = sample_repo(repo_dir.path());

    gitlore()
        .arg("index")
        .arg(repo_dir.path())
        .arg("--index")
        .arg(index_dir.path())
        .args(["--prefix", "demo"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Indexed 3 commit(s)"));

    gitlore()
        .args(["--format", "json", "search", "heredocs", "--index"])
        .arg(index_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("\"key\": \"demo-{heredoc}\"")));
}

#[test]
fn test_default_index_lives_in_git_dir() {
    let repo_dir = TempDir::new().unwrap();
    sample_repo(repo_dir.path());

    gitlore()
        .current_dir(repo_dir.path())
        .arg("index")
        .assert()
        .success();
    assert!(repo_dir.path().join(".git/gitlore-index/meta.json").exists());

    gitlore()
        .current_dir(repo_dir.path())
        .args(["search", "lexer"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Teach the lexer about heredocs"));
}

#[test]
fn test_search_reports_no_results() {
    let index_dir = TempDir::new().unwrap();

    gitlore()
        .args(["search", "nothing", "--index"])
        .arg(index_dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("No results found for: nothing"));
}

#[test]
fn test_bad_query_fails() {
    let index_dir = TempDir::new().unwrap();

    gitlore()
        .args(["search", "nosuchfield:x", "--index"])
        .arg(index_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Search failed"));
}

#[test]
fn test_url_requires_index_before_cloning() {
    let missing = TempDir::new().unwrap();
    let url = missing.path().join("no-such-repo");

    gitlore()
        .args(["index", "--url", url.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--index (or gitlore.indexPath) is required"))
        .stderr(predicate::str::contains("Failed to clone").not());
}

#[test]
fn test_verbose_index_logs_resolution() {
    let repo_dir = TempDir::new().unwrap();
    let index_dir = TempDir::new().unwrap();
    sample_repo(repo_dir.path());

    gitlore()
        .arg("-vv")
        .arg("index")
        .arg(repo_dir.path())
        .arg("--index")
        .arg(index_dir.path())
        .args(["--prefix", "demo"])
        .assert()
        .success()
        .stderr(predicate::str::contains("prefix 'demo', walk BranchTips"));
}
