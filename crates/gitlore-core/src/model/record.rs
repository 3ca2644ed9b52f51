use chrono::{DateTime, Utc};
use git2::Commit;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

const NANOS_PER_SEC: i64 = 1_000_000_000;

/// Build the index key for a commit. Pure in `(id_prefix, commit_id)`, so
/// re-indexing a commit under the same prefix replaces its record.
pub fn composite_id(id_prefix: &str, commit_id: &str) -> String {
    format!("{id_prefix}-{commit_id}")
}

/// One commit as stored in, and returned from, the search index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRecord {
    /// `<id-prefix>-<commit-id>`; the index primary key.
    pub key: String,
    pub id: String,
    pub message: String,
    pub author_name: String,
    pub author_email: String,
    /// Author time in nanoseconds since the Unix epoch.
    pub time: i64,
}

impl CommitRecord {
    /// Map a git commit to a record keyed under `id_prefix`.
    ///
    /// Fails when the message or author identity is not valid UTF-8.
    pub fn from_commit(id_prefix: &str, commit: &Commit<'_>) -> Result<Self, CoreError> {
        let id = commit.id().to_string();
        let non_utf8 = |field| CoreError::NonUtf8 {
            commit: id.clone(),
            field,
        };

        let message = commit.message().ok_or_else(|| non_utf8("message"))?.to_string();
        let author = commit.author();
        let author_name = author.name().ok_or_else(|| non_utf8("author name"))?.to_string();
        let author_email = author
            .email()
            .ok_or_else(|| non_utf8("author email"))?
            .to_string();
        let time = author.when().seconds().saturating_mul(NANOS_PER_SEC);

        Ok(Self {
            key: composite_id(id_prefix, &id),
            id,
            message,
            author_name,
            author_email,
            time,
        })
    }

    /// Author time as a UTC timestamp.
    pub fn authored_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_nanos(self.time)
    }

    /// First line of the commit message.
    pub fn subject(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }
}
