use std::path::Path;

use tantivy::{doc, IndexWriter, Term};

use gitlore_core::CommitRecord;

use super::schema::CommitSchema;
use crate::error::QueryError;

/// Records collected during one indexing run, written by a single commit.
#[derive(Debug, Default)]
pub struct WriteBatch {
    records: Vec<CommitRecord>,
}

impl WriteBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: CommitRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[CommitRecord] {
        &self.records
    }
}

/// Writes commit records to the Tantivy index.
pub struct CommitIndexWriter {
    schema: CommitSchema,
    writer: IndexWriter,
}

impl CommitIndexWriter {
    /// Open or create an index at the given path.
    pub fn open(path: &Path) -> Result<Self, QueryError> {
        let schema = CommitSchema::new();
        let index = super::open_or_create(path, &schema)?;

        // 50MB heap for indexing
        let writer = index.writer(50_000_000)?;

        Ok(Self { schema, writer })
    }

    /// Upsert every record in the batch by key and commit once. Nothing is
    /// visible to readers unless the whole batch commits.
    pub fn submit(&mut self, batch: WriteBatch) -> Result<usize, QueryError> {
        let s = &self.schema;
        let count = batch.len();

        for record in batch.records {
            self.writer
                .delete_term(Term::from_field_text(s.key, &record.key));
            self.writer.add_document(doc!(
                s.key => record.key,
                s.id => record.id,
                s.message => record.message,
                s.author_name => record.author_name,
                s.author_email => record.author_email,
                s.time => record.time,
            ))?;
        }

        self.writer.commit()?;
        tracing::debug!("Committed batch of {count} commit record(s)");
        Ok(count)
    }
}
