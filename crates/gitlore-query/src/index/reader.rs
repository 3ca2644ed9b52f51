use std::path::Path;

use tantivy::collector::{Count, TopDocs};
use tantivy::query::{Query, QueryParser};
use tantivy::schema::{Field, Value};
use tantivy::{DocAddress, Index, IndexReader, ReloadPolicy, Score, Searcher, TantivyDocument};

use gitlore_core::CommitRecord;

use super::schema::CommitSchema;
use crate::error::{DecodeError, QueryError};

/// Number of hits requested from the index per round-trip.
pub const PAGE_SIZE: usize = 30;

/// A decoded record together with its relevance score.
#[derive(Debug, Clone)]
pub struct SearchHit {
    pub record: CommitRecord,
    pub score: f32,
}

/// Searches the commit index.
pub struct CommitSearcher {
    schema: CommitSchema,
    index: Index,
}

impl CommitSearcher {
    /// Open the index for reading. A missing index is created empty.
    pub fn open(path: &Path) -> Result<Self, QueryError> {
        let schema = CommitSchema::new();
        let index = super::open_or_create(path, &schema)?;
        Ok(Self { schema, index })
    }

    /// Return every hit for `query_str` scoring at least `min_score`, best
    /// first, fetching the index page by page.
    pub fn search_hits(
        &self,
        query_str: &str,
        min_score: f32,
    ) -> Result<Vec<SearchHit>, QueryError> {
        let searcher = self.searcher()?;

        let query_parser =
            QueryParser::for_index(&self.index, self.schema.default_search_fields());
        let query = query_parser
            .parse_query(query_str)
            .map_err(|e| QueryError::Search(e.to_string()))?;

        let (first, total) = fetch_page(&searcher, query.as_ref(), 0)?;
        let mut hits = Vec::with_capacity(total);
        self.collect_page(&searcher, first, min_score, &mut hits)?;

        // Pages are driven by the unfiltered total, all from one snapshot.
        let offsets = follow_up_offsets(total);
        let pages = 1 + offsets.len();
        for offset in offsets {
            let (docs, _) = fetch_page(&searcher, query.as_ref(), offset)?;
            self.collect_page(&searcher, docs, min_score, &mut hits)?;
        }

        tracing::debug!(
            "Query '{query_str}': {total} match(es), {} kept over {pages} page(s)",
            hits.len()
        );
        Ok(hits)
    }

    /// Number of live records in the index.
    pub fn num_records(&self) -> Result<u64, QueryError> {
        Ok(self.searcher()?.num_docs())
    }

    fn searcher(&self) -> Result<Searcher, QueryError> {
        let reader: IndexReader = self
            .index
            .reader_builder()
            .reload_policy(ReloadPolicy::OnCommitWithDelay)
            .try_into()?;
        Ok(reader.searcher())
    }

    fn collect_page(
        &self,
        searcher: &Searcher,
        docs: Vec<(Score, DocAddress)>,
        min_score: f32,
        hits: &mut Vec<SearchHit>,
    ) -> Result<(), QueryError> {
        for (score, doc_address) in docs {
            if score < min_score {
                continue;
            }
            let doc: TantivyDocument = searcher.doc(doc_address)?;
            match decode_record(&self.schema, &doc) {
                Ok(record) => hits.push(SearchHit { record, score }),
                Err(e) => tracing::warn!("Skipping malformed record at {doc_address:?}: {e}"),
            }
        }
        Ok(())
    }
}

/// Offsets of the pages requested after the first: one per `PAGE_SIZE`
/// slice of `total`, starting at `PAGE_SIZE`.
fn follow_up_offsets(total: usize) -> Vec<usize> {
    (1..=total.div_ceil(PAGE_SIZE))
        .map(|page| page * PAGE_SIZE)
        .collect()
}

fn fetch_page(
    searcher: &Searcher,
    query: &dyn Query,
    offset: usize,
) -> Result<(Vec<(Score, DocAddress)>, usize), QueryError> {
    let collector = (TopDocs::with_limit(PAGE_SIZE).and_offset(offset), Count);
    Ok(searcher.search(query, &collector)?)
}

/// Rebuild a commit record from a stored document.
pub fn decode_record(
    schema: &CommitSchema,
    doc: &TantivyDocument,
) -> Result<CommitRecord, DecodeError> {
    Ok(CommitRecord {
        key: text(doc, schema.key, "key")?,
        id: text(doc, schema.id, "id")?,
        message: text(doc, schema.message, "message")?,
        author_name: text(doc, schema.author_name, "author_name")?,
        author_email: text(doc, schema.author_email, "author_email")?,
        time: doc
            .get_first(schema.time)
            .ok_or(DecodeError::MissingField("time"))?
            .as_i64()
            .ok_or(DecodeError::WrongType {
                field: "time",
                expected: "an integer",
            })?,
    })
}

fn text(doc: &TantivyDocument, field: Field, name: &'static str) -> Result<String, DecodeError> {
    doc.get_first(field)
        .ok_or(DecodeError::MissingField(name))?
        .as_str()
        .map(str::to_string)
        .ok_or(DecodeError::WrongType {
            field: name,
            expected: "text",
        })
}
