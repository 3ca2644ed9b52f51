pub mod reader;
pub mod schema;
pub mod writer;

use std::path::Path;

use tantivy::Index;

pub use reader::{decode_record, CommitSearcher, SearchHit, PAGE_SIZE};
pub use schema::CommitSchema;
pub use writer::{CommitIndexWriter, WriteBatch};

use crate::error::QueryError;

/// Open the index at `path`, creating the directory and an empty index if
/// none exists yet.
pub(crate) fn open_or_create(path: &Path, schema: &CommitSchema) -> Result<Index, QueryError> {
    if path.join("meta.json").exists() {
        Ok(Index::open_in_dir(path)?)
    } else {
        std::fs::create_dir_all(path).map_err(QueryError::Io)?;
        tracing::debug!("Creating commit index at {}", path.display());
        Ok(Index::create_in_dir(path, schema.schema.clone())?)
    }
}
