pub mod error;
pub mod index;
pub mod indexer;
pub mod search;

#[cfg(test)]
pub(crate) mod testutil;

pub use error::{DecodeError, QueryError};
pub use index::{CommitIndexWriter, CommitSearcher, SearchHit, WriteBatch, PAGE_SIZE};
pub use indexer::{index_repository, IndexOptions, IndexReport};
pub use search::{search, SearchEngine};
