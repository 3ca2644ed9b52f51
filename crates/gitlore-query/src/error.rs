use gitlore_core::CoreError;

#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("Index error: {0}")]
    Index(String),

    #[error("Search error: {0}")]
    Search(String),

    #[error("Core error: {0}")]
    Core(#[from] CoreError),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed record: {0}")]
    Decode(#[from] DecodeError),
}

impl From<tantivy::TantivyError> for QueryError {
    fn from(e: tantivy::TantivyError) -> Self {
        QueryError::Index(e.to_string())
    }
}

/// A stored document that does not hold a complete commit record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("missing field '{0}'")]
    MissingField(&'static str),

    #[error("field '{field}' is not {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },
}
