use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Commit {commit} has a non UTF-8 {field}")]
    NonUtf8 { commit: String, field: &'static str },

    #[error("Config error: {0}")]
    Config(String),
}
