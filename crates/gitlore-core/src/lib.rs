pub mod config;
pub mod error;
pub mod model;
pub mod source;

pub use config::LoreConfig;
pub use error::CoreError;
pub use model::{composite_id, BranchFilter, CommitRecord, WalkMode};
pub use source::RepoSource;
