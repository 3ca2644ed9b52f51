pub mod repo;

pub use repo::RepoSource;
