pub mod index;
pub mod search;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Index the commit history of a repository
    Index(index::IndexArgs),
    /// Search indexed commits by message and author
    Search(search::SearchArgs),
}
