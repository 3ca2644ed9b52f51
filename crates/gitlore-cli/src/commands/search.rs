use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use gitlore_core::{LoreConfig, RepoSource};
use gitlore_query::SearchEngine;

use crate::output::format::format_hits;
use crate::output::OutputFormat;

#[derive(Args)]
pub struct SearchArgs {
    /// Search query (searches commit message, author name and author email)
    pub query: String,

    /// Index directory (default: gitlore.indexPath, then <git-dir>/gitlore-index)
    #[arg(long, env = "GITLORE_INDEX")]
    pub index: Option<PathBuf>,

    /// Drop hits scoring below this (default: gitlore.minScore)
    #[arg(long)]
    pub min_score: Option<f32>,

    /// Maximum number of results to print
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,
}

pub fn run(args: &SearchArgs, format: OutputFormat) -> Result<()> {
    let source = RepoSource::discover(Path::new(".")).ok();
    let config = match &source {
        Some(source) => LoreConfig::load(&source.repo().config()?)?,
        None => LoreConfig::load_default()?,
    };

    let engine = match (args.index.as_ref().or(config.index_path.as_ref()), &source) {
        (Some(path), _) => SearchEngine::new(path),
        (None, Some(source)) => SearchEngine::for_repo(source.repo()),
        (None, None) => {
            anyhow::bail!("No index given: pass --index or run inside an indexed repository")
        }
    };

    let min_score = args.min_score.unwrap_or(config.min_score);
    tracing::debug!(
        "Searching {} (min score {min_score})",
        engine.index_path().display()
    );
    let mut hits = engine
        .search(&args.query, min_score)
        .context("Search failed")?;

    if hits.is_empty() {
        eprintln!("No results found for: {}", args.query);
        return Ok(());
    }

    let total = hits.len();
    if let Some(limit) = args.limit {
        hits.truncate(limit);
    }
    if matches!(format, OutputFormat::Text) {
        eprintln!("Found {total} result(s) for: {}\n", args.query);
    }
    print!("{}", format_hits(&hits, format));

    Ok(())
}
