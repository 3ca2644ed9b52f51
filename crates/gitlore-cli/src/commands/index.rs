use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use gitlore_core::{BranchFilter, LoreConfig, RepoSource, WalkMode};
use gitlore_query::{IndexOptions, SearchEngine};

use crate::output::OutputFormat;

#[derive(Args)]
pub struct IndexArgs {
    /// Repository to index (defaults to the current directory)
    #[arg(conflicts_with = "url")]
    pub path: Option<PathBuf>,

    /// Clone this URL into a temporary directory and index it
    #[arg(long)]
    pub url: Option<String>,

    /// Index directory (default: gitlore.indexPath, then <git-dir>/gitlore-index)
    #[arg(long, env = "GITLORE_INDEX")]
    pub index: Option<PathBuf>,

    /// Prefix for record keys (default: gitlore.idPrefix)
    #[arg(long)]
    pub prefix: Option<String>,

    /// Branch to index; repeat for several (default: all branches)
    #[arg(short, long = "branch")]
    pub branches: Vec<String>,

    /// Walk HEAD once per matching branch instead of each branch's own tip
    #[arg(long)]
    pub head: bool,
}

pub fn run(args: &IndexArgs, format: OutputFormat) -> Result<()> {
    let needs_index = args.url.is_some() && args.index.is_none();
    if needs_index && LoreConfig::load_default()?.index_path.is_none() {
        anyhow::bail!("--index (or gitlore.indexPath) is required when indexing a --url");
    }

    let source = match &args.url {
        Some(url) => {
            RepoSource::clone_remote(url).with_context(|| format!("Failed to clone {url}"))?
        }
        None => {
            let path = args.path.as_deref().unwrap_or(Path::new("."));
            RepoSource::discover(path).context("Not inside a Git repository")?
        }
    };
    let config = LoreConfig::load(&source.repo().config()?)?;

    let engine = match args.index.as_ref().or(config.index_path.as_ref()) {
        Some(path) => SearchEngine::new(path),
        None if source.is_clone() => {
            anyhow::bail!("--index (or gitlore.indexPath) is required when indexing a --url")
        }
        None => SearchEngine::for_repo(source.repo()),
    };

    let opts = IndexOptions {
        id_prefix: args.prefix.clone().unwrap_or_else(|| config.id_prefix.clone()),
        branches: if args.branches.is_empty() {
            config.branch_filter()
        } else {
            BranchFilter::from_names(args.branches.iter().cloned())
        },
        walk: if args.head { WalkMode::Head } else { config.walk },
    };

    tracing::debug!(
        "Indexing {} into {} (prefix '{}', walk {:?})",
        source.git_dir().display(),
        engine.index_path().display(),
        opts.id_prefix,
        opts.walk
    );

    let report = engine
        .index(source.repo(), &opts)
        .context("Failed to index repository")?;

    match format {
        OutputFormat::Json => {
            let value = serde_json::json!({
                "index": engine.index_path(),
                "branches": report.branches,
                "visited": report.visited,
                "indexed": report.indexed,
                "skipped": report.skipped,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Text => {
            eprintln!(
                "Indexed {} commit(s) from {} branch(es) into {}",
                report.indexed,
                report.branches,
                engine.index_path().display()
            );
            if report.skipped > 0 {
                eprintln!("Skipped {} commit(s) with unreadable metadata.", report.skipped);
            }
        }
    }

    Ok(())
}
