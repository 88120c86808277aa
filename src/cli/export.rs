//! Export command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

use super::utils::parse_csv;
use crate::config::{load_config, Strategy};
use crate::fetch::get_repository_files;
use crate::render::{assemble, matched_selection_count, AssembleOptions};
use crate::utils::{count_tokens, HeuristicEstimator};

#[derive(Args)]
pub struct ExportArgs {
    /// Repository URL (e.g. https://github.com/owner/name)
    #[arg(value_name = "URL")]
    pub url: String,

    /// Paths to include, in order (comma-separated); default is every file
    #[arg(short = 's', long, value_name = "PATHS")]
    pub select: Option<String>,

    /// Prepend a [path:...] marker line to each file section
    #[arg(long)]
    pub include_path: bool,

    /// Collapse whitespace runs to single spaces
    #[arg(long)]
    pub minify: bool,

    /// Ingestion strategy: 'api' or 'clone' (overrides config)
    #[arg(long, value_name = "STRATEGY")]
    pub strategy: Option<Strategy>,

    /// Write the artifact to a file instead of stdout
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Path to config file (repo-prompt.toml or .repo-prompt.yml)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

pub fn run(args: ExportArgs) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed resolving working directory")?;
    let mut config = load_config(&cwd, args.config.as_deref())?;
    if let Some(strategy) = args.strategy {
        config.strategy = strategy;
    }

    let files = get_repository_files(&args.url, &config)?;
    tracing::info!(count = files.len(), "ingestion complete");

    // No explicit selection means everything, in ingestion order.
    let selection = parse_csv(&args.select)
        .unwrap_or_else(|| files.iter().map(|f| f.path.clone()).collect());

    let options = AssembleOptions { include_path: args.include_path, minify: args.minify };
    let artifact = assemble(&files, &selection, options);

    let tokens = count_tokens(&HeuristicEstimator, &artifact);
    let assembled = matched_selection_count(&files, &selection);
    eprintln!("{assembled} files selected, ~{tokens} tokens");

    match &args.output {
        Some(path) => {
            fs::write(path, &artifact)
                .with_context(|| format!("Failed writing artifact: {}", path.display()))?;
            eprintln!("Wrote {}", path.display());
        }
        None => println!("{artifact}"),
    }

    Ok(())
}
