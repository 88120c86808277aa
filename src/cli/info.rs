//! Info command implementation

use anyhow::{Context, Result};
use clap::Args;
use serde_json::json;
use std::path::PathBuf;

use crate::config::{load_config, Strategy};
use crate::fetch::get_repository_files;
use crate::utils::{count_tokens, HeuristicEstimator};

#[derive(Args)]
pub struct InfoArgs {
    /// Repository URL (e.g. https://github.com/owner/name)
    #[arg(value_name = "URL")]
    pub url: String,

    /// Ingestion strategy: 'api' or 'clone' (overrides config)
    #[arg(long, value_name = "STRATEGY")]
    pub strategy: Option<Strategy>,

    /// Emit machine-readable JSON instead of a table
    #[arg(long)]
    pub json: bool,

    /// Path to config file (repo-prompt.toml or .repo-prompt.yml)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

pub fn run(args: InfoArgs) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed resolving working directory")?;
    let mut config = load_config(&cwd, args.config.as_deref())?;
    if let Some(strategy) = args.strategy {
        config.strategy = strategy;
    }

    let files = get_repository_files(&args.url, &config)?;
    let estimator = HeuristicEstimator;

    if args.json {
        let entries: Vec<_> = files
            .iter()
            .map(|f| {
                json!({
                    "path": f.path,
                    "size_bytes": f.size_bytes,
                    "content_hash": f.content_hash,
                    "tokens": count_tokens(&estimator, &f.content),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&json!({ "files": entries }))?);
        return Ok(());
    }

    let mut total_bytes = 0u64;
    let mut total_tokens = 0usize;
    for f in &files {
        let tokens = count_tokens(&estimator, &f.content);
        total_bytes += f.size_bytes;
        total_tokens += tokens;
        println!("{:>10}  {:>8}  {}", f.size_bytes, tokens, f.path);
    }
    println!();
    println!("{} files, {} bytes, ~{} tokens", files.len(), total_bytes, total_tokens);

    Ok(())
}
