//! repo-prompt binary entry point

use anyhow::Result;

fn main() -> Result<()> {
    repo_prompt::cli::run()
}
