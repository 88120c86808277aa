//! Deployment configuration
//!
//! Precedence: CLI flags > config file > defaults. Files are discovered in
//! the working directory (`repo-prompt.toml`, `.repo-prompt.yml`) or named
//! explicitly with `--config`.

pub mod loader;

pub use loader::load_config;

use crate::scan::eligibility::{default_ignored_extensions, DEFAULT_MAX_FILE_BYTES};
use crate::scan::EligibilityPolicy;
use serde::{Deserialize, Serialize};

/// Which ingestion strategy the deployment uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Remote-tree ingestion through the provider's REST API.
    Api,
    /// Shallow clone plus filesystem walk.
    Clone,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::Api => write!(f, "api"),
            Strategy::Clone => write!(f, "clone"),
        }
    }
}

impl std::str::FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "api" => Ok(Strategy::Api),
            "clone" => Ok(Strategy::Clone),
            other => Err(format!("unknown strategy '{other}' (expected 'api' or 'clone')")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    pub strategy: Strategy,
    pub max_file_bytes: u64,
    pub ignore_extensions: Vec<String>,
    pub http_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strategy: Strategy::Clone,
            max_file_bytes: DEFAULT_MAX_FILE_BYTES,
            ignore_extensions: default_ignored_extensions()
                .iter()
                .map(|s| s.to_string())
                .collect(),
            http_timeout_secs: 30,
        }
    }
}

impl Config {
    /// Build the eligibility policy both strategies consult.
    pub fn eligibility_policy(&self) -> EligibilityPolicy {
        EligibilityPolicy::new(self.ignore_extensions.iter().cloned(), self.max_file_bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_policy_defaults() {
        let config = Config::default();
        assert_eq!(config.max_file_bytes, 1_048_576);
        assert_eq!(config.strategy, Strategy::Clone);
        let policy = config.eligibility_policy();
        assert!(!policy.allows("x.png", 1));
        assert!(policy.allows("x.rs", 1));
    }

    #[test]
    fn strategy_parses_from_str() {
        assert_eq!("api".parse::<Strategy>().unwrap(), Strategy::Api);
        assert_eq!("CLONE".parse::<Strategy>().unwrap(), Strategy::Clone);
        assert!("ftp".parse::<Strategy>().is_err());
    }
}
