//! Config file loading

use crate::config::Config;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Load configuration from `config_path`, or discover one in `search_dir`.
///
/// An explicitly provided file that fails to parse is a hard error; an
/// auto-discovered one that fails to parse logs a warning and falls back
/// to defaults.
pub fn load_config(search_dir: &Path, config_path: Option<&Path>) -> Result<Config> {
    let config_path_provided = config_path.is_some();

    let discovered = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => discover_config(search_dir),
    };

    let Some(config_file) = discovered else {
        return Ok(Config::default());
    };

    let content = fs::read_to_string(&config_file)
        .with_context(|| format!("Failed reading config file: {}", config_file.display()))?;

    let ext = config_file.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();

    let parsed = match ext.as_str() {
        "toml" => parse_toml_config(&content, &config_file),
        "yaml" | "yml" => parse_yaml_config(&content, &config_file),
        other => Err(anyhow::anyhow!(
            "Unsupported config extension '.{}' for file {}",
            other,
            config_file.display()
        )),
    };

    match parsed {
        Ok(cfg) => Ok(cfg),
        Err(e) if config_path_provided => Err(e),
        Err(e) => {
            tracing::warn!(
                "Failed to parse auto-discovered config {}: {}",
                config_file.display(),
                e
            );
            Ok(Config::default())
        }
    }
}

/// Parse TOML config, supporting a nested [repo-prompt] section.
fn parse_toml_config(content: &str, config_file: &Path) -> Result<Config> {
    let raw: toml::Value = toml::from_str(content)
        .with_context(|| format!("Invalid TOML syntax: {}", config_file.display()))?;

    let config_val = match raw.get("repo-prompt") {
        Some(nested) => nested.clone(),
        None => raw,
    };

    config_val.try_into().with_context(|| format!("Invalid TOML config: {}", config_file.display()))
}

/// Parse YAML config, supporting a nested repo-prompt section.
fn parse_yaml_config(content: &str, config_file: &Path) -> Result<Config> {
    let raw: serde_yaml::Value = serde_yaml::from_str(content)
        .with_context(|| format!("Invalid YAML syntax: {}", config_file.display()))?;

    let config_val = match raw.get("repo-prompt") {
        Some(nested) => nested.clone(),
        None => raw,
    };

    serde_yaml::from_value(config_val)
        .with_context(|| format!("Invalid YAML config: {}", config_file.display()))
}

fn discover_config(search_dir: &Path) -> Option<std::path::PathBuf> {
    let candidates = ["repo-prompt.toml", ".repo-prompt.yml", ".repo-prompt.yaml"];
    candidates.iter().map(|name| search_dir.join(name)).find(|p| p.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Strategy;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn no_config_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = load_config(dir.path(), None).unwrap();
        assert_eq!(config.strategy, Strategy::Clone);
    }

    #[test]
    fn discovers_toml_in_search_dir() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("repo-prompt.toml"),
            "strategy = \"api\"\nmax-file-bytes = 2048\n",
        )
        .unwrap();

        let config = load_config(dir.path(), None).unwrap();
        assert_eq!(config.strategy, Strategy::Api);
        assert_eq!(config.max_file_bytes, 2048);
    }

    #[test]
    fn supports_nested_section() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("repo-prompt.toml"),
            "[repo-prompt]\nstrategy = \"api\"\n",
        )
        .unwrap();

        let config = load_config(dir.path(), None).unwrap();
        assert_eq!(config.strategy, Strategy::Api);
    }

    #[test]
    fn explicit_yaml_config_is_loaded() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.yml");
        fs::write(&path, "strategy: api\nhttp-timeout-secs: 5\n").unwrap();

        let config = load_config(dir.path(), Some(&path)).unwrap();
        assert_eq!(config.strategy, Strategy::Api);
        assert_eq!(config.http_timeout_secs, 5);
    }

    #[test]
    fn explicit_broken_config_is_a_hard_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "strategy = [not toml").unwrap();

        assert!(load_config(dir.path(), Some(&path)).is_err());
    }

    #[test]
    fn discovered_broken_config_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("repo-prompt.toml"), "strategy = [not toml").unwrap();

        let config = load_config(dir.path(), None).unwrap();
        assert_eq!(config.strategy, Strategy::Clone);
    }
}
