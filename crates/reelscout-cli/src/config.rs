use anyhow::{anyhow, Result};
use reelscout_client::{DEFAULT_BASE_URL, FALLBACK_API_KEY};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Resolve the data directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. REELSCOUT_PATH environment variable (with tilde expansion)
/// 3. XDG data directory (recommended default)
/// 4. ~/.reelscout (fallback for systems without XDG)
pub fn resolve_data_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("REELSCOUT_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("reelscout"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".reelscout"));
    }

    Err(anyhow!(
        "Could not determine data directory: no HOME directory or XDG data directory found"
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(stripped);
        }
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default)]
    pub base_url: Option<String>,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Api key precedence: --api-key flag, OMDB_API_KEY env, config file,
    /// then the shared demo key.
    pub fn resolve_api_key(&self, flag: Option<&str>) -> String {
        if let Some(key) = flag {
            return key.to_string();
        }
        if let Ok(key) = std::env::var("OMDB_API_KEY") {
            if !key.is_empty() {
                return key;
            }
        }
        if let Some(key) = &self.api_key {
            return key.clone();
        }
        FALLBACK_API_KEY.to_string()
    }

    pub fn resolve_base_url(&self) -> String {
        self.base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn load_nonexistent_returns_default() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load_from(&temp_dir.path().join("config.toml")).unwrap();
        assert!(config.api_key.is_none());
        assert!(config.base_url.is_none());
    }

    #[test]
    fn load_reads_keys() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(
            &path,
            "api_key = \"abc123\"\nbase_url = \"http://localhost:9900/\"\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.api_key.as_deref(), Some("abc123"));
        assert_eq!(config.resolve_base_url(), "http://localhost:9900/");
    }

    #[test]
    fn flag_beats_config_key() {
        let config = Config {
            api_key: Some("from-config".to_string()),
            base_url: None,
        };
        assert_eq!(config.resolve_api_key(Some("from-flag")), "from-flag");
    }

    #[test]
    fn fallback_key_when_nothing_configured() {
        let config = Config::default();
        // Only meaningful when the env var is not set in the test environment.
        if std::env::var("OMDB_API_KEY").is_err() {
            assert_eq!(config.resolve_api_key(None), FALLBACK_API_KEY);
        }
    }

    #[test]
    fn explicit_data_dir_wins() {
        let dir = resolve_data_dir(Some("/tmp/reelscout-test")).unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/reelscout-test"));
    }
}
