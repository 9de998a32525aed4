use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub const DEFAULT_LEETCODE_URL: &str = "https://leetcode.com";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";
pub const DEFAULT_STARTER_LANGUAGE: &str = "javascript";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Practice root holding the `LeetCode/` and `HackerRank/` directories.
    pub root: Option<PathBuf>,
    pub leetcode_url: String,
    pub user_agent: String,
    /// Language tag of the starter snippet fed to the synthesizer.
    pub starter_language: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: None,
            leetcode_url: DEFAULT_LEETCODE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            starter_language: DEFAULT_STARTER_LANGUAGE.to_string(),
        }
    }
}

pub fn get_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("practice-kit").join("config.json"))
}

pub fn load_config() -> Config {
    match get_config_path() {
        Some(path) => load_config_from(&path),
        None => Config::default(),
    }
}

/// Reads a config file, falling back to defaults when it is missing or broken.
pub fn load_config_from(path: &Path) -> Config {
    if !path.exists() {
        return Config::default();
    }

    match fs::read_to_string(path) {
        Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "ignoring malformed config");
            Config::default()
        }),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "could not read config");
            Config::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = load_config_from(&dir.path().join("config.json"));
        assert_eq!(config, Config::default());
        assert_eq!(config.leetcode_url, "https://leetcode.com");
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "root": "/tmp/practice", "starter_language": "typescript" }"#)
            .unwrap();

        let config = load_config_from(&path);
        assert_eq!(config.root, Some(PathBuf::from("/tmp/practice")));
        assert_eq!(config.starter_language, "typescript");
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
    }

    #[test]
    fn malformed_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "not-json").unwrap();
        assert_eq!(load_config_from(&path), Config::default());
    }
}
