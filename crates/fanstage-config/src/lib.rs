use anyhow::Context;
use fanstage_core::{PlatformId, SortOption};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for the fanstage tool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub recommend: RecommendConfig,

    #[serde(default)]
    pub inbox: InboxConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecommendConfig {
    /// Fallback handed to the recommender when the listener has no history.
    /// Absent means none, so the recommender's baseline platform applies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_platform: Option<PlatformId>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InboxConfig {
    #[serde(default = "default_sort")]
    pub default_sort: SortOption,

    #[serde(default = "default_page_size")]
    pub page_size: usize,

    #[serde(default = "default_autocomplete_limit")]
    pub autocomplete_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            recommend: RecommendConfig::default(),
            inbox: InboxConfig::default(),
        }
    }
}

impl Default for InboxConfig {
    fn default() -> Self {
        Self {
            default_sort: default_sort(),
            page_size: default_page_size(),
            autocomplete_limit: default_autocomplete_limit(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_sort() -> SortOption {
    SortOption::DateDesc
}

fn default_page_size() -> usize {
    fanstage_inbox::DEFAULT_PAGE_SIZE
}

fn default_autocomplete_limit() -> usize {
    5
}

impl Config {
    /// Load config from default location or create default if not found
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load config from `path`, writing the defaults there if it does not exist
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            let config: Config = toml::from_str(&content)
                .with_context(|| format!("Invalid config {}", path.display()))?;
            Ok(config)
        } else {
            let config = Config::default();
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let content = toml::to_string_pretty(&config)?;
            std::fs::write(path, content)?;
            Ok(config)
        }
    }

    /// Get config file path
    pub fn config_path() -> PathBuf {
        if let Some(dirs) = directories::ProjectDirs::from("com", "fanstage", "fanstage") {
            dirs.config_dir().join("config.toml")
        } else {
            PathBuf::from("~/.fanstage/config.toml")
        }
    }
}
