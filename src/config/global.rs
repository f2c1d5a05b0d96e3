//! User-wide configuration file.

use crate::constants::{CONFIG_DIR_NAME, CONFIG_ENV_VAR, CONFIG_FILE_NAME, DEFAULT_CLI_MAX_DEPTH};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Settings read from `config.toml`.
///
/// Unknown keys are rejected so a typo does not silently fall back to a default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Embedding depth used when the command line does not give one.
    pub max_depth: usize,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_CLI_MAX_DEPTH,
        }
    }
}

impl GlobalConfig {
    /// Load configuration from the default location.
    ///
    /// Returns defaults when no file exists there.
    pub async fn load() -> Result<Self> {
        Self::load_with_optional(None).await
    }

    /// Load configuration from `path`, or from the default location when `None`.
    ///
    /// A missing file yields defaults. An explicit path is treated the same way,
    /// so pointing `--config` at a file that does not exist yet is not an error.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use hydrate_cli::config::GlobalConfig;
    ///
    /// # async fn example() -> anyhow::Result<()> {
    /// let config = GlobalConfig::load_with_optional(None).await?;
    /// println!("default depth: {}", config.max_depth);
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub async fn load_with_optional(path: Option<PathBuf>) -> Result<Self> {
        let path = match path {
            Some(path) => path,
            None => match Self::default_path() {
                Some(path) => path,
                None => {
                    tracing::debug!("No config location available, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        if fs::try_exists(&path).await.unwrap_or(false) {
            Self::load_from(&path).await
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not parse as a
    /// valid configuration.
    pub async fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// The default configuration file path.
    ///
    /// `$HYDRATE_CONFIG` when set and non-empty, else `~/.hydrate/config.toml`.
    /// `None` only when neither is available.
    pub fn default_path() -> Option<PathBuf> {
        Self::resolve_default_path(std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from))
    }

    fn resolve_default_path(from_env: Option<PathBuf>) -> Option<PathBuf> {
        from_env
            .filter(|path| !path.as_os_str().is_empty())
            .or_else(|| dirs::home_dir().map(|home| home.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME)))
    }
}
