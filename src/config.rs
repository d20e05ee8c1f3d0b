use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::TagPattern;
use crate::error::{DotverError, Result};

/// File name looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "dotver.toml";

/// File name looked up in the user config directory
pub const USER_CONFIG_FILE: &str = ".dotver.toml";

/// Represents the complete configuration for dotver.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub tag: TagConfig,

    #[serde(default)]
    pub behavior: BehaviorConfig,
}

/// Returns the default tag pattern, the bare version.
fn default_tag_pattern() -> String {
    "{version}".to_string()
}

fn default_true() -> bool {
    true
}

/// How versions are wrapped when read from and written to the terminal.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TagConfig {
    #[serde(default = "default_tag_pattern")]
    pub pattern: String,
}

impl Default for TagConfig {
    fn default() -> Self {
        TagConfig {
            pattern: default_tag_pattern(),
        }
    }
}

impl TagConfig {
    pub fn tag_pattern(&self) -> TagPattern {
        TagPattern::new(self.pattern.clone())
    }
}

/// Configuration for behavior customization.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct BehaviorConfig {
    /// Warn when an input carries leading zeros that get normalized away
    #[serde(default = "default_true")]
    pub warn_non_canonical: bool,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        BehaviorConfig {
            warn_non_canonical: true,
        }
    }
}

/// Parse configuration from TOML text and validate it.
pub fn parse_config(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content)
        .map_err(|e| DotverError::config(format!("Invalid TOML: {}", e)))?;

    if !config.tag.pattern.contains("{version}") {
        return Err(DotverError::config(format!(
            "tag.pattern '{}' must contain {{version}}",
            config.tag.pattern
        )));
    }
    Ok(config)
}

/// Locate the configuration file to use, if any.
///
/// Order:
/// 1. Custom path provided as parameter
/// 2. `dotver.toml` in current directory
/// 3. `.dotver.toml` in user config directory
pub fn config_path(custom: Option<&str>) -> Option<PathBuf> {
    if let Some(path) = custom {
        return Some(PathBuf::from(path));
    }

    let local = Path::new(".").join(LOCAL_CONFIG_FILE);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join(USER_CONFIG_FILE))
        .filter(|path| path.exists())
}

/// Loads configuration from file or returns defaults.
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file was found (or given) but cannot be read or parsed
pub fn load_config(custom: Option<&str>) -> Result<Config> {
    match config_path(custom) {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading configuration");
            let content = fs::read_to_string(&path)?;
            parse_config(&content)
        }
        None => {
            tracing::debug!("no configuration file found, using defaults");
            Ok(Config::default())
        }
    }
}
