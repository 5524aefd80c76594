//! Configuration system for soupwalk.
//!
//! This module provides the configuration structure for soupwalk with sensible
//! defaults and support for serialization/deserialization via serde.
//! Configuration is loaded from a TOML file and merged with command-line
//! arguments.
//!
//! # Example
//!
//! ```
//! use soupwalk::config::Config;
//! use soupwalk::tagpath::AbsentPolicy;
//!
//! // Use default configuration
//! let config = Config::default();
//! assert_eq!(config.browser, "firefox");
//! assert_eq!(config.absent_policy, AbsentPolicy::Propagate);
//!
//! // Create custom configuration
//! let custom = Config {
//!     browser: "system".to_string(),
//!     absent_policy: AbsentPolicy::FailFast,
//!     ..Config::default()
//! };
//! ```

use crate::extract::TextTransform;
use crate::file::preview::PreviewOptions;
use crate::tagpath::AbsentPolicy;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for soupwalk.
///
/// All fields have defaults via `Config::default()`, and any field missing
/// from the config file falls back to its default.
///
/// # Fields
///
/// * `browser` - Program used to preview tags; `"system"` uses the desktop default (default: "firefox")
/// * `preview_dir` - Directory for preview files (default: the system temp dir)
/// * `absent_policy` - What `--first` does when a segment misses: "propagate" or "fail_fast" (default: "propagate")
/// * `text_transform` - Cleanup for printed text: "raw", "trim" or "collapse_whitespace" (default: "trim")
/// * `create_backup` - Create .bak files before overwriting (default: false)
/// * `indent_size` - Spaces per level in prettified previews (default: 1)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Program used to preview tags
    #[serde(default = "default_browser")]
    pub browser: String,

    /// Directory for preview files
    #[serde(default)]
    pub preview_dir: Option<PathBuf>,

    /// Single-match traversal behavior on a miss
    #[serde(default)]
    pub absent_policy: AbsentPolicy,

    /// Cleanup applied to extracted text
    #[serde(default)]
    pub text_transform: TextTransform,

    /// Create .bak files before overwriting
    #[serde(default)]
    pub create_backup: bool,

    /// Spaces per nesting level in prettified output
    #[serde(default = "default_indent_size")]
    pub indent_size: usize,
}

/// Returns the default preview browser.
fn default_browser() -> String {
    "firefox".to_string()
}

/// Returns the default indentation size.
fn default_indent_size() -> usize {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            browser: default_browser(),
            preview_dir: None,
            absent_policy: AbsentPolicy::default(),
            text_transform: TextTransform::default(),
            create_backup: false,
            indent_size: default_indent_size(),
        }
    }
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/soupwalk/config.toml` on all platforms.
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("soupwalk");
            path.push("config.toml");
            path
        })
    }

    /// Loads configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist or can't be read.
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Loads configuration from a specific file, falling back to defaults.
    pub fn load_from(path: &std::path::Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|error| {
                tracing::warn!(path = %path.display(), %error, "invalid config file, using defaults");
                Self::default()
            }),
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "unreadable config file, using defaults");
                Self::default()
            }
        }
    }

    /// Saves configuration to the default config file.
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        self.save_to(&config_path)
    }

    /// Saves configuration to a specific file.
    pub fn save_to(&self, path: &std::path::Path) -> anyhow::Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)?;

        Ok(())
    }

    /// Browser preview settings derived from this configuration.
    pub fn preview_options(&self) -> PreviewOptions {
        let browser = match self.browser.trim() {
            "" | "system" => None,
            browser => Some(browser.to_string()),
        };
        PreviewOptions {
            browser,
            dir: self.preview_dir.clone(),
            indent_size: self.indent_size,
        }
    }
}
