//! Configuration models for feedview.toml.
//!
//! The config file is optional. Every key has a built-in default, and
//! command-line flags override whatever the file provides.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file looked up in the current directory when `--config` is not given.
pub const CONFIG_FILE: &str = "feedview.toml";
/// Directory, relative to the working directory, that holds the data files.
pub const DATA_DIR: &str = "data";
/// Substring every data file name must contain.
pub const REQUIRED_EXTENSION: &str = ".txt";

/// How file content is split into lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LineEndings {
    /// Split on `\r\n` only.
    #[default]
    Crlf,
    /// Split on `\n`, dropping a trailing `\r` from each line.
    Any,
}

/// Rendering format for the feed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Header line per user, tab-indented `@author: text` lines beneath.
    #[default]
    Text,
    /// A JSON array of per-user feeds.
    Json,
}

/// Contents of the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Directory holding the data files.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    /// User data file name used when none is given on the command line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub users_file: Option<String>,
    /// Message data file name used when none is given on the command line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub messages_file: Option<String>,
    /// Line splitting mode.
    #[serde(default)]
    pub line_endings: LineEndings,
    /// Output format.
    #[serde(default)]
    pub format: OutputFormat,
    /// Substring required in data file names.
    #[serde(default = "default_required_extension")]
    pub required_extension: String,
}

fn default_data_dir() -> String {
    DATA_DIR.to_string()
}

fn default_required_extension() -> String {
    REQUIRED_EXTENSION.to_string()
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            users_file: None,
            messages_file: None,
            line_endings: LineEndings::default(),
            format: OutputFormat::default(),
            required_extension: default_required_extension(),
        }
    }
}

/// Error type for config operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An explicitly requested config file does not exist.
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// Error reading the config file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Error parsing the config file TOML.
    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

impl FeedConfig {
    /// Load configuration from a file, or return defaults.
    ///
    /// With `Some(path)` the file must exist. With `None`, `feedview.toml` in
    /// the current directory is used if present, defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(explicit) => {
                if !explicit.exists() {
                    return Err(ConfigError::NotFound(explicit.to_path_buf()));
                }
                explicit.to_path_buf()
            }
            None => {
                let default = PathBuf::from(CONFIG_FILE);
                if !default.exists() {
                    tracing::debug!("no {CONFIG_FILE} found, using defaults");
                    return Ok(Self::default());
                }
                default
            }
        };

        tracing::debug!(path = %path.display(), "loading config");
        let contents = fs::read_to_string(&path)?;
        let config: FeedConfig = toml::from_str(&contents)?;
        Ok(config)
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Directory holding the data files.
    pub data_dir: PathBuf,
    /// User data file name.
    pub users_file: String,
    /// Message data file name.
    pub messages_file: String,
    /// Line splitting mode.
    pub line_endings: LineEndings,
    /// Output format.
    pub format: OutputFormat,
    /// Substring required in data file names.
    pub required_extension: String,
}
