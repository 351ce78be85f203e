//! CLI arguments and settings resolution.
//!
//! This module contains the clap CLI definition and merges it with the
//! config file into the [`Settings`] for a run.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::config::{FeedConfig, LineEndings, OutputFormat, Settings};
use crate::error::ArgumentError;

/// Print each user's feed of messages from themselves and the people they follow.
///
/// Both files are looked up under the data directory (`data/` by default).
///
/// Examples:
///   feedview user.txt tweet.txt
///   feedview user.txt tweet.txt --format json
///   feedview --line-endings any user.txt tweet.txt
#[derive(Parser, Debug)]
#[command(name = "feedview")]
#[command(author, version = crate::VERSION, about, long_about = None)]
pub struct Cli {
    /// User data file name, e.g. user.txt.
    #[arg(value_name = "USERS_FILE")]
    pub users_file: Option<String>,

    /// Message data file name, e.g. tweet.txt.
    #[arg(value_name = "MESSAGES_FILE")]
    pub messages_file: Option<String>,

    /// Directory holding the data files.
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// How to split file content into lines.
    ///
    /// `crlf` splits on \r\n only; `any` also accepts bare \n.
    #[arg(long, value_enum)]
    pub line_endings: Option<LineEndings>,

    /// Output format.
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to a config file. Defaults to feedview.toml if present.
    #[arg(short = 'c', long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short = 'v', long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log errors.
    #[arg(short = 'q', long)]
    pub quiet: bool,
}

impl Cli {
    /// Log filter directive for the chosen verbosity.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Merge the command line over the config file.
    ///
    /// # Errors
    ///
    /// Returns an `ArgumentError` if either file name is missing from both.
    pub fn resolve(&self, config: FeedConfig) -> Result<Settings, ArgumentError> {
        let users_file = self
            .users_file
            .clone()
            .or(config.users_file)
            .ok_or(ArgumentError::MissingUserFile)?;
        let messages_file = self
            .messages_file
            .clone()
            .or(config.messages_file)
            .ok_or(ArgumentError::MissingMessageFile)?;

        Ok(Settings {
            data_dir: self
                .data_dir
                .clone()
                .unwrap_or_else(|| PathBuf::from(config.data_dir)),
            users_file,
            messages_file,
            line_endings: self.line_endings.unwrap_or(config.line_endings),
            format: self.format.unwrap_or(config.format),
            required_extension: config.required_extension,
        })
    }
}
