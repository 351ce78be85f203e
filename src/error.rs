//! Error types for feedview.
//!
//! Every failure is terminal. The binary catches them once at the top level,
//! prints the full chain to stderr and exits with a failure status.

use std::path::PathBuf;

use crate::config::ConfigError;

/// Result type used throughout the crate.
pub type FeedResult<T> = Result<T, FeedError>;

/// Top-level error for a feedview run.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// A required file name was not supplied.
    #[error(transparent)]
    Argument(#[from] ArgumentError),
    /// Input text did not match the expected line formats.
    #[error(transparent)]
    Format(#[from] FormatError),
    /// Parsed structures failed the pre-render shape check.
    #[error(transparent)]
    DataShape(#[from] DataShapeError),
    /// A data file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Failed to write the rendered feed.
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
    /// Failed to serialise the feed as JSON.
    #[error("Failed to serialise feed: {0}")]
    Json(#[from] serde_json::Error),
    /// The configuration file could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Missing command-line arguments.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArgumentError {
    /// No user data file name on the command line or in the config.
    #[error("User data file name not supplied")]
    MissingUserFile,
    /// No message data file name on the command line or in the config.
    #[error("Message data file name not supplied")]
    MissingMessageFile,
}

/// Malformed file names or file contents.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// The file name lacks the required extension.
    #[error("Expecting text files: '{name}' does not contain '{extension}'")]
    NotTextFile {
        /// Offending file name.
        name: String,
        /// Extension that was required.
        extension: String,
    },
    /// The file was empty.
    #[error("No file content to orchestrate")]
    EmptyContent,
    /// Nothing usable was left after splitting into lines.
    #[error("Could not process file data")]
    NoLines,
    /// A follow line without the `follows` token.
    #[error("Could not process user data on line {line}: '{content}'")]
    MalformedFollowLine {
        /// 1-based line number.
        line: usize,
        /// The raw line.
        content: String,
    },
    /// A message line without the `>` separator.
    #[error("Could not process message data on line {line}: '{content}' has no '>' separator")]
    MalformedMessageLine {
        /// 1-based line number.
        line: usize,
        /// The raw line.
        content: String,
    },
}

/// Parsed data that is not fit to render.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DataShapeError {
    /// The follow graph has no users.
    #[error("Could not process data: no users to render")]
    EmptyGraph,
    /// A followee that is not itself a key in the graph.
    #[error("Could not process data: '{user}' follows unregistered user '{followee}'")]
    UnregisteredFollowee {
        /// The follower.
        user: String,
        /// The missing followee.
        followee: String,
    },
}
