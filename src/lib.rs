//! feedview - print per-user message feeds from plain text files.
//!
//! A users file lists who follows whom, a messages file lists who said what.
//! For every user, in ascending name order, feedview prints the messages they
//! wrote and the messages written by the people they follow.

#![deny(missing_docs)]

/// Version string from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod cli;
pub mod config;
pub mod error;
pub mod graph;
pub mod input;
pub mod message;
pub mod render;

use std::io::Write;

pub use config::{FeedConfig, LineEndings, OutputFormat, Settings};
pub use error::{ArgumentError, DataShapeError, FeedError, FeedResult, FormatError};
pub use graph::{parse_follow_graph, FollowGraph};
pub use message::{parse_messages, Message};

/// Load the config file and merge the command line over it.
pub fn load_settings(cli: &cli::Cli) -> FeedResult<Settings> {
    let config = FeedConfig::load(cli.config.as_deref())?;
    let settings = cli.resolve(config)?;
    tracing::debug!(?settings, "resolved settings");
    Ok(settings)
}

/// Load both data files and parse them.
///
/// The users file is read and parsed completely before the messages file is
/// touched.
pub fn load(settings: &Settings) -> FeedResult<(FollowGraph, Vec<Message>)> {
    let content = input::read_data_file(
        &settings.data_dir,
        &settings.users_file,
        &settings.required_extension,
    )?;
    let graph = parse_follow_graph(input::split_lines(&content, settings.line_endings)?)?;

    let content = input::read_data_file(
        &settings.data_dir,
        &settings.messages_file,
        &settings.required_extension,
    )?;
    let messages = parse_messages(input::split_lines(&content, settings.line_endings)?)?;

    Ok((graph, messages))
}

/// Run one render: load, parse, validate, then write to `out`.
pub fn run<W: Write>(settings: &Settings, out: &mut W) -> FeedResult<()> {
    let (graph, messages) = load(settings)?;
    render::render(out, &graph, &messages, settings.format)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;
    use clap::Parser;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn settings(data_dir: &Path) -> Settings {
        Settings {
            data_dir: data_dir.to_path_buf(),
            users_file: "user.txt".into(),
            messages_file: "tweet.txt".into(),
            line_endings: LineEndings::Crlf,
            format: OutputFormat::Text,
            required_extension: ".txt".into(),
        }
    }

    #[test]
    fn test_run_end_to_end() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("user.txt"),
            "Alan follows Martin\r\nWard follows Alan, Martin\r\n",
        )
        .unwrap();
        fs::write(
            temp.path().join("tweet.txt"),
            "Alan>Hello there\r\nMartin>Hi Alan\r\n",
        )
        .unwrap();

        let mut out = Vec::new();
        run(&settings(temp.path()), &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Alan\n\t@Alan: Hello there\nMartin\n\t@Martin: Hi Alan\nWard\n\t@Alan: Hello there\n\t@Martin: Hi Alan\n"
        );
    }

    #[test]
    fn test_users_file_errors_before_messages_file_is_read() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("user.txt"), "").unwrap();

        let err = load(&settings(temp.path())).unwrap_err();
        assert!(matches!(err, FeedError::Format(FormatError::EmptyContent)));
    }

    #[test]
    fn test_malformed_message_produces_no_output() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("user.txt"), "Alan follows Martin").unwrap();
        fs::write(temp.path().join("tweet.txt"), "Alan>Hi\r\nMartin Hi").unwrap();

        let mut out = Vec::new();
        let err = run(&settings(temp.path()), &mut out).unwrap_err();
        assert!(matches!(
            err,
            FeedError::Format(FormatError::MalformedMessageLine { line: 2, .. })
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn test_load_settings_reports_missing_config() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing.toml");
        let cli = cli::Cli::try_parse_from([
            "feedview",
            "--config",
            missing.to_str().unwrap(),
            "user.txt",
            "tweet.txt",
        ])
        .unwrap();

        let err = load_settings(&cli).unwrap_err();
        assert!(matches!(err, FeedError::Config(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_load_settings_config_without_messages_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("feedview.toml");
        fs::write(&path, "users_file = \"follows.txt\"\nformat = \"json\"\n").unwrap();

        let cli =
            cli::Cli::try_parse_from(["feedview", "--config", path.to_str().unwrap()]).unwrap();
        let err = load_settings(&cli).unwrap_err();
        assert!(matches!(
            err,
            FeedError::Argument(ArgumentError::MissingMessageFile)
        ));
    }
}
