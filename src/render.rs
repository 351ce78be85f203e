//! Feed rendering.
//!
//! Each user sees the messages they wrote plus those written by anyone they
//! follow, in the original message order. The graph is validated before
//! anything is written.

use std::io::Write;

use serde::Serialize;

use crate::config::OutputFormat;
use crate::error::FeedResult;
use crate::graph::FollowGraph;
use crate::message::Message;

/// The messages visible to one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserFeed<'a> {
    /// The user the feed belongs to.
    pub user: &'a str,
    /// Visible messages in original order.
    pub messages: Vec<&'a Message>,
}

/// Whether `user` should see `message`.
pub fn is_visible(graph: &FollowGraph, user: &str, message: &Message) -> bool {
    message.author == user || graph.follows(user, &message.author)
}

/// Compute every user's feed, users in ascending order.
pub fn build_feeds<'a>(graph: &'a FollowGraph, messages: &'a [Message]) -> Vec<UserFeed<'a>> {
    graph
        .users()
        .map(|user| UserFeed {
            user,
            messages: messages
                .iter()
                .filter(|message| is_visible(graph, user, message))
                .collect(),
        })
        .collect()
}

/// Write feeds in the text format.
///
/// ```text
/// Ward
/// 	@Alan: Hello there
/// ```
pub fn write_text<W: Write>(out: &mut W, feeds: &[UserFeed<'_>]) -> std::io::Result<()> {
    for feed in feeds {
        writeln!(out, "{}", feed.user)?;
        for message in &feed.messages {
            writeln!(out, "\t{message}")?;
        }
    }
    Ok(())
}

/// Write feeds as a pretty-printed JSON array.
pub fn write_json<W: Write>(out: &mut W, feeds: &[UserFeed<'_>]) -> FeedResult<()> {
    serde_json::to_writer_pretty(&mut *out, feeds)?;
    writeln!(out)?;
    Ok(())
}

/// Validate the graph, then render every feed to `out`.
///
/// Nothing is written if validation fails. An empty message list renders
/// one header per user.
pub fn render<W: Write>(
    out: &mut W,
    graph: &FollowGraph,
    messages: &[Message],
    format: OutputFormat,
) -> FeedResult<()> {
    graph.validate()?;

    let feeds = build_feeds(graph, messages);
    tracing::info!(users = feeds.len(), messages = messages.len(), "rendering feeds");

    match format {
        OutputFormat::Text => write_text(out, &feeds)?,
        OutputFormat::Json => write_json(out, &feeds)?,
    }
    Ok(())
}
