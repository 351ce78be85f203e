//! Follow graph parsing.
//!
//! Lines look like `Ward follows Alan, Martin`. Every name mentioned on either
//! side of `follows` becomes a user, even one that follows nobody.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::{DataShapeError, FormatError};

/// Token separating a user from the people they follow.
pub const FOLLOWS_TOKEN: &str = "follows";

/// Mapping from user name to the users they follow.
///
/// Keys iterate in byte-wise ascending order. Followee lists keep first-seen
/// order and never hold duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FollowGraph {
    users: BTreeMap<String, Vec<String>>,
}

impl FollowGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from a raw map without registering followees as users.
    ///
    /// Use [`validate`](Self::validate) to check the result.
    pub fn from_map(users: BTreeMap<String, Vec<String>>) -> Self {
        Self { users }
    }

    /// Register a user with no followees. No-op if already known.
    pub fn add_user(&mut self, name: &str) {
        if !self.users.contains_key(name) {
            self.users.insert(name.to_string(), Vec::new());
        }
    }

    /// Record that `user` follows `followee`, registering both.
    pub fn add_follow(&mut self, user: &str, followee: &str) {
        let followees = self.users.entry(user.to_string()).or_default();
        if !followees.iter().any(|f| f == followee) {
            followees.push(followee.to_string());
        }
        self.add_user(followee);
    }

    /// Users in ascending order.
    pub fn users(&self) -> impl Iterator<Item = &str> {
        self.users.keys().map(String::as_str)
    }

    /// Users with their followees, in ascending user order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.users
            .iter()
            .map(|(user, followees)| (user.as_str(), followees.as_slice()))
    }

    /// Followees of `user`, or `None` for an unknown user.
    pub fn followees(&self, user: &str) -> Option<&[String]> {
        self.users.get(user).map(Vec::as_slice)
    }

    /// Whether `user` is a key in the graph.
    pub fn contains(&self, user: &str) -> bool {
        self.users.contains_key(user)
    }

    /// Whether `user` follows `other`.
    pub fn follows(&self, user: &str, other: &str) -> bool {
        self.followees(user)
            .is_some_and(|followees| followees.iter().any(|f| f == other))
    }

    /// Number of users.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether the graph has no users.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Check the graph is fit to render.
    ///
    /// It must be non-empty and every followee must itself be a user.
    pub fn validate(&self) -> Result<(), DataShapeError> {
        if self.is_empty() {
            return Err(DataShapeError::EmptyGraph);
        }
        for (user, followees) in &self.users {
            if let Some(missing) = followees.iter().find(|f| !self.users.contains_key(*f)) {
                return Err(DataShapeError::UnregisteredFollowee {
                    user: user.clone(),
                    followee: missing.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Parse follow lines into a graph.
///
/// Lines are processed in order and later lines for the same user add to
/// their followees. Blank lines are skipped.
///
/// # Errors
///
/// `MalformedFollowLine` if a line has no `follows` token.
pub fn parse_follow_graph<I>(lines: I) -> Result<FollowGraph, FormatError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let graph = lines
        .into_iter()
        .enumerate()
        .try_fold(
            FollowGraph::new(),
            |mut graph, (index, line)| -> Result<FollowGraph, FormatError> {
                let line = line.as_ref();
                if line.trim().is_empty() {
                    tracing::warn!(line = index + 1, "skipping blank line in user data");
                    return Ok(graph);
                }
                apply_follow_line(&mut graph, index + 1, line)?;
                Ok(graph)
            },
        )?;

    tracing::debug!(users = graph.len(), "parsed follow graph");
    Ok(graph)
}

fn apply_follow_line(
    graph: &mut FollowGraph,
    number: usize,
    line: &str,
) -> Result<(), FormatError> {
    let (user, raw_followees) = line.split_once(FOLLOWS_TOKEN).ok_or_else(|| {
        FormatError::MalformedFollowLine {
            line: number,
            content: line.to_string(),
        }
    })?;

    let user = user.trim();
    graph.add_user(user);

    for followee in split_followees(raw_followees) {
        graph.add_follow(user, followee);
    }
    Ok(())
}

/// Split the part after `follows` into trimmed names.
///
/// A blank list yields nothing; a list without commas yields one name.
/// Blank entries between commas are kept as empty names.
fn split_followees(raw: &str) -> Vec<&str> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Vec::new();
    }
    if raw.contains(',') {
        raw.split(',').map(str::trim).collect()
    } else {
        vec![raw]
    }
}
