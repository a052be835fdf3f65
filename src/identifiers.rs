//! Domain identifier types for actors, execution paths and decision values.
//!
//! These types provide type-safe wrappers around the primitive values used
//! throughout the interleaving tree.

use std::{fmt, ops::Deref};

use serde::{Deserialize, Serialize};

/// Identifier of a single concurrent actor.
///
/// Actors are named by one character so that an execution path reads as a
/// plain string such as `"ABBA"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActorId(char);

impl ActorId {
    /// Create a new actor identifier.
    ///
    /// # Examples
    ///
    /// ```
    /// use valency::identifiers::ActorId;
    ///
    /// let actor = ActorId::new('A');
    /// assert_eq!(actor.as_char(), 'A');
    /// ```
    pub const fn new(value: char) -> Self {
        Self(value)
    }

    /// Get the identifier as a character.
    pub const fn as_char(self) -> char {
        self.0
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<char> for ActorId {
    fn from(c: char) -> Self {
        Self::new(c)
    }
}

impl PartialEq<char> for ActorId {
    fn eq(&self, other: &char) -> bool {
        self.0 == *other
    }
}

/// Parse a compact actor list such as `"ABC"` or `"A,B,C"`.
///
/// Whitespace and commas are treated as separators and ignored.
pub fn parse_actors(input: &str) -> Vec<ActorId> {
    input
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .map(ActorId::new)
        .collect()
}

/// Ordered sequence of actors taken from the root to a node.
///
/// The root's path is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExecutionPath(Vec<ActorId>);

impl ExecutionPath {
    /// Create an empty path (the root position).
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Number of steps taken along this path.
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// Whether this is the root path.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of times `actor` acts along this path.
    pub fn count_of(&self, actor: ActorId) -> usize {
        self.0.iter().filter(|step| **step == actor).count()
    }

    pub(crate) fn push(&mut self, actor: ActorId) {
        self.0.push(actor);
    }

    pub(crate) fn pop(&mut self) -> Option<ActorId> {
        self.0.pop()
    }

    /// Convert the path into its inner step vector.
    pub fn into_inner(self) -> Vec<ActorId> {
        self.0
    }
}

impl Deref for ExecutionPath {
    type Target = [ActorId];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for ExecutionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for actor in &self.0 {
            write!(f, "{actor}")?;
        }
        Ok(())
    }
}

impl From<&str> for ExecutionPath {
    fn from(s: &str) -> Self {
        Self(s.chars().map(ActorId::new).collect())
    }
}

impl FromIterator<ActorId> for ExecutionPath {
    fn from_iter<I: IntoIterator<Item = ActorId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl PartialEq<&str> for ExecutionPath {
    fn eq(&self, other: &&str) -> bool {
        self.0.iter().map(|a| a.as_char()).eq(other.chars())
    }
}

/// Decision value reached by a completed execution.
///
/// Values lie in `[0, number of actors)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Outcome(usize);

impl Outcome {
    pub const fn new(value: usize) -> Self {
        Self(value)
    }

    pub const fn value(self) -> usize {
        self.0
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for Outcome {
    fn from(value: usize) -> Self {
        Self::new(value)
    }
}
