//! Token paths
//!
//! A [`TokenPath`] is the ordered sequence of group keys leading to a token.
//! Two leaves are the same token iff their paths are equal; comparison is
//! order- and case-sensitive over the key sequence.
//!
//! The rendered form joins segments with `/`, matching the grouping
//! convention design tools use in variable names, so the separator never
//! collides with characters inside a key.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator used when rendering a path as a single string
pub const SEPARATOR: char = '/';

/// The ordered sequence of group keys leading to a token
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenPath {
    segments: Vec<String>,
}

impl TokenPath {
    /// The empty path addressing the tree root
    pub fn root() -> Self {
        Self::default()
    }

    /// Build a path from an ordered sequence of keys
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a rendered path back into segments
    ///
    /// The empty string parses to the root path.
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() {
            return Self::root();
        }
        Self {
            segments: raw.split(SEPARATOR).map(String::from).collect(),
        }
    }

    /// Extend this path with one more key, returning the child path
    pub fn child(&self, key: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(key.into());
        Self { segments }
    }

    /// The ordered key sequence
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Whether this is the root path (no segments)
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of segments
    pub fn depth(&self) -> usize {
        self.segments.len()
    }
}

impl fmt::Display for TokenPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for segment in &self.segments {
            if !first {
                write!(f, "{}", SEPARATOR)?;
            }
            write!(f, "{}", segment)?;
            first = false;
        }
        Ok(())
    }
}
