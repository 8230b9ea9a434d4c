//! Navigation path and its callback token encoding
//!
//! A token is the namespace marker followed by the path keys joined with
//! `/`: `menu:` is the root, `menu:a/b/c` the node `c` under `a → b`.

use std::fmt;

use itertools::Itertools;

use crate::error::DecodeError;

/// Namespace marker every menu callback token starts with
pub const CALLBACK_PREFIX: &str = "menu:";

/// Separator between path segments inside a token
pub const DELIMITER: char = '/';

/// Ordered keys from the root to a node; empty is the root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NavPath(Vec<String>);

impl NavPath {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// This path extended by one key.
    pub fn child(&self, key: &str) -> Self {
        let mut segments = self.0.clone();
        segments.push(key.to_owned());
        Self(segments)
    }

    /// This path without its last key; `None` at the root.
    pub fn parent(&self) -> Option<Self> {
        let (_, rest) = self.0.split_last()?;
        Some(Self(rest.to_vec()))
    }

    pub fn encode(&self) -> String {
        format!("{}{}", CALLBACK_PREFIX, self.0.iter().join("/"))
    }

    /// Inverse of [`NavPath::encode`]. A single leading `/` after the marker
    /// is tolerated.
    pub fn decode(token: &str) -> Result<Self, DecodeError> {
        let raw = token.strip_prefix(CALLBACK_PREFIX).ok_or_else(|| DecodeError {
            token: token.to_owned(),
        })?;
        let raw = raw.strip_prefix(DELIMITER).unwrap_or(raw);
        if raw.is_empty() {
            return Ok(Self::root());
        }
        Ok(Self(raw.split(DELIMITER).map(str::to_owned).collect()))
    }
}

impl<S: Into<String>> FromIterator<S> for NavPath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for NavPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return f.write_str("/");
        }
        write!(f, "{}", self.0.iter().join("/"))
    }
}
