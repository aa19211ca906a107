// ABOUTME: Validated store namespace under which deployment records live.
// ABOUTME: Builds slash-joined, cleaned keys such as <prefix>/<id>/status.

use std::fmt;
use thiserror::Error;

/// Leaf segment holding a deployment's status record.
pub const STATUS_SEGMENT: &str = "status";

/// Namespace used when none is configured.
pub const DEFAULT_KEY_PREFIX: &str = "_deployments";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyPrefixError {
    #[error("key prefix cannot be empty")]
    Empty,

    #[error("key prefix cannot be absolute: {0:?}")]
    Absolute(String),

    #[error("key prefix cannot climb above the store root: {0:?}")]
    EscapesRoot(String),
}

/// Store-wide namespace for deployment records, stored in cleaned form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyPrefix(String);

impl KeyPrefix {
    pub fn new(value: &str) -> Result<Self, KeyPrefixError> {
        if value.starts_with('/') {
            return Err(KeyPrefixError::Absolute(value.to_string()));
        }

        let cleaned = clean_key(value);
        if cleaned == "." {
            return Err(KeyPrefixError::Empty);
        }
        if cleaned == ".." || cleaned.starts_with("../") {
            return Err(KeyPrefixError::EscapesRoot(value.to_string()));
        }

        Ok(Self(cleaned))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Key of the status record for `deployment_id`.
    pub fn status_key(&self, deployment_id: &str) -> String {
        join_key(&[&self.0, deployment_id, STATUS_SEGMENT])
    }
}

impl Default for KeyPrefix {
    fn default() -> Self {
        Self(DEFAULT_KEY_PREFIX.to_string())
    }
}

impl fmt::Display for KeyPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Join key segments with `/`, skipping empty ones, then clean the result.
pub fn join_key(segments: &[&str]) -> String {
    let joined = segments
        .iter()
        .filter(|s| !s.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join("/");
    if joined.is_empty() {
        return joined;
    }
    clean_key(&joined)
}

/// Lexically clean a slash-separated key.
///
/// Collapses repeated slashes, drops `.` segments, resolves `..` against the
/// preceding segment and removes any trailing slash. An empty result is `.`.
pub fn clean_key(key: &str) -> String {
    let rooted = key.starts_with('/');
    let mut out: Vec<&str> = Vec::new();

    for segment in key.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if out.last().is_some_and(|last| *last != "..") {
                    out.pop();
                } else if !rooted {
                    out.push("..");
                }
            }
            s => out.push(s),
        }
    }

    let body = out.join("/");
    if rooted {
        format!("/{body}")
    } else if body.is_empty() {
        ".".to_string()
    } else {
        body
    }
}
