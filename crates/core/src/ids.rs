//! Typed entity ids.
//!
//! Every id is a thin newtype over `i64` (the backend's primary key type)
//! so that a [`WorkId`] can never be passed where an [`AuthorId`] is
//! expected. Serialization is transparent: ids travel as bare integers.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Identity of a stored work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkId(pub i64);

/// Identity of an author.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthorId(pub i64);

/// Identity of a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagId(pub i64);

impl std::fmt::Display for WorkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for AuthorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for TagId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parse a work id from untrusted text (typically a route parameter).
///
/// Rejects anything that is not a plain base-10 integer before the value
/// can reach the backend.
pub fn parse_work_id(raw: &str) -> Result<WorkId, CoreError> {
    raw.trim()
        .parse::<i64>()
        .map(WorkId)
        .map_err(|_| CoreError::InvalidId {
            raw: raw.to_string(),
        })
}
