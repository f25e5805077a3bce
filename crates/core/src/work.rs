//! Work models: the read projection and the write intents.
//!
//! [`Work`] is what searches return; it is immutable once loaded into a
//! view. [`WorkCreate`] and [`WorkEdit`] are the payloads sent back when
//! creating or updating a work. Field shapes mirror the backend wire
//! format exactly, including the flattened edit payload.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::ids::{AuthorId, WorkId};
use crate::tag::Tag;

/// Read projection of a stored work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Work {
    /// Path of the stored artifact, unique per work.
    pub path: String,
    pub work_id: WorkId,
    /// Size of the artifact in bytes.
    pub size: u64,
    pub title: Option<String>,
    /// `None` means the work is unattributed.
    pub author_id: Option<AuthorId>,
    pub caption: Option<String>,
    pub url: Option<String>,
    /// Content fingerprint used for change detection. Not guaranteed
    /// unique across renames.
    pub hash: i32,
}

/// Author payload embedded in a write intent.
///
/// Supplied fully at creation time rather than as a bare reference: the
/// backend resolves `id` when present, otherwise matches or creates an
/// author from `names` / `urls`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthorCreate {
    pub urls: Vec<String>,
    pub names: Vec<String>,
    pub id: Option<AuthorId>,
}

/// Write intent for a new work. Carries no identity; the backend assigns
/// the [`WorkId`] on creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkCreate {
    pub path: String,
    pub title: Option<String>,
    pub author: Option<AuthorCreate>,
    pub caption: Option<String>,
    pub url: Option<String>,
    pub tags: Vec<Tag>,
}

impl WorkCreate {
    /// Minimal create payload for the given path.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            title: None,
            author: None,
            caption: None,
            url: None,
            tags: Vec::new(),
        }
    }

    /// Client-side validation before the payload is submitted.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.path.trim().is_empty() {
            return Err(CoreError::Validation(
                "work path must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Update intent against an existing work: the full create payload plus
/// the identity it targets. Serialized flat, so the wire shape is the
/// create shape with a `work_id` field added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkEdit {
    #[serde(flatten)]
    pub create: WorkCreate,
    pub work_id: WorkId,
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    #[test]
    fn work_deserializes_from_backend_shape() {
        let work: Work = serde_json::from_value(json!({
            "path": "works/a.png",
            "work_id": 1,
            "size": 2048,
            "title": "Untitled",
            "author_id": null,
            "caption": null,
            "url": null,
            "hash": -77,
        }))
        .unwrap();

        assert_eq!(work.work_id, WorkId(1));
        assert_eq!(work.size, 2048);
        assert!(work.author_id.is_none());
    }

    #[test]
    fn work_edit_serializes_flat() {
        let edit = WorkEdit {
            create: WorkCreate::new("works/a.png"),
            work_id: WorkId(3),
        };

        let value = serde_json::to_value(&edit).unwrap();

        // The create payload is flattened next to work_id, not nested.
        assert_eq!(value["work_id"], json!(3));
        assert_eq!(value["path"], json!("works/a.png"));
        assert!(value.get("create").is_none());
    }

    #[test]
    fn validate_rejects_empty_path() {
        let create = WorkCreate::new("  ");
        assert_matches!(create.validate(), Err(CoreError::Validation(_)));
        assert!(WorkCreate::new("works/a.png").validate().is_ok());
    }
}
