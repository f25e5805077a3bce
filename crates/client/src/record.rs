//! One-shot record loading and editing.
//!
//! [`RecordLoader`] is the boundary a routing layer calls when navigating
//! to a single work: fetch the editable payload by id, or submit a
//! create/edit intent. Unlike the search path, failures here are
//! terminal for the operation and surface as status-coded
//! [`LoadError`]s. Identifiers arriving as route parameters are parsed
//! client-side; non-numeric input never reaches the backend.

use std::sync::Arc;

use curio_core::{normalize_tags, parse_work_id, WorkCreate, WorkEdit, WorkId};
use curio_gateway::{ops, Gateway};

use crate::error::LoadError;

/// Loads and edits single work records through the gateway.
pub struct RecordLoader {
    gateway: Arc<dyn Gateway>,
}

impl RecordLoader {
    pub fn new(gateway: Arc<dyn Gateway>) -> Self {
        Self { gateway }
    }

    /// Load the editable payload for a work identified by a raw route
    /// parameter.
    ///
    /// Non-numeric input fails fast with status 400; the backend is not
    /// invoked. Any backend failure (including an unknown id) surfaces
    /// as status 500 with the backend's message.
    pub async fn load(&self, raw_id: &str) -> Result<WorkEdit, LoadError> {
        let id = parse_work_id(raw_id)?;
        self.load_by_id(id).await
    }

    /// Load the editable payload for an already-parsed work id.
    pub async fn load_by_id(&self, id: WorkId) -> Result<WorkEdit, LoadError> {
        ops::get_work_edit_by_id(self.gateway.as_ref(), id)
            .await
            .map_err(|error| {
                tracing::error!(%id, %error, "failed to load work record");
                LoadError::from(error)
            })
    }

    /// Submit a create intent. Tags are collapsed to a set before
    /// submission; the backend assigns and returns the new id.
    pub async fn create(&self, work: &WorkCreate) -> Result<WorkId, LoadError> {
        work.validate()?;

        let mut payload = work.clone();
        payload.tags = normalize_tags(payload.tags);

        ops::create_work(self.gateway.as_ref(), &payload)
            .await
            .map_err(|error| {
                tracing::error!(path = %work.path, %error, "failed to create work");
                LoadError::from(error)
            })
    }

    /// Submit an edit intent against an existing work.
    ///
    /// A `work_id` that references no existing work is a backend
    /// not-found condition and surfaces as status 500 like any other
    /// backend failure.
    pub async fn save(&self, edit: &WorkEdit) -> Result<(), LoadError> {
        edit.create.validate()?;

        let mut payload = edit.clone();
        payload.create.tags = normalize_tags(payload.create.tags);

        ops::edit_work(self.gateway.as_ref(), &payload)
            .await
            .map_err(|error| {
                tracing::error!(id = %edit.work_id, %error, "failed to save work edit");
                LoadError::from(error)
            })
    }
}
