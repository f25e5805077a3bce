//! Typed wrappers for the remote operations.
//!
//! Each wrapper encodes the argument bag the backend expects, invokes
//! the operation through the [`Gateway`], and decodes the raw JSON
//! result into the domain type. Argument keys and operation names are
//! part of the wire contract and must match the backend exactly.

use curio_core::{Work, WorkCreate, WorkEdit, WorkId};
use serde_json::json;

use crate::error::GatewayError;
use crate::Gateway;

/// Run a search. The query is forwarded verbatim; the empty string's
/// semantics (return all vs return none) are owned by the backend.
pub async fn work_query(gateway: &dyn Gateway, query: &str) -> Result<Vec<Work>, GatewayError> {
    let result = gateway
        .invoke("work_query", json!({ "query": query }))
        .await?;

    Ok(serde_json::from_value(result)?)
}

/// Fetch the full editable payload for an existing work.
///
/// A missing id is a backend failure, not a client-side concern.
pub async fn get_work_edit_by_id(
    gateway: &dyn Gateway,
    id: WorkId,
) -> Result<WorkEdit, GatewayError> {
    let result = gateway
        .invoke("get_work_edit_by_id", json!({ "id": id }))
        .await?;

    Ok(serde_json::from_value(result)?)
}

/// Create a new work; the backend assigns and returns its id.
pub async fn create_work(
    gateway: &dyn Gateway,
    work: &WorkCreate,
) -> Result<WorkId, GatewayError> {
    let result = gateway
        .invoke("create_work", json!({ "work_create": work }))
        .await?;

    Ok(serde_json::from_value(result)?)
}

/// Update an existing work with a full edit payload.
pub async fn edit_work(gateway: &dyn Gateway, edit: &WorkEdit) -> Result<(), GatewayError> {
    gateway
        .invoke("edit_work", json!({ "work_edit": edit }))
        .await?;

    Ok(())
}
