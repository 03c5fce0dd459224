//! Generic write actions
//!
//! The two verbs every create/update/delete UI flow goes through. Both
//! normalize gateway errors into a uniform success/message outcome so the
//! presentation layer never handles exceptions, and both invalidate the
//! caller's cached view path after a successful write.

use kivu_domain::{KivuError, Record};
use serde::Serialize;
use tracing::warn;

use crate::ports::{CacheInvalidator, ErpGateway};

const MSG_CREATED: &str = "Record created successfully.";
const MSG_UPDATED: &str = "Changes saved.";
const MSG_DELETED: &str = "Record deleted.";
const MSG_SAVE_FAILED: &str = "Could not save the record.";
const MSG_DELETE_FAILED: &str = "Delete failed.";
const MSG_DELETE_RESTRICTED: &str =
    "Cannot delete: this record is still linked to other documents.";

/// Uniform result of a write action, serialized as-is to the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionOutcome {
    pub success: bool,
    pub message: String,
}

impl ActionOutcome {
    fn ok(message: &str) -> Self {
        Self { success: true, message: message.to_string() }
    }

    fn fail(message: &str) -> Self {
        Self { success: false, message: message.to_string() }
    }
}

/// Create or update a record, dispatching on the presence of `id`.
pub async fn save_record(
    gateway: &dyn ErpGateway,
    invalidator: &dyn CacheInvalidator,
    model: &str,
    values: Record,
    view_path: &str,
    id: Option<i64>,
) -> ActionOutcome {
    let result = match id {
        Some(id) => gateway.update(model, id, values).await.map(|_| MSG_UPDATED),
        None => gateway.create(model, values).await.map(|_| MSG_CREATED),
    };

    match result {
        Ok(message) => {
            invalidator.invalidate(view_path);
            ActionOutcome::ok(message)
        }
        Err(error) => {
            warn!(model, %error, "save action failed");
            ActionOutcome::fail(MSG_SAVE_FAILED)
        }
    }
}

/// Delete a record. A referential-restrict refusal gets its own user-facing
/// message; every other failure collapses into the generic one.
pub async fn delete_record(
    gateway: &dyn ErpGateway,
    invalidator: &dyn CacheInvalidator,
    model: &str,
    id: i64,
    view_path: &str,
) -> ActionOutcome {
    match gateway.delete(model, id).await {
        Ok(_) => {
            invalidator.invalidate(view_path);
            ActionOutcome::ok(MSG_DELETED)
        }
        Err(KivuError::RestrictViolation(detail)) => {
            warn!(model, id, detail, "delete blocked by referential restriction");
            ActionOutcome::fail(MSG_DELETE_RESTRICTED)
        }
        Err(error) => {
            warn!(model, id, %error, "delete action failed");
            ActionOutcome::fail(MSG_DELETE_FAILED)
        }
    }
}
