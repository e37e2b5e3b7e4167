//! Request context carrying the authenticated identity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Context for the current authenticated request.
///
/// Supplied by the out-of-scope session/auth layer and passed into service
/// methods so that every operation knows *who* is acting in *which*
/// workspace. All queries are scoped to this pair; no operation ever
/// reaches across workspaces.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: Uuid,
    /// The workspace the request operates on.
    pub workspace_id: Uuid,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user_id: Uuid, workspace_id: Uuid) -> Self {
        Self {
            user_id,
            workspace_id,
            request_time: Utc::now(),
        }
    }
}
