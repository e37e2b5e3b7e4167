//! `AuthUser` extractor — reads the identity injected by the upstream
//! gateway and builds the request context.
//!
//! Session/auth mechanics live outside this service: an authenticating
//! proxy validates the caller and forwards `x-user-id` and
//! `x-workspace-id` headers, which this extractor trusts.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use uuid::Uuid;

use linkhub_core::error::AppError;
use linkhub_service::context::RequestContext;

use crate::state::AppState;

/// Extracted authenticated identity available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl AuthUser {
    /// Returns the inner `RequestContext`.
    pub fn context(&self) -> &RequestContext {
        &self.0
    }
}

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

fn header_uuid(parts: &Parts, name: &str) -> Result<Uuid, AppError> {
    parts
        .headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::unauthorized(format!("Missing {name} header")))?
        .parse::<Uuid>()
        .map_err(|_| AppError::unauthorized(format!("Invalid {name} header")))
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user_id = header_uuid(parts, "x-user-id")?;
        let workspace_id = header_uuid(parts, "x-workspace-id")?;

        Ok(AuthUser(RequestContext::new(user_id, workspace_id)))
    }
}
