use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use crate::error::ApiError;
use crate::state::AppState;

/// Session token middleware for admin routes.
///
/// Extracts the `Authorization: Bearer <token>` header and validates the
/// session JWT. On success, inserts [`AuthUser`] into request extensions
/// for handlers to use.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let sub = {
        let auth_header = req
            .headers()
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| ApiError::Unauthorized("missing authorization header".to_string()))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ApiError::Unauthorized("expected a bearer token".to_string()))?;

        let claims = state.keys.validate(token).map_err(|e| {
            tracing::debug!("rejected session token: {e}");
            ApiError::from(e)
        })?;
        claims.sub
    };

    req.extensions_mut().insert(AuthUser { sub });

    Ok(next.run(req).await)
}

/// Authenticated admin extracted from the session token.
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub sub: String,
}
