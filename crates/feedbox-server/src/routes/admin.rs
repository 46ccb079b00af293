use axum::extract::State;
use axum::Json;
use serde::Serialize;

use feedbox_audit::events::AuditEvent;
use feedbox_auth::credentials::Credentials;
use feedbox_auth::flows::{self, AuthResult};

use crate::error::ApiError;
use crate::extract::Json as ApiJson;
use crate::state::AppState;

#[derive(Serialize)]
pub struct LoginResponse {
    pub authenticated: bool,
    pub token: String,
    pub expires_at: jiff::Timestamp,
}

pub async fn login(
    State(state): State<AppState>,
    ApiJson(credentials): ApiJson<Credentials>,
) -> Result<Json<LoginResponse>, ApiError> {
    let result = flows::login(
        state.verifier.as_ref(),
        &state.keys,
        &credentials,
        jiff::Timestamp::now(),
    )?;

    AuditEvent::admin_login(&credentials.username, result.is_authenticated()).emit();

    match result {
        AuthResult::Authenticated { session } => Ok(Json(LoginResponse {
            authenticated: true,
            token: session.token,
            expires_at: session.expires_at,
        })),
        AuthResult::Rejected => Err(ApiError::Unauthorized(
            "invalid username or password".to_string(),
        )),
    }
}
