//! Admin login, logout and session status handlers.
//!
//! These routes stay reachable without the admin flag; everything else under
//! `/api/v1/admin` is gated by [`crate::middleware::require_admin_session`].

use axum::{extract::State, Json};
use domain::services::access::{LoginRequest, INVALID_CREDENTIALS_MESSAGE};
use serde::Serialize;
use tracing::info;

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::metrics::record_login_attempt;
use crate::middleware::LOGIN_PATH;

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub authenticated: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginScreenResponse {
    pub authenticated: bool,
    pub login_path: &'static str,
    pub fields: [&'static str; 2],
}

/// GET /api/v1/admin/login
pub async fn login_screen(State(state): State<AppState>) -> Json<LoginScreenResponse> {
    Json(LoginScreenResponse {
        authenticated: state.gate.is_authenticated(),
        login_path: LOGIN_PATH,
        fields: ["email", "password"],
    })
}

/// Sets the admin flag when the credentials match exactly.
///
/// POST /api/v1/admin/login
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<SessionResponse>, ApiError> {
    let accepted = state.gate.login(&request.email, &request.password);
    record_login_attempt(accepted);

    if !accepted {
        return Err(ApiError::Unauthorized(
            INVALID_CREDENTIALS_MESSAGE.to_string(),
        ));
    }

    Ok(Json(SessionResponse {
        authenticated: true,
    }))
}

/// POST /api/v1/admin/logout
pub async fn logout(State(state): State<AppState>) -> Json<SessionResponse> {
    state.gate.logout();
    info!("Admin session cleared");
    Json(SessionResponse {
        authenticated: false,
    })
}

/// GET /api/v1/admin/session
pub async fn get_session(State(state): State<AppState>) -> Json<SessionResponse> {
    Json(SessionResponse {
        authenticated: state.gate.is_authenticated(),
    })
}
