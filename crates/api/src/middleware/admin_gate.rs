//! Admin route gate.
//!
//! Admin routes are served only while the access gate's flag is set. Anything
//! else is sent to the login screen.

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tracing::debug;

use crate::app::AppState;
use crate::middleware::trace_id::get_request_id;

/// Where unauthenticated admin requests are redirected.
pub const LOGIN_PATH: &str = "/api/v1/admin/login";

/// Middleware that redirects (303 See Other) to [`LOGIN_PATH`] unless an admin
/// is logged in.
pub async fn require_admin_session(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    if state.gate.is_authenticated() {
        return next.run(req).await;
    }

    debug!(
        request_id = %get_request_id(req.extensions()),
        path = %req.uri().path(),
        "Admin route requested without a session, redirecting to login"
    );
    Redirect::to(LOGIN_PATH).into_response()
}
