//! Admin handlers for the notice board.

use axum::{extract::State, Json};
use domain::services::notification::ActiveNotice;
use serde::Serialize;

use crate::app::AppState;

#[derive(Debug, Serialize)]
pub struct DismissResponse {
    pub dismissed: bool,
}

/// The notice on display, or `null` once it has been dismissed or expired.
///
/// GET /api/v1/admin/notification
pub async fn current_notice(State(state): State<AppState>) -> Json<Option<ActiveNotice>> {
    Json(state.toasts.current())
}

/// DELETE /api/v1/admin/notification
pub async fn dismiss_notice(State(state): State<AppState>) -> Json<DismissResponse> {
    Json(DismissResponse {
        dismissed: state.toasts.dismiss(),
    })
}
