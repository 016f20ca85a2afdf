//! Admin dashboard route handler.

use axum::{extract::State, Json};
use domain::services::DashboardStats;

use crate::app::AppState;

/// Summary counters and the most recent inquiries.
///
/// GET /api/v1/admin
pub async fn get_dashboard(State(state): State<AppState>) -> Json<DashboardStats> {
    let store = state.store.lock().await;
    Json(store.dashboard())
}
