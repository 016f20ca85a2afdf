//! Admin handlers for the two singleton records: about-page content and
//! site settings.

use axum::{extract::State, Json};
use domain::models::{AboutData, SiteSettings};
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::routes::{with_notice, MutationResponse};

/// GET /api/v1/admin/about
pub async fn get_about(State(state): State<AppState>) -> Json<AboutData> {
    let store = state.store.lock().await;
    Json(store.about().clone())
}

/// Overwrite the about-page content.
///
/// PUT /api/v1/admin/about
pub async fn update_about(
    State(state): State<AppState>,
    Json(request): Json<AboutData>,
) -> Result<Json<MutationResponse<AboutData>>, ApiError> {
    request.validate()?;

    let mut store = state.store.lock().await;
    store.update_about(request.clone());
    info!("About page content updated");

    Ok(with_notice(&state, request))
}

/// GET /api/v1/admin/settings
pub async fn get_settings(State(state): State<AppState>) -> Json<SiteSettings> {
    let store = state.store.lock().await;
    Json(store.settings().clone())
}

/// Overwrite the site settings.
///
/// PUT /api/v1/admin/settings
pub async fn update_settings(
    State(state): State<AppState>,
    Json(request): Json<SiteSettings>,
) -> Result<Json<MutationResponse<SiteSettings>>, ApiError> {
    request.validate()?;

    let mut store = state.store.lock().await;
    store.update_settings(request.clone());
    info!(company = %request.company_name, "Site settings updated");

    Ok(with_notice(&state, request))
}
