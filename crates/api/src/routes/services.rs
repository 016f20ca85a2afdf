//! Admin service catalogue route handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use domain::models::service::ServiceInput;
use domain::models::{BulkDeleteRequest, BulkDeleteResponse, Service};
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::routes::{with_notice, DeletedResponse, ListResponse, MutationResponse};

pub(crate) fn not_found(id: &str) -> ApiError {
    ApiError::NotFound(format!("Service {} not found", id))
}

/// GET /api/v1/admin/services
pub async fn list_services(State(state): State<AppState>) -> Json<ListResponse<Service>> {
    let store = state.store.lock().await;
    Json(ListResponse::new(store.services().to_vec()))
}

/// Add a service. Without an id (or with a taken one) a new id is generated.
///
/// POST /api/v1/admin/services
pub async fn create_service(
    State(state): State<AppState>,
    Json(mut request): Json<ServiceInput>,
) -> Result<(StatusCode, Json<MutationResponse<Service>>), ApiError> {
    request.validate()?;

    let id = request.id.take().unwrap_or_default();
    let mut store = state.store.lock().await;
    let service = store.add_service(request.into_service(id));
    info!(service_id = %service.id, "Service created");

    Ok((StatusCode::CREATED, with_notice(&state, service)))
}

/// GET /api/v1/admin/services/:id
pub async fn get_service(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Service>, ApiError> {
    let store = state.store.lock().await;
    store
        .service(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| not_found(&id))
}

/// PUT /api/v1/admin/services/:id
pub async fn update_service(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<ServiceInput>,
) -> Result<Json<MutationResponse<Service>>, ApiError> {
    request.validate()?;

    let mut store = state.store.lock().await;
    if store.service(&id).is_none() {
        return Err(not_found(&id));
    }
    let service = request.into_service(id);
    store.update_service(service.clone());

    Ok(with_notice(&state, service))
}

/// DELETE /api/v1/admin/services/:id
pub async fn delete_service(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MutationResponse<DeletedResponse<String>>>, ApiError> {
    let mut store = state.store.lock().await;
    if store.service(&id).is_none() {
        return Err(not_found(&id));
    }
    store.delete_service(&id);
    info!(service_id = %id, "Service deleted");

    Ok(with_notice(&state, DeletedResponse { id }))
}

/// POST /api/v1/admin/services/bulk-delete
pub async fn bulk_delete_services(
    State(state): State<AppState>,
    Json(request): Json<BulkDeleteRequest<String>>,
) -> Json<MutationResponse<BulkDeleteResponse>> {
    let mut store = state.store.lock().await;
    let removed = store.delete_services(&request.ids);

    with_notice(
        &state,
        BulkDeleteResponse {
            requested: request.ids.len(),
            removed,
            remaining: store.services().len(),
        },
    )
}
