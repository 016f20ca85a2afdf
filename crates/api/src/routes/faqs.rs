//! Admin FAQ route handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use domain::models::faq::FaqInput;
use domain::models::{BulkDeleteRequest, BulkDeleteResponse, Faq};
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::routes::{with_notice, DeletedResponse, ListResponse, MutationResponse};

fn not_found(id: i64) -> ApiError {
    ApiError::NotFound(format!("FAQ {} not found", id))
}

/// GET /api/v1/admin/faqs
pub async fn list_faqs(State(state): State<AppState>) -> Json<ListResponse<Faq>> {
    let store = state.store.lock().await;
    Json(ListResponse::new(store.faqs().to_vec()))
}

/// POST /api/v1/admin/faqs
pub async fn create_faq(
    State(state): State<AppState>,
    Json(request): Json<FaqInput>,
) -> Result<(StatusCode, Json<MutationResponse<Faq>>), ApiError> {
    request.validate()?;

    let mut store = state.store.lock().await;
    let faq = store.add_faq(request.into_faq(0));

    Ok((StatusCode::CREATED, with_notice(&state, faq)))
}

/// PUT /api/v1/admin/faqs/:id
pub async fn update_faq(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<FaqInput>,
) -> Result<Json<MutationResponse<Faq>>, ApiError> {
    request.validate()?;

    let mut store = state.store.lock().await;
    if store.faq(id).is_none() {
        return Err(not_found(id));
    }
    let faq = request.into_faq(id);
    store.update_faq(faq.clone());

    Ok(with_notice(&state, faq))
}

/// DELETE /api/v1/admin/faqs/:id
pub async fn delete_faq(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MutationResponse<DeletedResponse<i64>>>, ApiError> {
    let mut store = state.store.lock().await;
    if store.faq(id).is_none() {
        return Err(not_found(id));
    }
    store.delete_faq(id);

    Ok(with_notice(&state, DeletedResponse { id }))
}

/// POST /api/v1/admin/faqs/bulk-delete
pub async fn bulk_delete_faqs(
    State(state): State<AppState>,
    Json(request): Json<BulkDeleteRequest<i64>>,
) -> Json<MutationResponse<BulkDeleteResponse>> {
    let mut store = state.store.lock().await;
    let removed = store.delete_faqs(&request.ids);

    with_notice(
        &state,
        BulkDeleteResponse {
            requested: request.ids.len(),
            removed,
            remaining: store.faqs().len(),
        },
    )
}
