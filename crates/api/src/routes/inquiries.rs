//! Admin inquiry (lead) route handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use domain::models::inquiry::{
    InquiryInput, ListInquiriesQuery, UpdateInquiryStatusRequest,
};
use domain::models::{BulkDeleteRequest, BulkDeleteResponse, Inquiry};
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::routes::{with_notice, DeletedResponse, ListResponse, MutationResponse};

fn not_found(id: i64) -> ApiError {
    ApiError::NotFound(format!("Inquiry {} not found", id))
}

/// List inquiries, optionally filtered by name or event type.
///
/// GET /api/v1/admin/inquiries?search=
pub async fn list_inquiries(
    State(state): State<AppState>,
    Query(query): Query<ListInquiriesQuery>,
) -> Json<ListResponse<Inquiry>> {
    let store = state.store.lock().await;
    let items = match query.search.as_deref() {
        Some(term) => store.search_inquiries(term),
        None => store.inquiries().to_vec(),
    };
    Json(ListResponse::new(items))
}

/// Add an inquiry by hand.
///
/// POST /api/v1/admin/inquiries
pub async fn create_inquiry(
    State(state): State<AppState>,
    Json(request): Json<InquiryInput>,
) -> Result<(StatusCode, Json<MutationResponse<Inquiry>>), ApiError> {
    request.validate()?;

    let mut store = state.store.lock().await;
    let inquiry = store.add_inquiry(request.into_inquiry(0));
    info!(inquiry_id = inquiry.id, "Inquiry created");

    Ok((StatusCode::CREATED, with_notice(&state, inquiry)))
}

/// GET /api/v1/admin/inquiries/:id
pub async fn get_inquiry(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Inquiry>, ApiError> {
    let store = state.store.lock().await;
    store
        .inquiry(id)
        .cloned()
        .map(Json)
        .ok_or_else(|| not_found(id))
}

/// Replace every field of an inquiry.
///
/// PUT /api/v1/admin/inquiries/:id
pub async fn update_inquiry(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<InquiryInput>,
) -> Result<Json<MutationResponse<Inquiry>>, ApiError> {
    request.validate()?;

    let mut store = state.store.lock().await;
    if store.inquiry(id).is_none() {
        return Err(not_found(id));
    }
    let inquiry = request.into_inquiry(id);
    store.update_inquiry(inquiry.clone());

    Ok(with_notice(&state, inquiry))
}

/// Move an inquiry to another pipeline stage.
///
/// PUT /api/v1/admin/inquiries/:id/status
pub async fn update_inquiry_status(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateInquiryStatusRequest>,
) -> Result<Json<MutationResponse<Inquiry>>, ApiError> {
    request.validate()?;

    let mut store = state.store.lock().await;
    if store.inquiry(id).is_none() {
        return Err(not_found(id));
    }
    store.update_inquiry_status(id, request.status);
    let inquiry = store.inquiry(id).cloned().ok_or_else(|| not_found(id))?;

    Ok(with_notice(&state, inquiry))
}

/// DELETE /api/v1/admin/inquiries/:id
pub async fn delete_inquiry(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MutationResponse<DeletedResponse<i64>>>, ApiError> {
    let mut store = state.store.lock().await;
    if store.inquiry(id).is_none() {
        return Err(not_found(id));
    }
    store.delete_inquiry(id);
    info!(inquiry_id = id, "Inquiry deleted");

    Ok(with_notice(&state, DeletedResponse { id }))
}

/// Remove every listed inquiry; unknown ids are ignored.
///
/// POST /api/v1/admin/inquiries/bulk-delete
pub async fn bulk_delete_inquiries(
    State(state): State<AppState>,
    Json(request): Json<BulkDeleteRequest<i64>>,
) -> Json<MutationResponse<BulkDeleteResponse>> {
    let mut store = state.store.lock().await;
    let removed = store.delete_inquiries(&request.ids);
    info!(requested = request.ids.len(), removed, "Inquiries bulk deleted");

    with_notice(
        &state,
        BulkDeleteResponse {
            requested: request.ids.len(),
            removed,
            remaining: store.inquiries().len(),
        },
    )
}
