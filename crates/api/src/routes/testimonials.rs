//! Admin testimonial moderation route handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use domain::models::testimonial::{NewTestimonialRequest, UpdateTestimonialStatusRequest};
use domain::models::{BulkDeleteRequest, BulkDeleteResponse, Testimonial};
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::routes::{with_notice, DeletedResponse, ListResponse, MutationResponse};

fn not_found(id: i64) -> ApiError {
    ApiError::NotFound(format!("Testimonial {} not found", id))
}

/// Every testimonial regardless of status.
///
/// GET /api/v1/admin/testimonials
pub async fn list_testimonials(
    State(state): State<AppState>,
) -> Json<ListResponse<Testimonial>> {
    let store = state.store.lock().await;
    Json(ListResponse::new(store.testimonials().to_vec()))
}

/// Record a testimonial on a client's behalf. It starts out Pending.
///
/// POST /api/v1/admin/testimonials
pub async fn create_testimonial(
    State(state): State<AppState>,
    Json(request): Json<NewTestimonialRequest>,
) -> Result<(StatusCode, Json<MutationResponse<Testimonial>>), ApiError> {
    request.validate()?;

    let mut store = state.store.lock().await;
    let testimonial = store.add_testimonial(request.into_testimonial());

    Ok((StatusCode::CREATED, with_notice(&state, testimonial)))
}

/// Edit a testimonial's details. The moderation status is left as it was.
///
/// PUT /api/v1/admin/testimonials/:id
pub async fn update_testimonial(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<NewTestimonialRequest>,
) -> Result<Json<MutationResponse<Testimonial>>, ApiError> {
    request.validate()?;

    let mut store = state.store.lock().await;
    let status = match store.testimonial(id) {
        Some(existing) => existing.status.clone(),
        None => return Err(not_found(id)),
    };
    let testimonial = request.into_existing(id, status);
    store.update_testimonial(testimonial.clone());

    Ok(with_notice(&state, testimonial))
}

/// Approve or reject a testimonial.
///
/// PUT /api/v1/admin/testimonials/:id/status
pub async fn update_testimonial_status(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateTestimonialStatusRequest>,
) -> Result<Json<MutationResponse<Testimonial>>, ApiError> {
    request.validate()?;

    let mut store = state.store.lock().await;
    if store.testimonial(id).is_none() {
        return Err(not_found(id));
    }
    info!(testimonial_id = id, status = %request.status, "Testimonial moderated");
    store.update_testimonial_status(id, request.status);
    let testimonial = store.testimonial(id).cloned().ok_or_else(|| not_found(id))?;

    Ok(with_notice(&state, testimonial))
}

/// DELETE /api/v1/admin/testimonials/:id
pub async fn delete_testimonial(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MutationResponse<DeletedResponse<i64>>>, ApiError> {
    let mut store = state.store.lock().await;
    if store.testimonial(id).is_none() {
        return Err(not_found(id));
    }
    store.delete_testimonial(id);

    Ok(with_notice(&state, DeletedResponse { id }))
}

/// POST /api/v1/admin/testimonials/bulk-delete
pub async fn bulk_delete_testimonials(
    State(state): State<AppState>,
    Json(request): Json<BulkDeleteRequest<i64>>,
) -> Json<MutationResponse<BulkDeleteResponse>> {
    let mut store = state.store.lock().await;
    let removed = store.delete_testimonials(&request.ids);

    with_notice(
        &state,
        BulkDeleteResponse {
            requested: request.ids.len(),
            removed,
            remaining: store.testimonials().len(),
        },
    )
}
