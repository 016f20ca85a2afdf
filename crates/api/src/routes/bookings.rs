//! Admin booking route handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use domain::models::booking::{BookingInput, UpdateBookingStatusRequest};
use domain::models::{Booking, BulkDeleteRequest, BulkDeleteResponse};
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::routes::{with_notice, DeletedResponse, ListResponse, MutationResponse};

fn not_found(id: i64) -> ApiError {
    ApiError::NotFound(format!("Booking {} not found", id))
}

/// GET /api/v1/admin/bookings
pub async fn list_bookings(State(state): State<AppState>) -> Json<ListResponse<Booking>> {
    let store = state.store.lock().await;
    Json(ListResponse::new(store.bookings().to_vec()))
}

/// Create a booking. A supplied id is kept unless another booking has it.
///
/// POST /api/v1/admin/bookings
pub async fn create_booking(
    State(state): State<AppState>,
    Json(request): Json<BookingInput>,
) -> Result<(StatusCode, Json<MutationResponse<Booking>>), ApiError> {
    request.validate()?;

    let id = request.id.unwrap_or(0);
    let mut store = state.store.lock().await;
    let booking = store.add_booking(request.into_booking(id));
    info!(booking_id = booking.id, "Booking created");

    Ok((StatusCode::CREATED, with_notice(&state, booking)))
}

/// GET /api/v1/admin/bookings/:id
pub async fn get_booking(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Booking>, ApiError> {
    let store = state.store.lock().await;
    store
        .booking(id)
        .cloned()
        .map(Json)
        .ok_or_else(|| not_found(id))
}

/// PUT /api/v1/admin/bookings/:id
pub async fn update_booking(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<BookingInput>,
) -> Result<Json<MutationResponse<Booking>>, ApiError> {
    request.validate()?;

    let mut store = state.store.lock().await;
    if store.booking(id).is_none() {
        return Err(not_found(id));
    }
    let booking = request.into_booking(id);
    store.update_booking(booking.clone());

    Ok(with_notice(&state, booking))
}

/// PUT /api/v1/admin/bookings/:id/status
pub async fn update_booking_status(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateBookingStatusRequest>,
) -> Result<Json<MutationResponse<Booking>>, ApiError> {
    request.validate()?;

    let mut store = state.store.lock().await;
    if store.booking(id).is_none() {
        return Err(not_found(id));
    }
    store.update_booking_status(id, request.status);
    let booking = store.booking(id).cloned().ok_or_else(|| not_found(id))?;

    Ok(with_notice(&state, booking))
}

/// DELETE /api/v1/admin/bookings/:id
pub async fn delete_booking(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MutationResponse<DeletedResponse<i64>>>, ApiError> {
    let mut store = state.store.lock().await;
    if store.booking(id).is_none() {
        return Err(not_found(id));
    }
    store.delete_booking(id);
    info!(booking_id = id, "Booking deleted");

    Ok(with_notice(&state, DeletedResponse { id }))
}

/// POST /api/v1/admin/bookings/bulk-delete
pub async fn bulk_delete_bookings(
    State(state): State<AppState>,
    Json(request): Json<BulkDeleteRequest<i64>>,
) -> Json<MutationResponse<BulkDeleteResponse>> {
    let mut store = state.store.lock().await;
    let removed = store.delete_bookings(&request.ids);

    with_notice(
        &state,
        BulkDeleteResponse {
            requested: request.ids.len(),
            removed,
            remaining: store.bookings().len(),
        },
    )
}
