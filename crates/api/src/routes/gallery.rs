//! Admin gallery route handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use domain::models::gallery::{GalleryQuery, NewGalleryImageRequest};
use domain::models::{BulkDeleteRequest, BulkDeleteResponse, GalleryImage};
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::routes::{with_notice, DeletedResponse, ListResponse, MutationResponse};

/// List gallery images, newest first.
///
/// GET /api/v1/admin/gallery?category=
pub async fn list_images(
    State(state): State<AppState>,
    Query(query): Query<GalleryQuery>,
) -> Json<ListResponse<GalleryImage>> {
    let store = state.store.lock().await;
    Json(ListResponse::new(store.gallery_by_category(&query.category)))
}

/// POST /api/v1/admin/gallery
pub async fn upload_image(
    State(state): State<AppState>,
    Json(request): Json<NewGalleryImageRequest>,
) -> Result<(StatusCode, Json<MutationResponse<GalleryImage>>), ApiError> {
    request.validate()?;

    let mut store = state.store.lock().await;
    let image = store.add_gallery_image(request.into_image());
    info!(image_id = image.id, category = %image.category, "Gallery image uploaded");

    Ok((StatusCode::CREATED, with_notice(&state, image)))
}

/// Edit an image's title, category or source.
///
/// PUT /api/v1/admin/gallery/:id
pub async fn update_image(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<NewGalleryImageRequest>,
) -> Result<Json<MutationResponse<GalleryImage>>, ApiError> {
    request.validate()?;

    let mut store = state.store.lock().await;
    if store.gallery_image(id).is_none() {
        return Err(ApiError::NotFound(format!("Image {} not found", id)));
    }
    let image = request.into_image_with_id(id);
    store.update_gallery_image(image.clone());

    Ok(with_notice(&state, image))
}

/// DELETE /api/v1/admin/gallery/:id
pub async fn delete_image(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MutationResponse<DeletedResponse<i64>>>, ApiError> {
    let mut store = state.store.lock().await;
    if store.gallery_image(id).is_none() {
        return Err(ApiError::NotFound(format!("Image {} not found", id)));
    }
    store.delete_gallery_image(id);

    Ok(with_notice(&state, DeletedResponse { id }))
}

/// POST /api/v1/admin/gallery/bulk-delete
pub async fn bulk_delete_images(
    State(state): State<AppState>,
    Json(request): Json<BulkDeleteRequest<i64>>,
) -> Json<MutationResponse<BulkDeleteResponse>> {
    let mut store = state.store.lock().await;
    let removed = store.delete_gallery_images(&request.ids);

    with_notice(
        &state,
        BulkDeleteResponse {
            requested: request.ids.len(),
            removed,
            remaining: store.gallery().len(),
        },
    )
}
