//! Admin team roster route handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use domain::models::team::TeamMemberInput;
use domain::models::{BulkDeleteRequest, BulkDeleteResponse, TeamMember};
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::routes::{with_notice, DeletedResponse, ListResponse, MutationResponse};

fn not_found(id: i64) -> ApiError {
    ApiError::NotFound(format!("Team member {} not found", id))
}

/// GET /api/v1/admin/team
pub async fn list_team(State(state): State<AppState>) -> Json<ListResponse<TeamMember>> {
    let store = state.store.lock().await;
    Json(ListResponse::new(store.team().to_vec()))
}

/// POST /api/v1/admin/team
pub async fn create_member(
    State(state): State<AppState>,
    Json(request): Json<TeamMemberInput>,
) -> Result<(StatusCode, Json<MutationResponse<TeamMember>>), ApiError> {
    request.validate()?;

    let mut store = state.store.lock().await;
    let member = store.add_team_member(request.into_member(0));

    Ok((StatusCode::CREATED, with_notice(&state, member)))
}

/// PUT /api/v1/admin/team/:id
pub async fn update_member(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<TeamMemberInput>,
) -> Result<Json<MutationResponse<TeamMember>>, ApiError> {
    request.validate()?;

    let mut store = state.store.lock().await;
    if store.team_member(id).is_none() {
        return Err(not_found(id));
    }
    let member = request.into_member(id);
    store.update_team_member(member.clone());

    Ok(with_notice(&state, member))
}

/// DELETE /api/v1/admin/team/:id
pub async fn delete_member(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MutationResponse<DeletedResponse<i64>>>, ApiError> {
    let mut store = state.store.lock().await;
    if store.team_member(id).is_none() {
        return Err(not_found(id));
    }
    store.delete_team_member(id);

    Ok(with_notice(&state, DeletedResponse { id }))
}

/// POST /api/v1/admin/team/bulk-delete
pub async fn bulk_delete_members(
    State(state): State<AppState>,
    Json(request): Json<BulkDeleteRequest<i64>>,
) -> Json<MutationResponse<BulkDeleteResponse>> {
    let mut store = state.store.lock().await;
    let removed = store.delete_team_members(&request.ids);

    with_notice(
        &state,
        BulkDeleteResponse {
            requested: request.ids.len(),
            removed,
            remaining: store.team().len(),
        },
    )
}
