use axum::extract::{Path, Query, State};
use axum::Json;
use sqlx::PgPool;

use super::ListQuery;
use crate::db::repository::Page;
use crate::models::participation_option::{
    self, ParticipationOptionPayload, ParticipationOptionRow,
};
use crate::response::{ApiResponse, ApiResult};

/// GET /v1/participation-option/:name
pub async fn get_by_name(
    State(pool): State<PgPool>,
    Path(name): Path<String>,
) -> ApiResult<ParticipationOptionRow> {
    let row = participation_option::repository(pool)
        .fetch_by("name", name.into())
        .await?;
    Ok(ApiResponse::ok("Fetched!", row))
}

/// GET /v1/participation-options
pub async fn list(
    State(pool): State<PgPool>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Vec<ParticipationOptionRow>> {
    let rows = participation_option::repository(pool)
        .list(Page::new(query.skip, query.limit), None, None)
        .await?;
    Ok(ApiResponse::ok("Fetched!", rows))
}

/// POST /v1/participation-option
pub async fn create(
    State(pool): State<PgPool>,
    Json(payload): Json<ParticipationOptionPayload>,
) -> ApiResult<ParticipationOptionPayload> {
    payload.validate_create()?;
    participation_option::repository(pool)
        .insert(payload.field_set())
        .await?;
    Ok(ApiResponse::created(
        "Created new participation option!",
        payload,
    ))
}

/// PATCH /v1/participation-option/:name
pub async fn update_by_name(
    State(pool): State<PgPool>,
    Path(name): Path<String>,
    Json(payload): Json<ParticipationOptionPayload>,
) -> ApiResult<ParticipationOptionPayload> {
    participation_option::repository(pool)
        .update_by("name", name.into(), payload.field_set())
        .await?;
    Ok(ApiResponse::ok(
        "Participation option updated successfully",
        payload,
    ))
}

/// DELETE /v1/participation-option/:name
pub async fn delete_by_name(State(pool): State<PgPool>, Path(name): Path<String>) -> ApiResult<()> {
    participation_option::repository(pool)
        .delete_by("name", name.into())
        .await?;
    Ok(ApiResponse::message_only(
        "Participation option deleted successfully!",
    ))
}
