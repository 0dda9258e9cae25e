use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use sqlx::PgPool;

use crate::db::repository::Page;
use crate::models::participation_status::{
    self, ParticipationStatusPayload, ParticipationStatusRow,
};
use crate::response::{ApiResponse, ApiResult};

#[derive(Debug, Deserialize)]
pub struct StatusListQuery {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
    pub eventid: Option<i32>,
}

/// GET /v1/participation-status/:id
pub async fn get_by_id(
    State(pool): State<PgPool>,
    Path(id): Path<i32>,
) -> ApiResult<ParticipationStatusRow> {
    let row = participation_status::repository(pool)
        .fetch_by("id", id.into())
        .await?;
    Ok(ApiResponse::ok("Fetched!", row))
}

/// GET /v1/participation-statuses?skip=&limit=&eventid=
pub async fn list(
    State(pool): State<PgPool>,
    Query(query): Query<StatusListQuery>,
) -> ApiResult<Vec<ParticipationStatusRow>> {
    let filter = query.eventid.map(|event_id| ("event_id", event_id.into()));
    let rows = participation_status::repository(pool)
        .list(
            Page::new(query.skip, query.limit),
            filter,
            Some("created_at asc"),
        )
        .await?;
    Ok(ApiResponse::ok("Fetched!", rows))
}

/// POST /v1/participation-status
pub async fn create(
    State(pool): State<PgPool>,
    Json(payload): Json<ParticipationStatusPayload>,
) -> ApiResult<ParticipationStatusPayload> {
    payload.validate_create()?;
    participation_status::repository(pool)
        .insert(payload.field_set())
        .await?;
    Ok(ApiResponse::created(
        "Created new participation status!",
        payload,
    ))
}

/// PATCH /v1/participation-status/:id
pub async fn update_by_id(
    State(pool): State<PgPool>,
    Path(id): Path<i32>,
    Json(payload): Json<ParticipationStatusPayload>,
) -> ApiResult<ParticipationStatusPayload> {
    participation_status::repository(pool)
        .update_by("id", id.into(), payload.field_set())
        .await?;
    Ok(ApiResponse::ok(
        "Participation status updated successfully",
        payload,
    ))
}

/// DELETE /v1/participation-status/:id
pub async fn delete_by_id(State(pool): State<PgPool>, Path(id): Path<i32>) -> ApiResult<()> {
    participation_status::repository(pool)
        .delete_by("id", id.into())
        .await?;
    Ok(ApiResponse::message_only(
        "Participation status deleted successfully!",
    ))
}
