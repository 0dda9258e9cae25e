use axum::extract::{Path, Query, State};
use axum::Json;
use sqlx::PgPool;

use super::ListQuery;
use crate::db::repository::Page;
use crate::models::broadcast_url::{self, BroadcastUrlPayload, BroadcastUrlRow};
use crate::response::{ApiResponse, ApiResult};

/// GET /v1/broadcasturl/:id
pub async fn get_by_id(
    State(pool): State<PgPool>,
    Path(id): Path<i32>,
) -> ApiResult<BroadcastUrlRow> {
    let row = broadcast_url::repository(pool)
        .fetch_by("id", id.into())
        .await?;
    Ok(ApiResponse::ok("Fetched!", row))
}

/// GET /v1/broadcasturls
pub async fn list(
    State(pool): State<PgPool>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Vec<BroadcastUrlRow>> {
    let rows = broadcast_url::repository(pool)
        .list(Page::new(query.skip, query.limit), None, None)
        .await?;
    Ok(ApiResponse::ok("Fetched!", rows))
}

/// POST /v1/broadcasturl
pub async fn create(
    State(pool): State<PgPool>,
    Json(payload): Json<BroadcastUrlPayload>,
) -> ApiResult<BroadcastUrlPayload> {
    payload.validate_create()?;
    broadcast_url::repository(pool)
        .insert(payload.field_set())
        .await?;
    Ok(ApiResponse::created("Created new broadcast URL!", payload))
}

/// PATCH /v1/broadcasturl/:id
pub async fn update_by_id(
    State(pool): State<PgPool>,
    Path(id): Path<i32>,
    Json(payload): Json<BroadcastUrlPayload>,
) -> ApiResult<BroadcastUrlPayload> {
    broadcast_url::repository(pool)
        .update_by("id", id.into(), payload.field_set())
        .await?;
    Ok(ApiResponse::ok("Broadcast URL updated successfully", payload))
}

/// DELETE /v1/broadcasturl/:id
pub async fn delete_by_id(State(pool): State<PgPool>, Path(id): Path<i32>) -> ApiResult<()> {
    broadcast_url::repository(pool)
        .delete_by("id", id.into())
        .await?;
    Ok(ApiResponse::message_only("Broadcast URL deleted successfully!"))
}
