use axum::extract::{Path, Query, State};
use axum::Json;
use sqlx::PgPool;

use super::ListQuery;
use crate::db::repository::Page;
use crate::models::item_broadcast_url::{self, ItemBroadcastUrlPayload, ItemBroadcastUrlRow};
use crate::response::{ApiResponse, ApiResult};

/// GET /v1/item-broadcasturl/:id
pub async fn get_by_id(
    State(pool): State<PgPool>,
    Path(id): Path<i32>,
) -> ApiResult<ItemBroadcastUrlRow> {
    let row = item_broadcast_url::repository(pool)
        .fetch_by("id", id.into())
        .await?;
    Ok(ApiResponse::ok("Fetched!", row))
}

/// GET /v1/item-broadcasturls
pub async fn list(
    State(pool): State<PgPool>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Vec<ItemBroadcastUrlRow>> {
    let rows = item_broadcast_url::repository(pool)
        .list(Page::new(query.skip, query.limit), None, None)
        .await?;
    Ok(ApiResponse::ok("Fetched!", rows))
}

/// POST /v1/item-broadcasturl
pub async fn create(
    State(pool): State<PgPool>,
    Json(payload): Json<ItemBroadcastUrlPayload>,
) -> ApiResult<ItemBroadcastUrlPayload> {
    payload.validate_create()?;
    item_broadcast_url::repository(pool)
        .insert(payload.field_set())
        .await?;
    Ok(ApiResponse::created(
        "Created new item broadcast URL!",
        payload,
    ))
}

/// PATCH /v1/item-broadcasturl/:id
pub async fn update_by_id(
    State(pool): State<PgPool>,
    Path(id): Path<i32>,
    Json(payload): Json<ItemBroadcastUrlPayload>,
) -> ApiResult<ItemBroadcastUrlPayload> {
    item_broadcast_url::repository(pool)
        .update_by("id", id.into(), payload.field_set())
        .await?;
    Ok(ApiResponse::ok(
        "Item broadcast URL updated successfully",
        payload,
    ))
}

/// DELETE /v1/item-broadcasturl/:id
pub async fn delete_by_id(State(pool): State<PgPool>, Path(id): Path<i32>) -> ApiResult<()> {
    item_broadcast_url::repository(pool)
        .delete_by("id", id.into())
        .await?;
    Ok(ApiResponse::message_only(
        "Item broadcast URL deleted successfully!",
    ))
}
