use axum::extract::{Path, Query, State};
use axum::Json;
use sqlx::PgPool;

use super::ListQuery;
use crate::db::repository::Page;
use crate::models::item::{self, ItemPayload, ItemRow};
use crate::response::{ApiResponse, ApiResult};

/// GET /v1/item/:id
pub async fn get_by_id(State(pool): State<PgPool>, Path(id): Path<i32>) -> ApiResult<ItemRow> {
    let row = item::repository(pool).fetch_by("id", id.into()).await?;
    Ok(ApiResponse::ok("Fetched!", row))
}

/// GET /v1/items
pub async fn list(
    State(pool): State<PgPool>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Vec<ItemRow>> {
    let rows = item::repository(pool)
        .list(Page::new(query.skip, query.limit), None, None)
        .await?;
    Ok(ApiResponse::ok("Fetched!", rows))
}

/// POST /v1/item
pub async fn create(
    State(pool): State<PgPool>,
    Json(payload): Json<ItemPayload>,
) -> ApiResult<ItemPayload> {
    payload.validate_create()?;
    item::repository(pool).insert(payload.field_set()).await?;
    Ok(ApiResponse::created("Created new item!", payload))
}

/// PATCH /v1/item/:id
pub async fn update_by_id(
    State(pool): State<PgPool>,
    Path(id): Path<i32>,
    Json(payload): Json<ItemPayload>,
) -> ApiResult<ItemPayload> {
    item::repository(pool)
        .update_by("id", id.into(), payload.field_set())
        .await?;
    Ok(ApiResponse::ok("Item updated successfully", payload))
}

/// DELETE /v1/item/:id
pub async fn delete_by_id(State(pool): State<PgPool>, Path(id): Path<i32>) -> ApiResult<()> {
    item::repository(pool).delete_by("id", id.into()).await?;
    Ok(ApiResponse::message_only("Item deleted successfully!"))
}
