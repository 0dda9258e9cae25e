use axum::extract::{Path, Query, State};
use axum::Json;
use sqlx::PgPool;

use super::ListQuery;
use crate::db::repository::Page;
use crate::models::event_item::{self, EventItemPayload, EventItemRow};
use crate::response::{ApiResponse, ApiResult};

/// GET /v1/event-item/:id
pub async fn get_by_id(
    State(pool): State<PgPool>,
    Path(id): Path<i32>,
) -> ApiResult<EventItemRow> {
    let row = event_item::repository(pool)
        .fetch_by("id", id.into())
        .await?;
    Ok(ApiResponse::ok("Fetched!", row))
}

/// GET /v1/event-items
pub async fn list(
    State(pool): State<PgPool>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Vec<EventItemRow>> {
    let rows = event_item::repository(pool)
        .list(Page::new(query.skip, query.limit), None, None)
        .await?;
    Ok(ApiResponse::ok("Fetched!", rows))
}

/// POST /v1/event-item
pub async fn create(
    State(pool): State<PgPool>,
    Json(payload): Json<EventItemPayload>,
) -> ApiResult<EventItemPayload> {
    payload.validate_create()?;
    event_item::repository(pool)
        .insert(payload.field_set())
        .await?;
    Ok(ApiResponse::created("Created new event item!", payload))
}

/// PATCH /v1/event-item/:id
pub async fn update_by_id(
    State(pool): State<PgPool>,
    Path(id): Path<i32>,
    Json(payload): Json<EventItemPayload>,
) -> ApiResult<EventItemPayload> {
    event_item::repository(pool)
        .update_by("id", id.into(), payload.field_set())
        .await?;
    Ok(ApiResponse::ok("Event item updated successfully", payload))
}

/// DELETE /v1/event-item/:id
pub async fn delete_by_id(State(pool): State<PgPool>, Path(id): Path<i32>) -> ApiResult<()> {
    event_item::repository(pool)
        .delete_by("id", id.into())
        .await?;
    Ok(ApiResponse::message_only("Event item deleted successfully!"))
}
