use axum::extract::{Path, Query, State};
use axum::Json;
use sqlx::PgPool;

use super::ListQuery;
use crate::db::repository::Page;
use crate::models::event_part_option::{self, EventPartOptionPayload, EventPartOptionRow};
use crate::response::{ApiResponse, ApiResult};

/// GET /v1/event-part-option/:id
pub async fn get_by_id(
    State(pool): State<PgPool>,
    Path(id): Path<i32>,
) -> ApiResult<EventPartOptionRow> {
    let row = event_part_option::repository(pool)
        .fetch_by("id", id.into())
        .await?;
    Ok(ApiResponse::ok("Fetched!", row))
}

/// GET /v1/event-part-options
pub async fn list(
    State(pool): State<PgPool>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Vec<EventPartOptionRow>> {
    let rows = event_part_option::repository(pool)
        .list(Page::new(query.skip, query.limit), None, None)
        .await?;
    Ok(ApiResponse::ok("Fetched!", rows))
}

/// POST /v1/event-part-option
pub async fn create(
    State(pool): State<PgPool>,
    Json(payload): Json<EventPartOptionPayload>,
) -> ApiResult<EventPartOptionPayload> {
    payload.validate_create()?;
    event_part_option::repository(pool)
        .insert(payload.field_set())
        .await?;
    Ok(ApiResponse::created(
        "Created new event participation option!",
        payload,
    ))
}

/// PATCH /v1/event-part-option/:id
pub async fn update_by_id(
    State(pool): State<PgPool>,
    Path(id): Path<i32>,
    Json(payload): Json<EventPartOptionPayload>,
) -> ApiResult<EventPartOptionPayload> {
    event_part_option::repository(pool)
        .update_by("id", id.into(), payload.field_set())
        .await?;
    Ok(ApiResponse::ok(
        "Event participation option updated successfully",
        payload,
    ))
}

/// DELETE /v1/event-part-option/:id
pub async fn delete_by_id(State(pool): State<PgPool>, Path(id): Path<i32>) -> ApiResult<()> {
    event_part_option::repository(pool)
        .delete_by("id", id.into())
        .await?;
    Ok(ApiResponse::message_only(
        "Event participation option deleted successfully!",
    ))
}
