use axum::extract::{Path, Query, State};
use axum::Json;
use sqlx::PgPool;

use super::ListQuery;
use crate::db::repository::Page;
use crate::models::platform::{self, PlatformPayload, PlatformRow};
use crate::response::{ApiResponse, ApiResult};

/// GET /v1/platform/:name
pub async fn get_by_name(
    State(pool): State<PgPool>,
    Path(name): Path<String>,
) -> ApiResult<PlatformRow> {
    let row = platform::repository(pool)
        .fetch_by("name", name.into())
        .await?;
    Ok(ApiResponse::ok("Fetched!", row))
}

/// GET /v1/platforms
pub async fn list(
    State(pool): State<PgPool>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Vec<PlatformRow>> {
    let rows = platform::repository(pool)
        .list(Page::new(query.skip, query.limit), None, None)
        .await?;
    Ok(ApiResponse::ok("Fetched!", rows))
}

/// POST /v1/platform
pub async fn create(
    State(pool): State<PgPool>,
    Json(payload): Json<PlatformPayload>,
) -> ApiResult<PlatformPayload> {
    payload.validate_create()?;
    platform::repository(pool)
        .insert(payload.field_set())
        .await?;
    Ok(ApiResponse::created("Created new platform!", payload))
}

/// PATCH /v1/platform/:name
pub async fn update_by_name(
    State(pool): State<PgPool>,
    Path(name): Path<String>,
    Json(payload): Json<PlatformPayload>,
) -> ApiResult<PlatformPayload> {
    platform::repository(pool)
        .update_by("name", name.into(), payload.field_set())
        .await?;
    Ok(ApiResponse::ok("Platform updated successfully", payload))
}

/// DELETE /v1/platform/:name
pub async fn delete_by_name(State(pool): State<PgPool>, Path(name): Path<String>) -> ApiResult<()> {
    platform::repository(pool)
        .delete_by("name", name.into())
        .await?;
    Ok(ApiResponse::message_only("Platform deleted successfully!"))
}
