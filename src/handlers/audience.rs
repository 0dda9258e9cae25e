use axum::extract::{Path, Query, State};
use axum::Json;
use sqlx::PgPool;

use super::ListQuery;
use crate::db::repository::Page;
use crate::models::audience::{self, AudiencePayload, AudienceRow};
use crate::response::{ApiResponse, ApiResult};

/// GET /v1/audience/:name
pub async fn get_by_name(
    State(pool): State<PgPool>,
    Path(name): Path<String>,
) -> ApiResult<AudienceRow> {
    let row = audience::repository(pool)
        .fetch_by("name", name.into())
        .await?;
    Ok(ApiResponse::ok("Fetched!", row))
}

/// GET /v1/audiences
pub async fn list(
    State(pool): State<PgPool>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Vec<AudienceRow>> {
    let rows = audience::repository(pool)
        .list(Page::new(query.skip, query.limit), None, None)
        .await?;
    Ok(ApiResponse::ok("Fetched!", rows))
}

/// POST /v1/audience
pub async fn create(
    State(pool): State<PgPool>,
    Json(payload): Json<AudiencePayload>,
) -> ApiResult<AudiencePayload> {
    payload.validate_create()?;
    audience::repository(pool)
        .insert(payload.field_set())
        .await?;
    Ok(ApiResponse::created("Created new audience!", payload))
}

/// PATCH /v1/audience/:name
pub async fn update_by_name(
    State(pool): State<PgPool>,
    Path(name): Path<String>,
    Json(payload): Json<AudiencePayload>,
) -> ApiResult<AudiencePayload> {
    audience::repository(pool)
        .update_by("name", name.into(), payload.field_set())
        .await?;
    Ok(ApiResponse::ok("Audience updated successfully", payload))
}

/// DELETE /v1/audience/:name
pub async fn delete_by_name(State(pool): State<PgPool>, Path(name): Path<String>) -> ApiResult<()> {
    audience::repository(pool)
        .delete_by("name", name.into())
        .await?;
    Ok(ApiResponse::message_only("Audience deleted successfully!"))
}
