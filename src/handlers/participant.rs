use axum::extract::{Path, Query, State};
use axum::Json;
use sqlx::PgPool;

use super::ListQuery;
use crate::db::repository::Page;
use crate::models::participant::{self, ParticipantPayload, ParticipantRow};
use crate::response::{ApiResponse, ApiResult};

/// GET /v1/participant/:id
pub async fn get_by_id(
    State(pool): State<PgPool>,
    Path(id): Path<i32>,
) -> ApiResult<ParticipantRow> {
    let row = participant::repository(pool)
        .fetch_by("id", id.into())
        .await?;
    Ok(ApiResponse::ok("Fetched!", row))
}

/// GET /v1/participant/email/:email
pub async fn get_by_email(
    State(pool): State<PgPool>,
    Path(email): Path<String>,
) -> ApiResult<ParticipantRow> {
    let row = participant::repository(pool)
        .fetch_by("email", email.into())
        .await?;
    Ok(ApiResponse::ok("Fetched!", row))
}

/// GET /v1/participant/keycloakid/:id
pub async fn get_by_keycloak_id(
    State(pool): State<PgPool>,
    Path(id): Path<String>,
) -> ApiResult<ParticipantRow> {
    let row = participant::repository(pool)
        .fetch_by("keycloak_id", id.into())
        .await?;
    Ok(ApiResponse::ok("Fetched!", row))
}

/// GET /v1/participants
pub async fn list(
    State(pool): State<PgPool>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Vec<ParticipantRow>> {
    let rows = participant::repository(pool)
        .list(Page::new(query.skip, query.limit), None, None)
        .await?;
    Ok(ApiResponse::ok("Fetched!", rows))
}

/// POST /v1/participant
pub async fn create(
    State(pool): State<PgPool>,
    Json(payload): Json<ParticipantPayload>,
) -> ApiResult<ParticipantPayload> {
    payload.validate_create()?;
    participant::repository(pool)
        .insert(payload.field_set())
        .await?;
    Ok(ApiResponse::created("Created new participant!", payload))
}

/// PATCH /v1/participant/:id
pub async fn update_by_id(
    State(pool): State<PgPool>,
    Path(id): Path<i32>,
    Json(payload): Json<ParticipantPayload>,
) -> ApiResult<ParticipantPayload> {
    participant::repository(pool)
        .update_by("id", id.into(), payload.field_set())
        .await?;
    Ok(ApiResponse::ok("Participant updated successfully", payload))
}

/// DELETE /v1/participant/:id
pub async fn delete_by_id(State(pool): State<PgPool>, Path(id): Path<i32>) -> ApiResult<()> {
    participant::repository(pool)
        .delete_by("id", id.into())
        .await?;
    Ok(ApiResponse::message_only("Participant deleted successfully!"))
}
