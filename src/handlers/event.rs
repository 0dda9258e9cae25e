use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use sqlx::PgPool;

use crate::db::repository::Page;
use crate::db::StoreError;
use crate::error::ApiError;
use crate::models::event::{self, EventPayload, EventRow};
use crate::response::{ApiResponse, ApiResult};

#[derive(Debug, Deserialize)]
pub struct EventListQuery {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
    pub slug: Option<String>,
}

/// GET /v1/event/:id
pub async fn get_by_id(State(pool): State<PgPool>, Path(id): Path<i32>) -> ApiResult<EventRow> {
    let row = event::repository(pool).fetch_by("id", id.into()).await?;
    Ok(ApiResponse::ok("Fetched!", row))
}

/// GET /v1/events?skip=&limit=&slug=
///
/// Unlike the other collections, an empty event list is reported as 404.
pub async fn list(
    State(pool): State<PgPool>,
    Query(query): Query<EventListQuery>,
) -> ApiResult<Vec<EventRow>> {
    let filter = query.slug.map(|slug| ("slug", slug.into()));
    let rows = event::repository(pool)
        .list(Page::new(query.skip, query.limit), filter, None)
        .await?;
    let rows = require_matches(rows)?;
    Ok(ApiResponse::ok("Fetched!", rows))
}

fn require_matches(rows: Vec<EventRow>) -> Result<Vec<EventRow>, ApiError> {
    if rows.is_empty() {
        return Err(ApiError::not_found("no event found"));
    }
    Ok(rows)
}

/// POST /v1/event
pub async fn create(
    State(pool): State<PgPool>,
    Json(payload): Json<EventPayload>,
) -> ApiResult<EventPayload> {
    payload.validate_create()?;
    event::repository(pool).insert(payload.field_set()).await?;
    Ok(ApiResponse::created("Created new event!", payload))
}

/// PATCH /v1/event/:id
pub async fn update_by_id(
    State(pool): State<PgPool>,
    Path(id): Path<i32>,
    Json(payload): Json<EventPayload>,
) -> ApiResult<EventPayload> {
    event::repository(pool)
        .update_by("id", id.into(), payload.field_set())
        .await?;
    Ok(ApiResponse::ok("Event updated successfully", payload))
}

/// DELETE /v1/event/:id - cascading soft delete. Marks the event and every
/// dependent row linked by event_id as deleted inside one transaction.
pub async fn delete_by_id(State(pool): State<PgPool>, Path(id): Path<i32>) -> ApiResult<()> {
    soft_delete_cascade(&pool, id).await?;
    Ok(ApiResponse::message_only("Event deleted successfully!"))
}

/// DELETE /v1/event/hard/:id - removes the row outright.
pub async fn delete_hard_by_id(State(pool): State<PgPool>, Path(id): Path<i32>) -> ApiResult<()> {
    event::repository(pool).delete_by("id", id.into()).await?;
    Ok(ApiResponse::message_only("Event deleted successfully!"))
}

/// The event row plus every dependent table linked by event_id.
const CASCADE_TABLES: &[(&str, &str)] = &[
    ("event", "id"),
    ("event_item", "event_id"),
    ("event_participation_option", "event_id"),
    ("participation_status", "event_id"),
];

fn cascade_statements() -> Vec<String> {
    CASCADE_TABLES
        .iter()
        .map(|(table, key_column)| {
            format!("UPDATE {} SET deleted = true WHERE {} = $1", table, key_column)
        })
        .collect()
}

async fn soft_delete_cascade(pool: &PgPool, id: i32) -> Result<(), StoreError> {
    let mut tx = pool.begin().await?;

    for sql in cascade_statements() {
        sqlx::query(&sql).bind(id).execute(&mut *tx).await?;
    }

    tx.commit().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cascade_marks_event_and_every_dependent_table() {
        assert_eq!(
            cascade_statements(),
            vec![
                "UPDATE event SET deleted = true WHERE id = $1",
                "UPDATE event_item SET deleted = true WHERE event_id = $1",
                "UPDATE event_participation_option SET deleted = true WHERE event_id = $1",
                "UPDATE participation_status SET deleted = true WHERE event_id = $1",
            ]
        );
    }

    #[test]
    fn empty_event_list_is_not_found() {
        let err = require_matches(vec![]).unwrap_err();
        assert_eq!(err.message(), "no event found");
        assert_eq!(err.status_code(), axum::http::StatusCode::NOT_FOUND);
    }
}
