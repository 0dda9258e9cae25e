use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use sqlx::PgPool;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers::{
    audience, broadcast_url, event, event_item, event_part_option, item, item_broadcast_url,
    participant, participation_option, participation_status, platform,
};

pub fn app(pool: PgPool) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .merge(participant_routes())
        .merge(participation_option_routes())
        .merge(platform_routes())
        .merge(audience_routes())
        .merge(broadcast_url_routes())
        .merge(item_routes())
        .merge(item_broadcast_url_routes())
        .merge(event_routes())
        .merge(event_item_routes())
        .merge(event_part_option_routes())
        .merge(participation_status_routes())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(pool)
}

fn participant_routes() -> Router<PgPool> {
    Router::new()
        .route("/v1/participant", post(participant::create))
        .route(
            "/v1/participant/:id",
            get(participant::get_by_id)
                .patch(participant::update_by_id)
                .delete(participant::delete_by_id),
        )
        .route("/v1/participant/email/:email", get(participant::get_by_email))
        .route(
            "/v1/participant/keycloakid/:id",
            get(participant::get_by_keycloak_id),
        )
        .route("/v1/participants", get(participant::list))
}

fn participation_option_routes() -> Router<PgPool> {
    Router::new()
        .route("/v1/participation-option", post(participation_option::create))
        .route(
            "/v1/participation-option/:name",
            get(participation_option::get_by_name)
                .patch(participation_option::update_by_name)
                .delete(participation_option::delete_by_name),
        )
        .route("/v1/participation-options", get(participation_option::list))
}

fn platform_routes() -> Router<PgPool> {
    Router::new()
        .route("/v1/platform", post(platform::create))
        .route(
            "/v1/platform/:name",
            get(platform::get_by_name)
                .patch(platform::update_by_name)
                .delete(platform::delete_by_name),
        )
        .route("/v1/platforms", get(platform::list))
}

fn audience_routes() -> Router<PgPool> {
    Router::new()
        .route("/v1/audience", post(audience::create))
        .route(
            "/v1/audience/:name",
            get(audience::get_by_name)
                .patch(audience::update_by_name)
                .delete(audience::delete_by_name),
        )
        .route("/v1/audiences", get(audience::list))
}

fn broadcast_url_routes() -> Router<PgPool> {
    Router::new()
        .route("/v1/broadcasturl", post(broadcast_url::create))
        .route(
            "/v1/broadcasturl/:id",
            get(broadcast_url::get_by_id)
                .patch(broadcast_url::update_by_id)
                .delete(broadcast_url::delete_by_id),
        )
        .route("/v1/broadcasturls", get(broadcast_url::list))
}

fn item_routes() -> Router<PgPool> {
    Router::new()
        .route("/v1/item", post(item::create))
        .route(
            "/v1/item/:id",
            get(item::get_by_id)
                .patch(item::update_by_id)
                .delete(item::delete_by_id),
        )
        .route("/v1/items", get(item::list))
}

fn item_broadcast_url_routes() -> Router<PgPool> {
    Router::new()
        .route("/v1/item-broadcasturl", post(item_broadcast_url::create))
        .route(
            "/v1/item-broadcasturl/:id",
            get(item_broadcast_url::get_by_id)
                .patch(item_broadcast_url::update_by_id)
                .delete(item_broadcast_url::delete_by_id),
        )
        .route("/v1/item-broadcasturls", get(item_broadcast_url::list))
}

fn event_routes() -> Router<PgPool> {
    Router::new()
        .route("/v1/event", post(event::create))
        .route(
            "/v1/event/:id",
            get(event::get_by_id)
                .patch(event::update_by_id)
                .delete(event::delete_by_id),
        )
        .route("/v1/event/hard/:id", delete(event::delete_hard_by_id))
        .route("/v1/events", get(event::list))
}

fn event_item_routes() -> Router<PgPool> {
    Router::new()
        .route("/v1/event-item", post(event_item::create))
        .route(
            "/v1/event-item/:id",
            get(event_item::get_by_id)
                .patch(event_item::update_by_id)
                .delete(event_item::delete_by_id),
        )
        .route("/v1/event-items", get(event_item::list))
}

fn event_part_option_routes() -> Router<PgPool> {
    Router::new()
        .route("/v1/event-part-option", post(event_part_option::create))
        .route(
            "/v1/event-part-option/:id",
            get(event_part_option::get_by_id)
                .patch(event_part_option::update_by_id)
                .delete(event_part_option::delete_by_id),
        )
        .route("/v1/event-part-options", get(event_part_option::list))
}

fn participation_status_routes() -> Router<PgPool> {
    Router::new()
        .route("/v1/participation-status", post(participation_status::create))
        .route(
            "/v1/participation-status/:id",
            get(participation_status::get_by_id)
                .patch(participation_status::update_by_id)
                .delete(participation_status::delete_by_id),
        )
        .route("/v1/participation-statuses", get(participation_status::list))
}

async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "success": true,
        "data": {
            "name": "Event API",
            "version": version,
            "description": "Event management REST API",
            "endpoints": {
                "participant": "/v1/participant[/:id], /v1/participants",
                "participation_option": "/v1/participation-option[/:name], /v1/participation-options",
                "platform": "/v1/platform[/:name], /v1/platforms",
                "audience": "/v1/audience[/:name], /v1/audiences",
                "broadcast_url": "/v1/broadcasturl[/:id], /v1/broadcasturls",
                "item": "/v1/item[/:id], /v1/items",
                "item_broadcast_url": "/v1/item-broadcasturl[/:id], /v1/item-broadcasturls",
                "event": "/v1/event[/:id], /v1/event/hard/:id, /v1/events",
                "event_item": "/v1/event-item[/:id], /v1/event-items",
                "event_part_option": "/v1/event-part-option[/:id], /v1/event-part-options",
                "participation_status": "/v1/participation-status[/:id], /v1/participation-statuses",
            }
        }
    }))
}

async fn health(
    axum::extract::State(pool): axum::extract::State<PgPool>,
) -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    match crate::db::health_check(&pool).await {
        Ok(_) => (
            axum::http::StatusCode::OK,
            Json(json!({
                "success": true,
                "data": {
                    "status": "ok",
                    "timestamp": now,
                    "database": "ok"
                }
            })),
        ),
        Err(e) => (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "success": false,
                "error": "database unavailable",
                "data": {
                    "status": "degraded",
                    "timestamp": now,
                    "database_error": e.to_string()
                }
            })),
        ),
    }
}
