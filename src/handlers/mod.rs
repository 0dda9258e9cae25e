use serde::Deserialize;

pub mod audience;
pub mod broadcast_url;
pub mod event;
pub mod event_item;
pub mod event_part_option;
pub mod item;
pub mod item_broadcast_url;
pub mod participant;
pub mod participation_option;
pub mod participation_status;
pub mod platform;

/// `skip`/`limit` query parameters shared by the plain collection endpoints.
/// Entities with an extra equality filter declare their own query struct.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}
