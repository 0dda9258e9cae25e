use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

use super::ensure_required;
use crate::db::mutation::FieldSet;
use crate::db::repository::Repository;
use crate::error::ApiError;

pub const TABLE: &str = "event_item";
pub const COLUMNS: &[&str] = &["id", "event_id", "item_id", "deleted", "created_at", "updated_at"];

#[derive(Debug, Serialize, FromRow)]
pub struct EventItemRow {
    pub id: i32,
    pub event_id: Option<i32>,
    pub item_id: Option<i32>,
    pub deleted: Option<bool>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct EventItemPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted: Option<bool>,
}

impl EventItemPayload {
    pub fn field_set(&self) -> FieldSet {
        let mut fields = FieldSet::new();
        fields.set_opt("event_id", self.event_id);
        fields.set_opt("item_id", self.item_id);
        fields.set_opt("deleted", self.deleted);
        fields
    }

    pub fn validate_create(&self) -> Result<(), ApiError> {
        let mut missing = Vec::new();
        if self.event_id.is_none() {
            missing.push("event_id");
        }
        if self.item_id.is_none() {
            missing.push("item_id");
        }
        ensure_required(missing)
    }
}

pub fn repository(pool: PgPool) -> Repository<EventItemRow> {
    Repository::new(pool, TABLE, COLUMNS).touch_updated_at()
}
