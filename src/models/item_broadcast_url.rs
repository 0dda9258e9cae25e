use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

use super::ensure_required;
use crate::db::mutation::FieldSet;
use crate::db::repository::Repository;
use crate::error::ApiError;

pub const TABLE: &str = "item_broadcast_url";
pub const COLUMNS: &[&str] = &["id", "item_id", "broadcast_url_id", "created_at", "updated_at"];

#[derive(Debug, Serialize, FromRow)]
pub struct ItemBroadcastUrlRow {
    pub id: i32,
    pub item_id: Option<i32>,
    pub broadcast_url_id: Option<i32>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ItemBroadcastUrlPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub broadcast_url_id: Option<i32>,
}

impl ItemBroadcastUrlPayload {
    pub fn field_set(&self) -> FieldSet {
        let mut fields = FieldSet::new();
        fields.set_opt("item_id", self.item_id);
        fields.set_opt("broadcast_url_id", self.broadcast_url_id);
        fields
    }

    pub fn validate_create(&self) -> Result<(), ApiError> {
        let mut missing = Vec::new();
        if self.item_id.is_none() {
            missing.push("item_id");
        }
        if self.broadcast_url_id.is_none() {
            missing.push("broadcast_url_id");
        }
        ensure_required(missing)
    }
}

pub fn repository(pool: PgPool) -> Repository<ItemBroadcastUrlRow> {
    Repository::new(pool, TABLE, COLUMNS).touch_updated_at()
}
