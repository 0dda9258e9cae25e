use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

use super::ensure_required;
use crate::db::mutation::FieldSet;
use crate::db::repository::Repository;
use crate::error::ApiError;

pub const TABLE: &str = "event_participation_option";
pub const COLUMNS: &[&str] = &[
    "id",
    "event_id",
    "participation_option",
    "deleted",
    "created_at",
    "updated_at",
];

#[derive(Debug, Serialize, FromRow)]
pub struct EventPartOptionRow {
    pub id: i32,
    pub event_id: Option<i32>,
    pub participation_option: Option<String>,
    pub deleted: Option<bool>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct EventPartOptionPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participation_option: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted: Option<bool>,
}

impl EventPartOptionPayload {
    pub fn field_set(&self) -> FieldSet {
        let mut fields = FieldSet::new();
        fields.set_opt("event_id", self.event_id);
        fields.set_opt("participation_option", self.participation_option.clone());
        fields.set_opt("deleted", self.deleted);
        fields
    }

    pub fn validate_create(&self) -> Result<(), ApiError> {
        let mut missing = Vec::new();
        if self.event_id.is_none() {
            missing.push("event_id");
        }
        if self.participation_option.is_none() {
            missing.push("participation_option");
        }
        ensure_required(missing)
    }
}

pub fn repository(pool: PgPool) -> Repository<EventPartOptionRow> {
    Repository::new(pool, TABLE, COLUMNS).touch_updated_at()
}
