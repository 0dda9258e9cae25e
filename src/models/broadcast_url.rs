use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

use super::ensure_required;
use crate::db::mutation::FieldSet;
use crate::db::repository::Repository;
use crate::error::ApiError;

pub const TABLE: &str = "broadcast_url";
pub const COLUMNS: &[&str] = &["id", "url", "platform", "language", "created_at", "updated_at"];

#[derive(Debug, Serialize, FromRow)]
pub struct BroadcastUrlRow {
    pub id: i32,
    pub url: Option<String>,
    pub platform: Option<String>,
    pub language: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct BroadcastUrlPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl BroadcastUrlPayload {
    pub fn field_set(&self) -> FieldSet {
        let mut fields = FieldSet::new();
        fields.set_opt("url", self.url.clone());
        fields.set_opt("platform", self.platform.clone());
        fields.set_opt("language", self.language.clone());
        fields
    }

    pub fn validate_create(&self) -> Result<(), ApiError> {
        let mut missing = Vec::new();
        if self.url.is_none() {
            missing.push("url");
        }
        if self.platform.is_none() {
            missing.push("platform");
        }
        if self.language.is_none() {
            missing.push("language");
        }
        ensure_required(missing)
    }
}

pub fn repository(pool: PgPool) -> Repository<BroadcastUrlRow> {
    Repository::new(pool, TABLE, COLUMNS).touch_updated_at()
}
