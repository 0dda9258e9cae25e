use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

use super::ensure_required;
use crate::db::mutation::FieldSet;
use crate::db::repository::Repository;
use crate::error::ApiError;

pub const TABLE: &str = "item";
pub const COLUMNS: &[&str] = &[
    "id",
    "start_date",
    "duration",
    "name",
    "content",
    "original_language",
    "translated",
    "created_at",
    "updated_at",
];

#[derive(Debug, Serialize, FromRow)]
pub struct ItemRow {
    pub id: i32,
    pub start_date: Option<DateTime<Utc>>,
    pub duration: Option<i32>,
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub original_language: Option<String>,
    pub translated: Option<bool>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ItemPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translated: Option<bool>,
}

impl ItemPayload {
    pub fn field_set(&self) -> FieldSet {
        let mut fields = FieldSet::new();
        fields.set_opt("start_date", self.start_date);
        fields.set_opt("duration", self.duration);
        fields.set_opt("name", self.name.clone());
        fields.set_opt("content", self.content.clone());
        fields.set_opt("original_language", self.original_language.clone());
        fields.set_opt("translated", self.translated);
        fields
    }

    pub fn validate_create(&self) -> Result<(), ApiError> {
        let mut missing = Vec::new();
        if self.start_date.is_none() {
            missing.push("start_date");
        }
        if self.duration.is_none() {
            missing.push("duration");
        }
        if self.name.is_none() {
            missing.push("name");
        }
        if self.original_language.is_none() {
            missing.push("original_language");
        }
        if self.translated.is_none() {
            missing.push("translated");
        }
        ensure_required(missing)
    }
}

pub fn repository(pool: PgPool) -> Repository<ItemRow> {
    Repository::new(pool, TABLE, COLUMNS).touch_updated_at()
}
