use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

use super::ensure_required;
use crate::db::mutation::FieldSet;
use crate::db::repository::Repository;
use crate::error::ApiError;

pub const TABLE: &str = "event";
pub const COLUMNS: &[&str] = &[
    "id",
    "registration_required",
    "registration_status",
    "audience",
    "slug",
    "name",
    "logo",
    "content",
    "deleted",
    "starts_on",
    "ends_on",
    "date_confirmed",
    "created_at",
    "updated_at",
];

#[derive(Debug, Serialize, FromRow)]
pub struct EventRow {
    pub id: i32,
    pub registration_required: Option<bool>,
    pub registration_status: Option<String>,
    pub audience: Option<String>,
    pub slug: Option<String>,
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub deleted: Option<bool>,
    pub starts_on: Option<DateTime<Utc>>,
    pub ends_on: Option<DateTime<Utc>>,
    pub date_confirmed: Option<bool>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct EventPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audience: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starts_on: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ends_on: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_confirmed: Option<bool>,
}

impl EventPayload {
    pub fn field_set(&self) -> FieldSet {
        let mut fields = FieldSet::new();
        fields.set_opt("registration_required", self.registration_required);
        fields.set_opt("registration_status", self.registration_status.clone());
        fields.set_opt("audience", self.audience.clone());
        fields.set_opt("slug", self.slug.clone());
        fields.set_opt("name", self.name.clone());
        fields.set_opt("logo", self.logo.clone());
        fields.set_opt("content", self.content.clone());
        fields.set_opt("deleted", self.deleted);
        fields.set_opt("starts_on", self.starts_on);
        fields.set_opt("ends_on", self.ends_on);
        fields.set_opt("date_confirmed", self.date_confirmed);
        fields
    }

    pub fn validate_create(&self) -> Result<(), ApiError> {
        let mut missing = Vec::new();
        if self.slug.is_none() {
            missing.push("slug");
        }
        if self.name.is_none() {
            missing.push("name");
        }
        if self.starts_on.is_none() {
            missing.push("starts_on");
        }
        if self.ends_on.is_none() {
            missing.push("ends_on");
        }
        ensure_required(missing)
    }
}

pub fn repository(pool: PgPool) -> Repository<EventRow> {
    Repository::new(pool, TABLE, COLUMNS).touch_updated_at()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_requires_slug_name_and_dates() {
        let payload = EventPayload {
            slug: Some("fosdem-2024".to_string()),
            ..Default::default()
        };
        let err = payload.validate_create().unwrap_err();
        assert!(err.message().contains("name, starts_on, ends_on"));
    }

    #[test]
    fn field_set_keeps_declared_column_order() {
        let payload = EventPayload {
            name: Some("FOSDEM".to_string()),
            slug: Some("fosdem-2024".to_string()),
            deleted: Some(false),
            ..Default::default()
        };
        let stmt = crate::db::mutation::build_insert(TABLE, payload.field_set()).unwrap();
        assert_eq!(
            stmt.sql,
            "INSERT INTO event (slug, name, deleted) VALUES ($1, $2, $3)"
        );
    }
}
