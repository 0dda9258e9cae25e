use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

use super::ensure_required;
use crate::db::mutation::FieldSet;
use crate::db::repository::Repository;
use crate::error::ApiError;

pub const TABLE: &str = "participation_status";
pub const COLUMNS: &[&str] = &[
    "id",
    "participation_option",
    "participant_id",
    "event_id",
    "confirmed",
    "registration_date",
    "deleted",
    "created_at",
    "updated_at",
];

#[derive(Debug, Serialize, FromRow)]
pub struct ParticipationStatusRow {
    pub id: i32,
    pub participation_option: Option<String>,
    pub participant_id: Option<i32>,
    pub event_id: Option<i32>,
    pub confirmed: Option<bool>,
    pub registration_date: Option<DateTime<Utc>>,
    pub deleted: Option<bool>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ParticipationStatusPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participation_option: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participant_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted: Option<bool>,
}

impl ParticipationStatusPayload {
    pub fn field_set(&self) -> FieldSet {
        let mut fields = FieldSet::new();
        fields.set_opt("participation_option", self.participation_option.clone());
        fields.set_opt("participant_id", self.participant_id);
        fields.set_opt("event_id", self.event_id);
        fields.set_opt("confirmed", self.confirmed);
        fields.set_opt("registration_date", self.registration_date);
        fields.set_opt("deleted", self.deleted);
        fields
    }

    pub fn validate_create(&self) -> Result<(), ApiError> {
        let mut missing = Vec::new();
        if self.participation_option.is_none() {
            missing.push("participation_option");
        }
        if self.participant_id.is_none() {
            missing.push("participant_id");
        }
        if self.event_id.is_none() {
            missing.push("event_id");
        }
        if self.registration_date.is_none() {
            missing.push("registration_date");
        }
        ensure_required(missing)
    }
}

pub fn repository(pool: PgPool) -> Repository<ParticipationStatusRow> {
    Repository::new(pool, TABLE, COLUMNS).touch_updated_at()
}
