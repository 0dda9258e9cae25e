use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use super::ensure_required;
use crate::db::mutation::FieldSet;
use crate::db::repository::Repository;
use crate::error::ApiError;

pub const TABLE: &str = "participant";
pub const COLUMNS: &[&str] = &[
    "id",
    "keycloak_id",
    "first_language",
    "email_language",
    "dob",
    "gender",
    "email",
    "country",
    "first_name",
    "last_name",
    "created_at",
    "updated_at",
];

#[derive(Debug, Serialize, FromRow)]
pub struct ParticipantRow {
    pub id: i32,
    pub keycloak_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dob: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Create/patch payload; every field is individually present or absent.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ParticipantPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keycloak_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dob: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

impl ParticipantPayload {
    pub fn field_set(&self) -> FieldSet {
        let mut fields = FieldSet::new();
        fields.set_opt("keycloak_id", self.keycloak_id.clone());
        fields.set_opt("first_language", self.first_language.clone());
        fields.set_opt("email_language", self.email_language.clone());
        fields.set_opt("dob", self.dob);
        fields.set_opt("gender", self.gender.clone());
        fields.set_opt("email", self.email.clone());
        fields.set_opt("country", self.country.clone());
        fields.set_opt("first_name", self.first_name.clone());
        fields.set_opt("last_name", self.last_name.clone());
        fields
    }

    pub fn validate_create(&self) -> Result<(), ApiError> {
        let mut missing = Vec::new();
        if self.keycloak_id.is_none() {
            missing.push("keycloak_id");
        }
        if self.email.is_none() {
            missing.push("email");
        }
        if self.first_name.is_none() {
            missing.push("first_name");
        }
        if self.last_name.is_none() {
            missing.push("last_name");
        }
        ensure_required(missing)?;

        if let Some(keycloak_id) = &self.keycloak_id {
            if Uuid::parse_str(keycloak_id).is_err() {
                return Err(ApiError::bad_request("keycloak_id must be a valid UUID"));
            }
        }
        if let Some(email) = &self.email {
            if !email.contains('@') {
                return Err(ApiError::bad_request("email must be a valid address"));
            }
        }
        Ok(())
    }
}

pub fn repository(pool: PgPool) -> Repository<ParticipantRow> {
    Repository::new(pool, TABLE, COLUMNS).touch_updated_at()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_set_skips_absent_fields() {
        let payload = ParticipantPayload {
            country: Some("BE".to_string()),
            ..Default::default()
        };
        let fields = payload.field_set();
        assert_eq!(fields.len(), 1);
    }

    #[test]
    fn create_requires_identity_fields() {
        let payload = ParticipantPayload::default();
        let err = payload.validate_create().unwrap_err();
        assert!(err
            .message()
            .contains("keycloak_id, email, first_name, last_name"));
    }

    #[test]
    fn create_rejects_malformed_keycloak_id() {
        let payload = ParticipantPayload {
            keycloak_id: Some("not-a-uuid".to_string()),
            email: Some("ada@example.org".to_string()),
            first_name: Some("Ada".to_string()),
            last_name: Some("Lovelace".to_string()),
            ..Default::default()
        };
        assert!(payload.validate_create().is_err());
    }

    #[test]
    fn create_accepts_complete_payload() {
        let payload = ParticipantPayload {
            keycloak_id: Some(Uuid::new_v4().to_string()),
            email: Some("ada@example.org".to_string()),
            first_name: Some("Ada".to_string()),
            last_name: Some("Lovelace".to_string()),
            ..Default::default()
        };
        assert!(payload.validate_create().is_ok());
    }
}
