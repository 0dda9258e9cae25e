use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

use super::ensure_required;
use crate::db::mutation::FieldSet;
use crate::db::repository::Repository;
use crate::error::ApiError;

pub const TABLE: &str = "audience";
pub const COLUMNS: &[&str] = &["name", "description"];

#[derive(Debug, Serialize, FromRow)]
pub struct AudienceRow {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AudiencePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl AudiencePayload {
    pub fn field_set(&self) -> FieldSet {
        let mut fields = FieldSet::new();
        fields.set_opt("name", self.name.clone());
        fields.set_opt("description", self.description.clone());
        fields
    }

    pub fn validate_create(&self) -> Result<(), ApiError> {
        let mut missing = Vec::new();
        if self.name.is_none() {
            missing.push("name");
        }
        ensure_required(missing)
    }
}

// The audience table carries no timestamp columns.
pub fn repository(pool: PgPool) -> Repository<AudienceRow> {
    Repository::new(pool, TABLE, COLUMNS)
}
