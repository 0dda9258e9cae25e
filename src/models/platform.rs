use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

use super::ensure_required;
use crate::db::mutation::FieldSet;
use crate::db::repository::Repository;
use crate::error::ApiError;

pub const TABLE: &str = "platform";
pub const COLUMNS: &[&str] = &["name"];

#[derive(Debug, Serialize, FromRow)]
pub struct PlatformRow {
    pub name: String,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PlatformPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl PlatformPayload {
    pub fn field_set(&self) -> FieldSet {
        let mut fields = FieldSet::new();
        fields.set_opt("name", self.name.clone());
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

pub fn repository(pool: PgPool) -> Repository<PlatformRow> {
    Repository::new(pool, TABLE, COLUMNS)
}
