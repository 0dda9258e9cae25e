//! Partial mutation statement builder.
//!
//! Every entity reduces its request payload to a [`FieldSet`] holding only
//! the fields the client actually supplied, in the entity's fixed column
//! order. From that the builders produce a parameterized INSERT or UPDATE
//! touching exactly those columns. Building is a pure transformation;
//! execution lives in [`super::repository`].

use super::param::SqlParam;
use super::StoreError;

/// Ordered set of (column, value) pairs present in a request.
#[derive(Debug, Default)]
pub struct FieldSet {
    entries: Vec<(&'static str, SqlParam)>,
}

impl FieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, column: &'static str, value: impl Into<SqlParam>) {
        self.entries.push((column, value.into()));
    }

    /// Append the column only when the request carried the field.
    pub fn set_opt<V: Into<SqlParam>>(&mut self, column: &'static str, value: Option<V>) {
        if let Some(v) = value {
            self.set(column, v);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// A parameterized statement plus its positional arguments.
#[derive(Debug)]
pub struct SqlStatement {
    pub sql: String,
    pub params: Vec<SqlParam>,
}

/// Build `INSERT INTO table (a, b) VALUES ($1, $2)` from the present fields.
pub fn build_insert(table: &str, fields: FieldSet) -> Result<SqlStatement, StoreError> {
    if fields.is_empty() {
        return Err(StoreError::InvalidValues);
    }

    let mut columns = Vec::with_capacity(fields.len());
    let mut placeholders = Vec::with_capacity(fields.len());
    let mut params = Vec::with_capacity(fields.len());

    for (column, value) in fields.entries {
        columns.push(column);
        placeholders.push(format!("${}", params.len() + 1));
        params.push(value);
    }

    let sql = format!(
        "INSERT INTO {} ({}) VALUES ({})",
        table,
        columns.join(", "),
        placeholders.join(", ")
    );

    Ok(SqlStatement { sql, params })
}

/// Build `UPDATE table SET a = $1[, updated_at = now()] WHERE key = $2` from
/// the present fields. The key is always bound as the final positional
/// parameter, never interpolated into the statement text.
pub fn build_update(
    table: &str,
    key_column: &str,
    key: SqlParam,
    fields: FieldSet,
    set_updated_at: bool,
) -> Result<SqlStatement, StoreError> {
    if fields.is_empty() {
        return Err(StoreError::InvalidValues);
    }

    let mut assignments = Vec::with_capacity(fields.len() + 1);
    let mut params = Vec::with_capacity(fields.len() + 1);

    for (column, value) in fields.entries {
        assignments.push(format!("{} = ${}", column, params.len() + 1));
        params.push(value);
    }

    if set_updated_at {
        assignments.push("updated_at = now()".to_string());
    }

    let sql = format!(
        "UPDATE {} SET {} WHERE {} = ${}",
        table,
        assignments.join(", "),
        key_column,
        params.len() + 1
    );
    params.push(key);

    Ok(SqlStatement { sql, params })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_shape_follows_field_order() {
        let mut fields = FieldSet::new();
        fields.set("slug", "fosdem-2024");
        fields.set("name", "FOSDEM");
        fields.set("date_confirmed", true);

        let stmt = build_insert("event", fields).unwrap();
        assert_eq!(
            stmt.sql,
            "INSERT INTO event (slug, name, date_confirmed) VALUES ($1, $2, $3)"
        );
        assert_eq!(
            stmt.params,
            vec![
                SqlParam::Text("fosdem-2024".to_string()),
                SqlParam::Text("FOSDEM".to_string()),
                SqlParam::Bool(true),
            ]
        );
    }

    #[test]
    fn insert_with_no_fields_is_invalid() {
        assert!(matches!(
            build_insert("event", FieldSet::new()),
            Err(StoreError::InvalidValues)
        ));
    }

    #[test]
    fn update_appends_updated_at_and_parameterizes_key() {
        let mut fields = FieldSet::new();
        fields.set("first_name", "Ada");

        let stmt =
            build_update("participant", "id", SqlParam::Int(12), fields, true).unwrap();
        assert_eq!(
            stmt.sql,
            "UPDATE participant SET first_name = $1, updated_at = now() WHERE id = $2"
        );
        assert_eq!(
            stmt.params,
            vec![SqlParam::Text("Ada".to_string()), SqlParam::Int(12)]
        );
    }

    #[test]
    fn update_without_timestamps_skips_updated_at() {
        let mut fields = FieldSet::new();
        fields.set("name", "press");
        fields.set("description", "press and media");

        let stmt = build_update(
            "audience",
            "name",
            SqlParam::Text("public".to_string()),
            fields,
            false,
        )
        .unwrap();
        assert_eq!(
            stmt.sql,
            "UPDATE audience SET name = $1, description = $2 WHERE name = $3"
        );
    }

    #[test]
    fn update_with_no_fields_is_invalid() {
        assert!(matches!(
            build_update("event", "id", SqlParam::Int(1), FieldSet::new(), true),
            Err(StoreError::InvalidValues)
        ));
    }

    #[test]
    fn omitted_fields_never_appear() {
        let mut fields = FieldSet::new();
        fields.set_opt("gender", None::<String>);
        fields.set_opt("country", Some("BE"));

        let stmt =
            build_update("participant", "id", SqlParam::Int(3), fields, true).unwrap();
        assert_eq!(
            stmt.sql,
            "UPDATE participant SET country = $1, updated_at = now() WHERE id = $2"
        );
    }
}
