use sqlx::{postgres::PgRow, FromRow, PgPool};

use super::mutation::{build_insert, build_update, FieldSet};
use super::param::{bind_param, bind_param_query_as, SqlParam};
use super::StoreError;

pub const DEFAULT_LIMIT: i64 = 10;

/// Pagination window from `skip`/`limit` query parameters.
#[derive(Debug, Clone, Copy)]
pub struct Page {
    pub skip: i64,
    pub limit: i64,
}

impl Page {
    pub fn new(skip: Option<i64>, limit: Option<i64>) -> Self {
        Self {
            skip: skip.unwrap_or(0).max(0),
            limit: limit.unwrap_or(DEFAULT_LIMIT).max(0),
        }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// Equality filter appended to a list query as a parameterized WHERE clause.
pub type ListFilter = (&'static str, SqlParam);

/// Generic per-entity data access over the shared pool. Each entity module
/// constructs one with its table name and column list.
pub struct Repository<T> {
    pool: PgPool,
    table: &'static str,
    columns: &'static [&'static str],
    set_updated_at: bool,
    _phantom: std::marker::PhantomData<T>,
}

impl<T> Repository<T>
where
    T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
{
    pub fn new(pool: PgPool, table: &'static str, columns: &'static [&'static str]) -> Self {
        Self {
            pool,
            table,
            columns,
            set_updated_at: false,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Mark the table as carrying an `updated_at` column, so partial updates
    /// append `updated_at = now()`.
    pub fn touch_updated_at(mut self) -> Self {
        self.set_updated_at = true;
        self
    }

    /// Fetch a single record by id or natural key. Zero rows is `NotFound`.
    pub async fn fetch_by(&self, column: &str, key: SqlParam) -> Result<T, StoreError> {
        let sql = fetch_sql(self.table, self.columns, column);
        let row = bind_param_query_as(sqlx::query_as::<_, T>(&sql), &key)
            .fetch_optional(&self.pool)
            .await?;
        row.ok_or(StoreError::NotFound)
    }

    /// List records with pagination, an optional equality filter and an
    /// optional ordering. An empty result is a valid outcome.
    pub async fn list(
        &self,
        page: Page,
        filter: Option<ListFilter>,
        order_by: Option<&str>,
    ) -> Result<Vec<T>, StoreError> {
        let sql = list_sql(
            self.table,
            self.columns,
            filter.as_ref().map(|(column, _)| *column),
            order_by,
        );

        let mut params = Vec::with_capacity(3);
        if let Some((_, value)) = filter {
            params.push(value);
        }
        params.push(SqlParam::Int(page.limit));
        params.push(SqlParam::Int(page.skip));

        let mut q = sqlx::query_as::<_, T>(&sql);
        for p in &params {
            q = bind_param_query_as(q, p);
        }
        Ok(q.fetch_all(&self.pool).await?)
    }

    /// Insert the present fields. An empty field set is `InvalidValues`.
    pub async fn insert(&self, fields: FieldSet) -> Result<(), StoreError> {
        let stmt = build_insert(self.table, fields)?;
        let mut q = sqlx::query(&stmt.sql);
        for p in &stmt.params {
            q = bind_param(q, p);
        }
        q.execute(&self.pool).await?;
        Ok(())
    }

    /// Partial update by key. Zero affected rows is `NotFound`, an empty
    /// field set is `InvalidValues` and no statement is executed.
    pub async fn update_by(
        &self,
        column: &str,
        key: SqlParam,
        fields: FieldSet,
    ) -> Result<(), StoreError> {
        let stmt = build_update(self.table, column, key, fields, self.set_updated_at)?;
        let mut q = sqlx::query(&stmt.sql);
        for p in &stmt.params {
            q = bind_param(q, p);
        }
        let result = q.execute(&self.pool).await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    /// Hard delete by key.
    pub async fn delete_by(&self, column: &str, key: SqlParam) -> Result<(), StoreError> {
        let sql = format!("DELETE FROM {} WHERE {} = $1", self.table, column);
        bind_param(sqlx::query(&sql), &key)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

fn fetch_sql(table: &str, columns: &[&str], key_column: &str) -> String {
    format!(
        "SELECT {} FROM {} WHERE {} = $1",
        columns.join(", "),
        table,
        key_column
    )
}

fn list_sql(
    table: &str,
    columns: &[&str],
    filter_column: Option<&str>,
    order_by: Option<&str>,
) -> String {
    let mut sql = format!("SELECT {} FROM {}", columns.join(", "), table);
    let mut next_param = 1;

    if let Some(column) = filter_column {
        sql.push_str(&format!(" WHERE {} = ${}", column, next_param));
        next_param += 1;
    }
    if let Some(order) = order_by {
        sql.push_str(&format!(" ORDER BY {}", order));
    }
    sql.push_str(&format!(
        " LIMIT ${} OFFSET ${}",
        next_param,
        next_param + 1
    ));
    sql
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_defaults_to_first_ten() {
        let page = Page::new(None, None);
        assert_eq!(page.skip, 0);
        assert_eq!(page.limit, 10);
    }

    #[test]
    fn page_clamps_negative_values() {
        let page = Page::new(Some(-5), Some(-1));
        assert_eq!(page.skip, 0);
        assert_eq!(page.limit, 0);
    }

    #[test]
    fn fetch_sql_parameterizes_key() {
        assert_eq!(
            fetch_sql("platform", &["name"], "name"),
            "SELECT name FROM platform WHERE name = $1"
        );
    }

    #[test]
    fn list_sql_without_filter() {
        assert_eq!(
            list_sql("item", &["id", "name"], None, None),
            "SELECT id, name FROM item LIMIT $1 OFFSET $2"
        );
    }

    #[test]
    fn list_sql_with_filter_and_order() {
        assert_eq!(
            list_sql(
                "participation_status",
                &["id", "event_id"],
                Some("event_id"),
                Some("created_at asc"),
            ),
            "SELECT id, event_id FROM participation_status WHERE event_id = $1 \
             ORDER BY created_at asc LIMIT $2 OFFSET $3"
        );
    }
}
