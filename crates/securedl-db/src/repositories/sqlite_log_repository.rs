//! `SQLite` implementation of the `LogRepository` port.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

use securedl_core::query::{Direction, LogQuery, Value};
use securedl_core::{LogEntry, LogFilter, LogRepository, NewLogEntry, RepositoryError};

use super::constraint_sql::where_clause;
use super::row_mappers::{LOG_SELECT_COLUMNS, row_to_log_entry};

/// `SQLite` implementation of the `LogRepository` port.
///
/// One row per completed download; the read side powers the operator's
/// listing module.
pub struct SqliteLogRepository {
    pool: SqlitePool,
}

impl SqliteLogRepository {
    /// Create a new `SQLite` log repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get a reference to the underlying pool (for testing only).
    #[cfg(test)]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl LogRepository for SqliteLogRepository {
    async fn find_by_filter(
        &self,
        filter: Option<&LogFilter>,
    ) -> Result<Vec<LogEntry>, RepositoryError> {
        let mut query = LogQuery::default();

        if let Some(filter) = filter {
            match filter.constraints() {
                Ok(constraints) => query.matching(constraints),
                Err(err) => {
                    // A filter that cannot be expressed must not break the
                    // listing; fall back to the unfiltered view.
                    tracing::debug!(error = %err, "ignoring unusable log filter");
                }
            }
        }

        let mut sql = format!("SELECT {LOG_SELECT_COLUMNS} FROM download_log");
        let mut binds = Vec::new();
        if let Some(constraint) = &query.constraint {
            let (fragment, values) = where_clause(constraint);
            sql.push_str(" WHERE ");
            sql.push_str(&fragment);
            binds = values;
        }
        sql.push_str(" ORDER BY ");
        sql.push_str(query.order_by.field);
        sql.push_str(match query.order_by.direction {
            Direction::Ascending => " ASC",
            Direction::Descending => " DESC",
        });

        let mut stmt = sqlx::query(&sql);
        for value in binds {
            stmt = match value {
                Value::Null => stmt.bind(None::<i64>),
                Value::Int(v) => stmt.bind(v),
                Value::Text(v) => stmt.bind(v),
            };
        }

        let rows = stmt
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        rows.iter().map(row_to_log_entry).collect()
    }

    async fn insert(&self, entry: &NewLogEntry) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO download_log (
                tstamp, file_size, file_path, file_type, file_name,
                media_type, user, page, file_id
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(Utc::now().timestamp())
        .bind(entry.file_size)
        .bind(&entry.file_path)
        .bind(&entry.file_type)
        .bind(&entry.file_name)
        .bind(&entry.media_type)
        .bind(entry.user)
        .bind(entry.page)
        .bind(&entry.file_id)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        Ok(())
    }
}
