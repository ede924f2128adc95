//! Row mapping helpers for `SQLite` queries.

use securedl_core::{LogEntry, RepositoryError};
use sqlx::Row;

/// Shared SELECT column list for log queries.
pub const LOG_SELECT_COLUMNS: &str =
    "id, tstamp, file_size, file_path, file_type, file_name, media_type, user, page, file_id";

/// Parse a database row into a `LogEntry`.
pub fn row_to_log_entry(row: &sqlx::sqlite::SqliteRow) -> Result<LogEntry, RepositoryError> {
    Ok(LogEntry {
        id: row.try_get("id").map_err(map_column_error)?,
        tstamp: row.try_get("tstamp").map_err(map_column_error)?,
        file_size: row.try_get("file_size").map_err(map_column_error)?,
        file_path: row.try_get("file_path").map_err(map_column_error)?,
        file_type: row.try_get("file_type").map_err(map_column_error)?,
        file_name: row.try_get("file_name").map_err(map_column_error)?,
        media_type: row.try_get("media_type").map_err(map_column_error)?,
        user: row.try_get("user").map_err(map_column_error)?,
        page: row.try_get("page").map_err(map_column_error)?,
        file_id: row.try_get("file_id").map_err(map_column_error)?,
    })
}

fn map_column_error(e: sqlx::Error) -> RepositoryError {
    RepositoryError::Storage(format!("Column read error: {e}"))
}
