//! Download log domain types.

use serde::{Deserialize, Serialize};

/// One persisted download event.
///
/// Rows are written once per completed download and never updated; retention
/// cleanup happens outside this layer. Use [`NewLogEntry`] for rows that have
/// not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Database id of the row.
    pub id: i64,
    /// Creation time in unix seconds; assigned by the repository at insert.
    pub tstamp: i64,
    /// Size of the delivered file in bytes.
    pub file_size: i64,
    /// Directory plus base name of the file, extension excluded.
    pub file_path: String,
    /// File extension.
    pub file_type: String,
    /// Base name without extension.
    pub file_name: String,
    /// MIME type reported by the delivery pipeline.
    pub media_type: String,
    /// Id of the downloading user; `None` for anonymous downloads.
    pub user: Option<i64>,
    /// Id of the page the download was initiated from.
    pub page: i64,
    /// Unique id of the resolved file resource; empty when resolution failed.
    pub file_id: String,
}

/// A log row that has not been persisted yet.
///
/// `id` and `tstamp` are assigned by the repository on insert.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewLogEntry {
    pub file_size: i64,
    pub file_path: String,
    pub file_type: String,
    pub file_name: String,
    pub media_type: String,
    pub user: Option<i64>,
    pub page: i64,
    pub file_id: String,
}
