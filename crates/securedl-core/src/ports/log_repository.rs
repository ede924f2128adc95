//! Log repository port definition.
//!
//! This port defines the interface for download log persistence.
//! Implementations handle all storage details internally.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{LogEntry, LogFilter, NewLogEntry};

/// Repository for download log rows.
///
/// This trait is implemented by `securedl-db` and injected into the
/// download log service.
///
/// # Design Rules
///
/// - No `sqlx` types in signatures
/// - The read path tolerates unusable filters (degrades to unfiltered)
#[async_trait]
pub trait LogRepository: Send + Sync {
    /// List log entries matching `filter`, newest first.
    ///
    /// `None` returns every row. The default descending-timestamp ordering
    /// applies in every case. A filter whose constraints cannot be built is
    /// ignored rather than surfaced; the listing keeps working.
    async fn find_by_filter(
        &self,
        filter: Option<&LogFilter>,
    ) -> Result<Vec<LogEntry>, RepositoryError>;

    /// Insert one download event.
    ///
    /// The row timestamp is assigned at insert time. There is no
    /// update-or-insert behavior and no retry; storage failures propagate.
    async fn insert(&self, entry: &NewLogEntry) -> Result<(), RepositoryError>;
}
