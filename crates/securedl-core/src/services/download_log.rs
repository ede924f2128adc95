//! Download log service - thin orchestrator over the log ports.

use std::sync::Arc;

use crate::domain::{LogEntry, LogFilter, NewLogEntry, PathInfo};
use crate::ports::{DownloadToken, LogRepository, RepositoryError, ResourceResolver};

/// Service recording completed downloads and reading the log back.
///
/// Thin orchestration over the [`LogRepository`] port: derives the file
/// metadata columns from the token path, asks the [`ResourceResolver`] for
/// the stable file id, and hands the finished row to the repository.
pub struct DownloadLogService {
    repo: Arc<dyn LogRepository>,
    resolver: Arc<dyn ResourceResolver>,
}

impl DownloadLogService {
    /// Create a new download log service.
    pub fn new(repo: Arc<dyn LogRepository>, resolver: Arc<dyn ResourceResolver>) -> Self {
        Self { repo, resolver }
    }

    /// List log entries matching `filter`, newest first.
    pub async fn find_by_filter(
        &self,
        filter: Option<&LogFilter>,
    ) -> Result<Vec<LogEntry>, RepositoryError> {
        self.repo.find_by_filter(filter).await
    }

    /// Record one completed download.
    ///
    /// The token path is split into directory, base name, and extension; the
    /// logged `file_path` keeps directory and base name only. Resource
    /// resolution is best-effort: a missing or unresolvable resource leaves
    /// `file_id` empty and the row is written regardless. Insert failures
    /// propagate untouched.
    pub async fn log_download(
        &self,
        token: &dyn DownloadToken,
        file_size: i64,
        mime_type: &str,
        user: Option<i64>,
    ) -> Result<(), RepositoryError> {
        let info = PathInfo::parse(token.file());

        let file_id = match self.resolver.resolve(token.file()).await {
            Ok(Some(resource)) => resource.uid.to_string(),
            Ok(None) => String::new(),
            Err(err) => {
                tracing::debug!(path = token.file(), error = %err, "file resource not resolved");
                String::new()
            }
        };

        self.repo
            .insert(&NewLogEntry {
                file_size,
                file_path: info.logged_path(),
                file_type: info.extension,
                file_name: info.stem,
                media_type: mime_type.to_owned(),
                user,
                page: token.page(),
                file_id,
            })
            .await
    }
}
