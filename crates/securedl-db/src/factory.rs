//! Composition utilities for wiring the log service with `SQLite` backends.
//!
//! This module is focused purely on construction and should not contain any
//! domain logic.

use sqlx::SqlitePool;
use std::sync::Arc;

use securedl_core::{DownloadLogService, NoopResolver, ResourceResolver};

use crate::repositories::SqliteLogRepository;

/// Factory for creating repository instances with `SQLite` backends.
///
/// This struct provides composition utilities only - no domain logic.
pub struct CoreFactory;

impl CoreFactory {
    /// Create a `SQLite` connection pool.
    ///
    /// # Arguments
    ///
    /// * `db_url` - `SQLite` connection URL (e.g., "sqlite:~/.securedl/log.db")
    pub async fn create_pool(db_url: &str) -> anyhow::Result<SqlitePool> {
        let pool = SqlitePool::connect(db_url).await?;
        Ok(pool)
    }

    /// Create an in-memory `SQLite` pool for testing.
    pub async fn create_test_pool() -> anyhow::Result<SqlitePool> {
        let pool = SqlitePool::connect("sqlite::memory:").await?;
        Ok(pool)
    }

    /// Create a log repository from a pool.
    pub fn log_repository(pool: SqlitePool) -> Arc<SqliteLogRepository> {
        Arc::new(SqliteLogRepository::new(pool))
    }

    /// Build a `DownloadLogService` from a pool and a resource resolver.
    ///
    /// This is the recommended single-step way for adapters to obtain the
    /// fully wired service.
    pub fn build_log_service(
        pool: SqlitePool,
        resolver: Arc<dyn ResourceResolver>,
    ) -> DownloadLogService {
        DownloadLogService::new(Self::log_repository(pool), resolver)
    }

    /// Build a `DownloadLogService` without a CMS resource layer.
    ///
    /// Logged rows keep an empty file id.
    pub fn build_log_service_without_resolver(pool: SqlitePool) -> DownloadLogService {
        Self::build_log_service(pool, Arc::new(NoopResolver))
    }
}

/// Test database helper for integration tests.
///
/// Provides an in-memory `SQLite` database with the production schema
/// already applied.
#[cfg(any(test, feature = "test-utils"))]
pub struct TestDb {
    pool: SqlitePool,
}

#[cfg(any(test, feature = "test-utils"))]
impl TestDb {
    /// Create a new in-memory test database with full schema.
    pub async fn new() -> anyhow::Result<Self> {
        let pool = crate::setup::setup_test_database().await?;
        Ok(Self { pool })
    }

    /// Get the underlying pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create a log repository using this test database.
    pub fn log_repository(&self) -> SqliteLogRepository {
        SqliteLogRepository::new(self.pool.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use securedl_core::{FileResource, PlainToken, ResolverError};

    struct StaticResolver {
        resource: FileResource,
    }

    #[async_trait]
    impl ResourceResolver for StaticResolver {
        async fn resolve(&self, _path: &str) -> Result<Option<FileResource>, ResolverError> {
            Ok(Some(self.resource.clone()))
        }
    }

    struct OfflineResolver;

    #[async_trait]
    impl ResourceResolver for OfflineResolver {
        async fn resolve(&self, _path: &str) -> Result<Option<FileResource>, ResolverError> {
            Err(ResolverError::Lookup("storage offline".to_owned()))
        }
    }

    #[tokio::test]
    async fn logged_download_round_trips_through_sqlite() {
        let db = TestDb::new().await.unwrap();
        let service = CoreFactory::build_log_service(
            db.pool().clone(),
            Arc::new(StaticResolver {
                resource: FileResource {
                    uid: 17,
                    identifier: "/files/docs/report.pdf".to_owned(),
                },
            }),
        );

        let token = PlainToken::new("/files/docs/report.pdf", 3);
        service
            .log_download(&token, 2048, "application/pdf", Some(9))
            .await
            .unwrap();

        let entries = service.find_by_filter(None).await.unwrap();
        assert_eq!(entries.len(), 1);
        let entry = &entries[0];
        assert_eq!(entry.file_path, "/files/docs/report");
        assert_eq!(entry.file_type, "pdf");
        assert_eq!(entry.file_name, "report");
        assert_eq!(entry.media_type, "application/pdf");
        assert_eq!(entry.file_id, "17");
        assert_eq!(entry.user, Some(9));
        assert_eq!(entry.page, 3);
        assert!(entry.tstamp > 0);
    }

    #[tokio::test]
    async fn unresolved_resource_still_logs_the_download() {
        let db = TestDb::new().await.unwrap();
        let service =
            CoreFactory::build_log_service(db.pool().clone(), Arc::new(OfflineResolver));

        let token = PlainToken::new("/files/docs/report.pdf", 3);
        service
            .log_download(&token, 2048, "application/pdf", None)
            .await
            .unwrap();

        let entries = service.find_by_filter(None).await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].file_id, "");
        assert_eq!(entries[0].file_path, "/files/docs/report");
        assert_eq!(entries[0].file_size, 2048);
    }
}
