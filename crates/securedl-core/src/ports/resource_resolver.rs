//! Resource resolver port definition.
//!
//! The CMS keeps a record for every managed file. Resolving a download path
//! to that record supplies the stable id that is logged next to the raw
//! path.

use async_trait::async_trait;
use thiserror::Error;

/// A managed file or folder resource known to the CMS.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileResource {
    /// Stable unique id of the resource record.
    pub uid: i64,
    /// Storage-internal identifier, usually the path inside the storage.
    pub identifier: String,
}

/// Errors raised while looking up a resource.
#[derive(Debug, Error)]
pub enum ResolverError {
    /// The lookup itself failed (storage offline, malformed identifier, ...).
    #[error("resource lookup failed: {0}")]
    Lookup(String),
}

/// Port for mapping a file path to its managed resource record.
///
/// Returns `Ok(None)` when no record exists for the path. Callers that only
/// enrich data treat lookup errors the same as a missing record.
#[async_trait]
pub trait ResourceResolver: Send + Sync {
    /// Resolve `path` to a managed resource, if one exists.
    async fn resolve(&self, path: &str) -> Result<Option<FileResource>, ResolverError>;
}

/// Resolver that never finds anything.
///
/// For embeddings without a CMS resource layer; logged rows simply keep an
/// empty file id.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopResolver;

#[async_trait]
impl ResourceResolver for NoopResolver {
    async fn resolve(&self, _path: &str) -> Result<Option<FileResource>, ResolverError> {
        Ok(None)
    }
}
