//! Core domain types and port definitions for the securedl download log.
//!
//! This crate holds the pure domain: log and filter types, the generic
//! conjunctive query model, and the port traits the persistence and CMS
//! adapters implement. No storage types appear in any signature; the
//! `SQLite` adapter lives in `securedl-db`.
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod ports;
pub mod query;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{LogEntry, LogFilter, NewLogEntry, PathInfo, UserType};
pub use ports::{
    DownloadToken, FileResource, LogRepository, NoopResolver, PlainToken, RepositoryError,
    ResolverError, ResourceResolver,
};
pub use query::{Constraint, Direction, LogQuery, Ordering, QueryError, Value};
pub use services::DownloadLogService;
