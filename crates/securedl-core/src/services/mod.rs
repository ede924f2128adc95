//! Core services - orchestration between ports and domain logic.
//!
//! Services here are pure orchestrators; they don't know about concrete
//! implementations.

mod download_log;

pub use download_log::DownloadLogService;
