//! Download token seam.
//!
//! Tokens are issued and validated upstream; by the time one reaches this
//! layer it is trusted. The log only reads the file path and the page
//! context.

/// An upstream-validated handle authorizing access to one file.
pub trait DownloadToken: Send + Sync {
    /// Path of the file the token grants access to.
    fn file(&self) -> &str;

    /// Id of the page the download was initiated from.
    fn page(&self) -> i64;
}

/// Minimal owned token, for tests and embeddings without a token pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlainToken {
    file: String,
    page: i64,
}

impl PlainToken {
    /// Create a token for `file` in the context of `page`.
    pub fn new(file: impl Into<String>, page: i64) -> Self {
        Self {
            file: file.into(),
            page,
        }
    }
}

impl DownloadToken for PlainToken {
    fn file(&self) -> &str {
        &self.file
    }

    fn page(&self) -> i64 {
        self.page
    }
}
