//! Path decomposition for logged downloads.

use std::path::Path;

/// The pieces of a download path the log records separately.
///
/// `/files/docs/report.pdf` splits into directory `/files/docs`, stem
/// `report`, and extension `pdf`. The last dot separates the extension, the
/// last slash the directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathInfo {
    pub directory: String,
    pub stem: String,
    pub extension: String,
}

impl PathInfo {
    /// Split `path` into directory, stem, and extension.
    ///
    /// Missing pieces come back as empty strings.
    pub fn parse(path: &str) -> Self {
        let path = Path::new(path);
        Self {
            directory: path
                .parent()
                .map(|p| p.to_string_lossy().into_owned())
                .unwrap_or_default(),
            stem: path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default(),
            extension: path
                .extension()
                .map(|e| e.to_string_lossy().into_owned())
                .unwrap_or_default(),
        }
    }

    /// The logged `file_path` value: directory and stem, extension dropped.
    pub fn logged_path(&self) -> String {
        format!("{}/{}", self.directory, self.stem)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_directory_stem_and_extension() {
        let info = PathInfo::parse("/files/docs/report.pdf");
        assert_eq!(info.directory, "/files/docs");
        assert_eq!(info.stem, "report");
        assert_eq!(info.extension, "pdf");
        assert_eq!(info.logged_path(), "/files/docs/report");
    }

    #[test]
    fn last_dot_wins_for_multi_dot_names() {
        let info = PathInfo::parse("/data/archive.tar.gz");
        assert_eq!(info.stem, "archive.tar");
        assert_eq!(info.extension, "gz");
        assert_eq!(info.logged_path(), "/data/archive.tar");
    }

    #[test]
    fn extension_is_empty_without_a_dot() {
        let info = PathInfo::parse("/files/LICENSE");
        assert_eq!(info.directory, "/files");
        assert_eq!(info.stem, "LICENSE");
        assert_eq!(info.extension, "");
        assert_eq!(info.logged_path(), "/files/LICENSE");
    }
}
