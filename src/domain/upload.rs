//! Statement file selection.
//!
//! A selection is built from file metadata only; the bytes are read later,
//! asynchronously, when the upload is submitted.

use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

use super::error::SelectionError;

/// MIME type declared for every accepted statement.
pub const PDF_MIME: &str = "application/pdf";

/// Accepted file extension (compared case-insensitively).
pub const PDF_EXTENSION: &str = "pdf";

// ============================================================================
// UploadSelection
// ============================================================================

/// A validated statement file waiting to be uploaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadSelection {
    /// Absolute or user-relative path to the file.
    pub path: PathBuf,
    /// File name shown in the header and sent in the multipart part.
    pub name: String,
    /// Size on disk in bytes.
    pub size_bytes: u64,
    /// Declared MIME type.
    pub mime: &'static str,
}

impl UploadSelection {
    /// Validates `path` as a PDF statement.
    ///
    /// The extension is checked before touching the filesystem so a
    /// non-PDF is always reported as [`SelectionError::InvalidFileType`].
    ///
    /// # Errors
    ///
    /// Returns a [`SelectionError`] when the file is not a PDF, does not
    /// exist, or is not a regular file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SelectionError> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        if !is_pdf_name(&name) {
            return Err(SelectionError::invalid_file_type(name));
        }

        let metadata =
            fs::metadata(path).map_err(|_| SelectionError::not_found(path.display().to_string()))?;
        if !metadata.is_file() {
            return Err(SelectionError::NotAFile {
                path: path.display().to_string(),
            });
        }

        Ok(Self {
            path: path.to_path_buf(),
            name,
            size_bytes: metadata.len(),
            mime: PDF_MIME,
        })
    }

    /// Human-readable size, e.g. `"1.2 MB"`.
    #[must_use]
    pub fn size_label(&self) -> String {
        format_size(self.size_bytes)
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Returns `true` if the file name carries a `.pdf` extension.
#[must_use]
pub fn is_pdf_name(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(PDF_EXTENSION))
}

/// Normalises a path typed or dropped into the terminal.
///
/// Terminals paste dropped files in several shapes: wrapped in quotes,
/// as `file://` URIs, or with shell-escaped spaces. Only the first line is
/// considered. Percent escapes are decoded for URIs only; a URI that does
/// not decode to UTF-8 is kept as written.
#[must_use]
pub fn normalize_dropped_path(raw: &str) -> String {
    let line = raw.lines().next().unwrap_or_default().trim();

    let unquoted = line
        .strip_prefix('\'')
        .and_then(|s| s.strip_suffix('\''))
        .or_else(|| line.strip_prefix('"').and_then(|s| s.strip_suffix('"')))
        .unwrap_or(line);

    if let Some(uri_path) = unquoted.strip_prefix("file://") {
        return urlencoding::decode(uri_path)
            .map(Cow::into_owned)
            .unwrap_or_else(|_| uri_path.to_string());
    }

    unquoted.replace("\\ ", " ")
}

/// Formats a byte count with binary-ish units.
#[must_use]
pub fn format_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;

    let b = bytes as f64;
    if b >= MB {
        format!("{:.1} MB", b / MB)
    } else if b >= KB {
        format!("{:.1} KB", b / KB)
    } else {
        format!("{bytes} B")
    }
}

// ============================================================================
// Tests
// ============================================================================
