//! Error types for statement selection and upload.
//!
//! Every error is terminal for the current attempt. The UI shows a single
//! message for each; upload failures always surface the same generic text
//! while the underlying cause goes to the log.

use thiserror::Error;

/// User-facing message for any failed upload.
pub const UPLOAD_FAILURE_MESSAGE: &str = "Failed to process the PDF. Please try again.";

// ============================================================================
// Selection Errors
// ============================================================================

/// Errors raised while picking a statement file, before anything is sent.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SelectionError {
    /// The file is not a PDF.
    #[error("'{name}' is not a PDF file. Please choose a .pdf statement.")]
    InvalidFileType {
        /// File name as given by the user.
        name: String,
    },

    /// The path does not exist or its metadata cannot be read.
    #[error("File not found: {path}")]
    NotFound {
        /// Path as given by the user.
        path: String,
    },

    /// The path points at something other than a regular file.
    #[error("'{path}' is not a file")]
    NotAFile {
        /// Path as given by the user.
        path: String,
    },
}

impl SelectionError {
    #[must_use]
    pub fn invalid_file_type(name: impl Into<String>) -> Self {
        Self::InvalidFileType { name: name.into() }
    }

    #[must_use]
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound { path: path.into() }
    }
}

// ============================================================================
// Upload Errors
// ============================================================================

/// Errors raised by a submission to the parsing API.
#[derive(Debug, Error)]
pub enum UploadError {
    /// The statement bytes could not be read from disk.
    #[error("Could not read statement: {0}")]
    Io(#[from] std::io::Error),

    /// Transport-level failure (DNS, TLS, connection reset, timeout).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The service answered with a non-2xx status.
    #[error("Parsing service returned HTTP {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },

    /// The service reported a processing error in its body.
    #[error("Parsing service rejected the statement: {message}")]
    Rejected {
        /// The `error` field of the response body.
        message: String,
    },

    /// The body did not match the configured response schema.
    #[error("Unexpected response body: {message}")]
    Decode {
        /// Decoder message.
        message: String,
    },
}

impl UploadError {
    #[must_use]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// The message shown to the user, whatever the cause.
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        UPLOAD_FAILURE_MESSAGE
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_error_display() {
        let err = SelectionError::invalid_file_type("notes.txt");
        assert_eq!(
            err.to_string(),
            "'notes.txt' is not a PDF file. Please choose a .pdf statement."
        );

        let err = SelectionError::not_found("/tmp/missing.pdf");
        assert_eq!(err.to_string(), "File not found: /tmp/missing.pdf");
    }

    #[test]
    fn test_upload_error_user_message_is_generic() {
        let errors = [
            UploadError::Status { status: 500 },
            UploadError::decode("missing field `upi_summary`"),
            UploadError::Rejected {
                message: "No tables found in PDF".to_string(),
            },
            UploadError::Io(std::io::Error::other("disk")),
        ];

        for err in &errors {
            assert_eq!(err.user_message(), UPLOAD_FAILURE_MESSAGE);
        }
    }

    #[test]
    fn test_upload_error_display_keeps_cause() {
        let err = UploadError::Status { status: 502 };
        assert_eq!(err.to_string(), "Parsing service returned HTTP 502");
    }
}
