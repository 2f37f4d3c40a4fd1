//! Cross-platform clipboard access.
//!
//! On Linux, external tools (`wl-copy`, `xclip`, `xsel`) are tried first
//! because they keep the content after the application exits; everything
//! else goes through `arboard`.

use thiserror::Error;

// ============================================================================
// Error Type
// ============================================================================

/// Error type for clipboard operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClipboardError {
    /// Clipboard is not available on this system.
    #[error("Clipboard not available")]
    NotAvailable,
    /// Failed to copy text to clipboard.
    #[error("Failed to copy: {0}")]
    CopyFailed(String),
}

/// Result type for clipboard operations.
pub type ClipboardResult<T> = Result<T, ClipboardError>;

// ============================================================================
// Copy
// ============================================================================

/// Copies text to the system clipboard.
///
/// # Errors
///
/// Returns an error if no clipboard is available or the copy fails.
pub fn copy_text(text: &str) -> ClipboardResult<()> {
    #[cfg(target_os = "linux")]
    if copy_with_external_tool(text).is_ok() {
        return Ok(());
    }

    copy_with_arboard(text)
}

fn copy_with_arboard(text: &str) -> ClipboardResult<()> {
    let mut clipboard = arboard::Clipboard::new().map_err(|_| ClipboardError::NotAvailable)?;
    clipboard
        .set_text(text.to_string())
        .map_err(|e| ClipboardError::CopyFailed(e.to_string()))
}

#[cfg(target_os = "linux")]
fn copy_with_external_tool(text: &str) -> ClipboardResult<()> {
    const TOOLS: &[(&str, &[&str])] = &[
        ("wl-copy", &[]),
        ("xclip", &["-selection", "clipboard"]),
        ("xsel", &["--clipboard", "--input"]),
    ];

    if TOOLS.iter().any(|(tool, args)| try_tool(tool, args, text)) {
        Ok(())
    } else {
        Err(ClipboardError::NotAvailable)
    }
}

#[cfg(target_os = "linux")]
fn try_tool(tool: &str, args: &[&str], text: &str) -> bool {
    use std::io::Write;
    use std::process::{Command, Stdio};

    let Ok(mut child) = Command::new(tool)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
    else {
        return false;
    };

    let Some(mut stdin) = child.stdin.take() else {
        return false;
    };

    if stdin.write_all(text.as_bytes()).is_err() {
        return false;
    }
    drop(stdin);

    child.wait().map(|s| s.success()).unwrap_or(false)
}

// ============================================================================
// Tests
// ============================================================================
