//! Popup state types for the ParsePoint TUI.

use super::file_input::FileInputState;

// ============================================================================
// Popup State
// ============================================================================

/// Represents the current popup/modal state.
///
/// Only one popup can be active at a time. The detail modal is not a popup
/// here: it follows the navigation selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PopupState {
    /// No popup is displayed.
    #[default]
    None,
    /// "Open file" prompt.
    FileInput(FileInputState),
    /// Message/notification popup.
    Message(String),
    /// Quit confirmation popup.
    ConfirmQuit,
}

impl PopupState {
    /// Returns `true` if there is an active popup.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// Returns the file prompt state, if open.
    #[must_use]
    pub fn as_file_input_mut(&mut self) -> Option<&mut FileInputState> {
        match self {
            Self::FileInput(input) => Some(input),
            _ => None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
