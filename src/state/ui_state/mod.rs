//! UI state management for the ParsePoint TUI.
//!
//! This module manages UI presentation concerns including:
//! - The view phase (welcome, loading, failed, loaded)
//! - The current file selection and its validation error
//! - Popup/modal state
//! - Toast notifications and the help overlay
//! - The active theme
//!
//! # Design
//!
//! The UI state is separate from navigation and data state,
//! focusing purely on presentation layer concerns.

mod file_input;
mod popups;

pub use file_input::FileInputState;
pub use popups::PopupState;

use crate::domain::{SelectionError, UploadSelection};
use crate::theme::Theme;

// ============================================================================
// View Phase
// ============================================================================

/// What the main area shows. Exactly one phase is active at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewPhase {
    /// Nothing uploaded yet.
    #[default]
    Welcome,
    /// An upload is in flight.
    Loading,
    /// The last upload failed with a user-facing message.
    Failed(String),
    /// A summary is loaded.
    Loaded,
}

impl ViewPhase {
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// The user-facing error, if the last upload failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Welcome => "Ready",
            Self::Loading => "Uploading",
            Self::Failed(_) => "Failed",
            Self::Loaded => "Loaded",
        }
    }
}

// ============================================================================
// UI State
// ============================================================================

/// UI state: phase, selection, popups, toasts and theme.
///
/// # Example
///
/// ```ignore
/// use crate::state::UiState;
///
/// let mut ui = UiState::new();
/// ui.show_toast("Copied a@x", 20);
/// ```
#[derive(Debug, Default)]
pub struct UiState {
    // === View ===
    /// Current phase of the main area.
    pub phase: ViewPhase,
    /// Active colour scheme.
    pub theme: Theme,

    // === File Selection ===
    /// Currently accepted PDF, if any.
    pub selection: Option<UploadSelection>,
    /// Why the last selection attempt was rejected.
    pub selection_error: Option<SelectionError>,

    // === Popup State ===
    /// Current popup/modal state.
    pub popup_state: PopupState,

    // === Toast Notifications ===
    /// Toast notification message and remaining ticks (non-blocking overlay).
    pub toast: Option<(String, u8)>,

    // === Help Popup ===
    /// Whether the help popup is visible.
    pub show_help: bool,
    /// Scroll offset for help popup content.
    pub help_scroll_offset: u16,
}

impl UiState {
    /// Creates a new `UiState` with the given theme.
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            ..Self::default()
        }
    }

    // ========================================================================
    // File Selection
    // ========================================================================

    /// Records the outcome of a selection attempt.
    ///
    /// An accepted file replaces the current selection and clears any prior
    /// error. A rejected one keeps the current selection and stores the error.
    pub fn apply_selection(&mut self, result: Result<UploadSelection, SelectionError>) {
        match result {
            Ok(selection) => {
                self.selection = Some(selection);
                self.selection_error = None;
            }
            Err(err) => {
                self.selection_error = Some(err);
            }
        }
    }

    /// Name of the selected file, for the header.
    #[must_use]
    pub fn selected_name(&self) -> Option<&str> {
        self.selection.as_ref().map(|s| s.name.as_str())
    }

    // ========================================================================
    // Popup Management
    // ========================================================================

    /// Returns `true` if the popup is active.
    #[must_use]
    pub fn has_active_popup(&self) -> bool {
        self.popup_state.is_active()
    }

    /// Dismisses the current popup.
    pub fn dismiss_popup(&mut self) {
        self.popup_state = PopupState::None;
    }

    /// Shows a message popup.
    ///
    /// # Arguments
    ///
    /// * `message` - The message to display
    pub fn show_message(&mut self, message: impl Into<String>) {
        self.popup_state = PopupState::Message(message.into());
    }

    /// Opens the file prompt, pre-filled with the current selection's path.
    pub fn open_file_input(&mut self) {
        let input = self
            .selection
            .as_ref()
            .map(|s| FileInputState::with_value(s.path.display().to_string()))
            .unwrap_or_default();
        self.popup_state = PopupState::FileInput(input);
    }

    /// Opens the quit confirmation popup.
    pub fn open_confirm_quit(&mut self) {
        self.popup_state = PopupState::ConfirmQuit;
    }

    // ========================================================================
    // Toast Notifications
    // ========================================================================

    /// Shows a toast notification (non-blocking overlay that auto-dismisses).
    ///
    /// Duration is in ticks (each tick is ~100ms in the main loop).
    pub fn show_toast(&mut self, message: impl Into<String>, ticks: u8) {
        self.toast = Some((message.into(), ticks));
    }

    /// Decrements the toast countdown.
    ///
    /// # Returns
    ///
    /// `true` if the toast was removed (countdown reached zero).
    pub fn tick_toast(&mut self) -> bool {
        if let Some((_, ref mut ticks)) = self.toast {
            if *ticks > 1 {
                *ticks -= 1;
                false
            } else {
                self.toast = None;
                true
            }
        } else {
            false
        }
    }

    // ========================================================================
    // Help Popup
    // ========================================================================

    /// Toggles the help popup visibility.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
        if !self.show_help {
            self.help_scroll_offset = 0;
        }
    }

    pub fn scroll_help_up(&mut self) {
        self.help_scroll_offset = self.help_scroll_offset.saturating_sub(1);
    }

    pub fn scroll_help_down(&mut self) {
        self.help_scroll_offset = self.help_scroll_offset.saturating_add(1);
    }
}

// ============================================================================
// Tests
// ============================================================================
