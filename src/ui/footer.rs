//! Footer rendering module for the ParsePoint TUI.
//!
//! This module provides the footer bar that displays keyboard shortcuts
//! for whatever currently has input focus.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    widgets::Paragraph,
};

use crate::commands::InputContext;
use crate::state::App;

use super::helpers::key_hints;

// ============================================================================
// Footer Rendering
// ============================================================================

/// Shortcut hints for an input context.
#[must_use]
pub fn hints_for(context: InputContext, loaded: bool) -> &'static [(&'static str, &'static str)] {
    match context {
        InputContext::Main if loaded => &[
            ("q", "Quit"),
            ("o", "Open"),
            ("u", "Upload"),
            ("←/→", "Page"),
            ("Enter", "Details"),
            ("Tab", "Table"),
            ("s", "Resample"),
            ("t", "Theme"),
            ("?", "Help"),
        ],
        InputContext::Main => &[
            ("q", "Quit"),
            ("o", "Open"),
            ("u", "Upload"),
            ("t", "Theme"),
            ("?", "Help"),
        ],
        InputContext::FileInput => &[("Enter", "Select"), ("Esc", "Cancel"), ("^U", "Clear")],
        InputContext::DetailView => &[("↑/↓", "Scroll"), ("c", "Copy"), ("Esc", "Close")],
        InputContext::StatementDetail => &[("c", "Copy"), ("Esc", "Close")],
        InputContext::HelpPopup => &[("↑/↓", "Scroll"), ("Esc", "Close")],
        InputContext::ConfirmQuit => &[("y", "Quit"), ("n", "Stay")],
        InputContext::MessagePopup => &[("Enter", "Close")],
    }
}

/// Renders the footer bar with keyboard shortcuts.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let palette = app.ui.theme.palette();
    let hints = hints_for(app.get_input_context(), app.data.is_loaded());

    let footer = Paragraph::new(key_hints(hints, &palette))
        .style(palette.base())
        .alignment(Alignment::Center);

    frame.render_widget(footer, area);
}

// ============================================================================
// Tests
// ============================================================================
