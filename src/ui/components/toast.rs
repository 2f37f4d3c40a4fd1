//! Toast notification component.
//!
//! Provides a non-blocking toast overlay that appears in the bottom-right corner
//! of the screen. Toast notifications style themselves from the message prefix.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    symbols::border,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::theme::Palette;

// ============================================================================
// Constants
// ============================================================================

/// Minimum width for toast notifications.
const MIN_TOAST_WIDTH: u16 = 20;

/// Height of toast notifications.
const TOAST_HEIGHT: u16 = 3;

/// Horizontal padding from the right edge.
const TOAST_PADDING_RIGHT: u16 = 2;

/// Vertical padding from the bottom edge.
const TOAST_PADDING_BOTTOM: u16 = 2;

/// Extra padding added to message length for borders and spacing.
const TOAST_WIDTH_PADDING: u16 = 4;

// ============================================================================
// Public API
// ============================================================================

/// Renders a toast notification in the bottom-right corner.
///
/// The text colour follows the message prefix:
/// - `[+]` uses the success colour
/// - `[x]` uses the error colour
/// - anything else uses the body text colour
pub fn render_toast(frame: &mut Frame, area: Rect, message: &str, palette: &Palette) {
    let toast_area = calculate_toast_position(area, message);
    if toast_area.width < 3 || toast_area.height < TOAST_HEIGHT {
        return;
    }

    frame.render_widget(Clear, toast_area);

    let toast_block = create_toast_block(palette);
    let inner_area = toast_block.inner(toast_area);
    frame.render_widget(toast_block, toast_area);

    let toast_text = Paragraph::new(message.to_string())
        .style(Style::default().fg(determine_text_color(message, palette)))
        .alignment(Alignment::Center);

    frame.render_widget(toast_text, inner_area);
}

// ============================================================================
// Internal Helpers
// ============================================================================

/// Bottom-right position sized to the message, never wider than `area`.
#[must_use]
fn calculate_toast_position(area: Rect, message: &str) -> Rect {
    let message_len = message.chars().count() as u16;
    let toast_width = (message_len + TOAST_WIDTH_PADDING)
        .min(area.width / 2)
        .max(MIN_TOAST_WIDTH)
        .min(area.width);
    let toast_height = TOAST_HEIGHT.min(area.height);

    let toast_x = area.x + area.width.saturating_sub(toast_width + TOAST_PADDING_RIGHT);
    let toast_y = area.y
        + area
            .height
            .saturating_sub(toast_height + TOAST_PADDING_BOTTOM);

    Rect::new(toast_x, toast_y, toast_width, toast_height)
}

#[must_use]
fn create_toast_block(palette: &Palette) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(palette.border_style())
        .style(palette.base())
}

#[must_use]
fn determine_text_color(message: &str, palette: &Palette) -> Color {
    if message.starts_with("[+]") {
        palette.success
    } else if message.starts_with("[x]") {
        palette.error
    } else {
        palette.text
    }
}

// ============================================================================
// Tests
// ============================================================================
