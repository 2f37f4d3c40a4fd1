//! Quit confirmation popup rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    widgets::{Clear, Paragraph},
};

use crate::theme::Palette;
use crate::ui::helpers::{create_popup_block, render_popup_footer};
use crate::ui::layout::centered_popup_area;

pub const QUIT_PROMPT: &str = "Are you sure you want to close ParsePoint?";

/// Renders the quit confirmation popup with y/n options.
pub fn render(frame: &mut Frame, area: Rect, palette: &Palette) {
    let popup_area = centered_popup_area(area, 50, 7);

    let popup_block = create_popup_block("Confirm Quit", palette);
    frame.render_widget(Clear, popup_area);
    frame.render_widget(popup_block.clone(), popup_area);

    let inner_area = popup_block.inner(popup_area);
    if inner_area.height < 2 {
        return;
    }
    let message_area = Rect::new(inner_area.x, inner_area.y + 1, inner_area.width, 1);
    frame.render_widget(
        Paragraph::new(QUIT_PROMPT).alignment(Alignment::Center),
        message_area,
    );

    render_popup_footer(frame, popup_area, &[("y", "Yes"), ("n/Esc", "No")], palette);
}

// ============================================================================
// Tests
// ============================================================================
