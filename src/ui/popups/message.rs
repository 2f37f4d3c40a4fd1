//! Free-form message popup.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    widgets::{Clear, Paragraph, Wrap},
};

use crate::theme::Palette;
use crate::ui::helpers::{create_popup_block, render_popup_footer};
use crate::ui::layout::centered_popup_area;

const MIN_WIDTH: u16 = 40;
const MIN_HEIGHT: u16 = 6;

/// Sized to the longest line of `message`, capped at 80% of `area`'s width.
pub fn render(frame: &mut Frame, area: Rect, message: &str, palette: &Palette) {
    let (rows, widest) = message.lines().fold((0u16, 0u16), |(rows, widest), line| {
        let width = u16::try_from(line.chars().count()).unwrap_or(u16::MAX);
        (rows.saturating_add(1), widest.max(width))
    });

    let width = MIN_WIDTH
        .max(widest.saturating_add(6))
        .min(area.width * 8 / 10);
    let height = MIN_HEIGHT.max(rows.max(1).saturating_add(4));
    let popup_area = centered_popup_area(area, width, height);

    let block = create_popup_block("Message", palette);
    let inner = block.inner(popup_area);
    frame.render_widget(Clear, popup_area);
    frame.render_widget(block, popup_area);

    let body = Rect {
        height: inner.height.saturating_sub(2),
        ..inner
    };
    frame.render_widget(
        Paragraph::new(message.to_string())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        body,
    );

    render_popup_footer(frame, popup_area, &[("Esc", "Close"), ("Enter", "Close")], palette);
}

// ============================================================================
// Tests
// ============================================================================
