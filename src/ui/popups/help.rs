//! Help popup showing all keybindings organized by context.
//!
//! Displays a scrollable popup with keybinding sections. Activated by '?'
//! and closed by Esc/q/?.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::theme::Palette;
use crate::ui::layout::centered_popup_area;

// ============================================================================
// Keybinding Data
// ============================================================================

const HELP_SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Global Keys",
        &[
            ("q", "Quit application"),
            ("?", "Toggle help"),
            ("o", "Open a PDF statement"),
            ("u", "Upload the selected statement"),
            ("t", "Toggle dark/light theme"),
            ("s", "Resample charts"),
            ("Ctrl+C", "Quit"),
        ],
    ),
    (
        "Summary Table",
        &[
            ("↑ / k", "Move up"),
            ("↓ / j", "Move down"),
            ("g / Home", "First row"),
            ("G / End", "Last row"),
            ("→ / n / PgDn", "Next page"),
            ("← / p / PgUp", "Previous page"),
            ("Enter", "Open details"),
            ("Tab", "Switch to the statement lines"),
        ],
    ),
    (
        "Statement Lines",
        &[
            ("↑ / ↓", "Move"),
            ("g / G", "First / last line"),
            ("Enter", "Transaction details"),
            ("c", "Copy particulars (in details)"),
            ("Tab", "Back to the summary"),
        ],
    ),
    (
        "Detail View",
        &[
            ("Esc / Enter", "Close details"),
            ("↑ / ↓", "Scroll transactions"),
            ("c", "Copy counterparty id"),
        ],
    ),
    (
        "Open Statement",
        &[
            ("Enter", "Select the typed path"),
            ("Esc", "Cancel"),
            ("← / →", "Move cursor"),
            ("Backspace", "Delete character"),
            ("Ctrl+U", "Clear the field"),
            ("Drop / paste", "Fill in a file path"),
        ],
    ),
];

/// Width of the key column.
const KEY_COLUMN: usize = 16;

// ============================================================================
// Public API
// ============================================================================

/// Renders the help popup, 70% wide and 80% tall.
///
/// `scroll_offset` is clamped to the content height.
pub fn render(frame: &mut Frame, area: Rect, scroll_offset: u16, palette: &Palette) {
    let width = (area.width * 7 / 10).max(50).min(area.width);
    let height = (area.height * 8 / 10).max(20).min(area.height);
    let popup_area = centered_popup_area(area, width, height);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Help (? to close) ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent))
        .style(palette.base());
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let lines = help_lines(inner.width, palette);
    let total_lines = lines.len() as u16;
    let visible_lines = inner.height;

    let max_scroll = total_lines.saturating_sub(visible_lines);
    let clamped_scroll = scroll_offset.min(max_scroll);

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((clamped_scroll, 0));
    frame.render_widget(paragraph, inner);

    if total_lines > visible_lines {
        render_scroll_indicator(frame, popup_area, clamped_scroll, max_scroll, palette);
    }
}

// ============================================================================
// Internal Helpers
// ============================================================================

fn help_lines(width: u16, palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for (section_title, bindings) in HELP_SECTIONS {
        lines.push(Line::from(Span::styled(
            *section_title,
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::styled(
            "─".repeat(width.saturating_sub(2) as usize),
            palette.border_style(),
        ));

        for (key, description) in *bindings {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{key:<KEY_COLUMN$}"),
                    Style::default().fg(palette.primary),
                ),
                Span::raw(*description),
            ]));
        }

        lines.push(Line::raw(""));
    }

    lines
}

fn render_scroll_indicator(
    frame: &mut Frame,
    popup_area: Rect,
    scroll: u16,
    max_scroll: u16,
    palette: &Palette,
) {
    if max_scroll == 0 || popup_area.width < 3 || popup_area.height == 0 {
        return;
    }

    let indicator = if scroll >= max_scroll {
        "━"
    } else if scroll == 0 {
        "┯"
    } else {
        "╂"
    };

    let indicator_area = Rect::new(
        popup_area.x + popup_area.width - 2,
        popup_area.y + popup_area.height - 1,
        1,
        1,
    );
    frame.render_widget(
        Paragraph::new(indicator).style(palette.muted_style()),
        indicator_area,
    );
}

// ============================================================================
// Tests
// ============================================================================
