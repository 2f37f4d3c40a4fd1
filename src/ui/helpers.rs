//! Shared block and hint-line builders.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::theme::Palette;

// ============================================================================
// Blocks
// ============================================================================

/// Panel frame. The focused panel gets a double border and a `●` marker in
/// its title.
#[must_use]
pub fn create_border_block<'a>(title: &str, focused: bool, palette: &Palette) -> Block<'a> {
    let block = Block::new().borders(Borders::ALL).style(palette.base());
    let block = if focused {
        block
            .border_set(border::DOUBLE)
            .border_style(palette.focused_border_style())
            .title_style(palette.focused_title_style())
    } else {
        block
            .border_set(border::ROUNDED)
            .border_style(palette.border_style())
            .title_style(Style::new().fg(palette.muted).add_modifier(Modifier::BOLD))
    };

    match (title.is_empty(), focused) {
        (true, _) => block,
        (false, true) => block.title(format!(" ● {title} ")),
        (false, false) => block.title(format!(" {title} ")),
    }
}

#[must_use]
pub fn create_popup_block<'a>(title: &str, palette: &Palette) -> Block<'a> {
    Block::bordered()
        .border_set(border::ROUNDED)
        .border_style(palette.focused_border_style())
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .style(palette.base())
}

// ============================================================================
// Hints
// ============================================================================

/// Builds a `key:Label  key:Label` hint line with highlighted keys.
#[must_use]
pub fn key_hints(hints: &[(&str, &str)], palette: &Palette) -> Line<'static> {
    let key_style = Style::new().fg(palette.primary).add_modifier(Modifier::BOLD);
    let label_style = palette.muted_style();

    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (i, (key, label)) in hints.iter().enumerate() {
        let sep = if i + 1 < hints.len() { "  " } else { "" };
        spans.push(Span::styled((*key).to_string(), key_style));
        spans.push(Span::styled(format!(":{label}{sep}"), label_style));
    }
    Line::from(spans)
}

/// Draws a separator and a centered hint line along the bottom of a popup.
///
/// Occupies the last two inner rows of `popup_area`.
pub fn render_popup_footer(
    frame: &mut Frame,
    popup_area: Rect,
    hints: &[(&str, &str)],
    palette: &Palette,
) {
    if popup_area.height < 4 || popup_area.width < 3 {
        return;
    }

    let inner_width = popup_area.width - 2;
    let bottom = popup_area.bottom();
    let rule_row = Rect::new(popup_area.x + 1, bottom - 3, inner_width, 1);
    let hint_row = Rect::new(popup_area.x + 1, bottom - 2, inner_width, 1);

    let rule = Paragraph::new("─".repeat(usize::from(inner_width))).style(palette.border_style());
    frame.render_widget(rule, rule_row);
    frame.render_widget(
        Paragraph::new(key_hints(hints, palette)).alignment(Alignment::Center),
        hint_row,
    );
}

// ============================================================================
// Tests
// ============================================================================
