//! Stat cards above the summary table.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
};

use crate::state::App;
use crate::theme::Palette;
use crate::ui::helpers::create_border_block;
use crate::widgets::format_amount;
use crate::widgets::helpers::format_with_commas;

/// Shown when the response schema carries no overall totals.
const NOT_AVAILABLE: &str = "n/a";

/// Renders the three stat cards: credited, debited, counterparties.
///
/// Totals come straight from the service response, never recomputed.
pub fn render_stats(app: &App, frame: &mut Frame, area: Rect) {
    let palette = app.ui.theme.palette();
    let totals = app.data.totals();

    let credited = totals.map_or_else(
        || NOT_AVAILABLE.to_string(),
        |t| format_amount(t.total_credited),
    );
    let debited = totals.map_or_else(
        || NOT_AVAILABLE.to_string(),
        |t| format_amount(t.total_debited),
    );
    let count = format_with_commas(app.data.len() as u64);

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(area);

    render_card(frame, cards[0], "Total Credited", &credited, palette.success, &palette);
    render_card(frame, cards[1], "Total Debited", &debited, palette.error, &palette);
    render_card(frame, cards[2], "Counterparties", &count, palette.primary, &palette);
}

fn render_card(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    value: &str,
    color: Color,
    palette: &Palette,
) {
    let block = create_border_block(title, false, palette);
    let value = Paragraph::new(value.to_string())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(value, area);
}

// ============================================================================
// Tests
// ============================================================================
