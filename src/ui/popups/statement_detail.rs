//! Detail modal for one statement line.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Wrap},
};

use crate::domain::StatementRow;
use crate::theme::Palette;
use crate::ui::helpers::{create_popup_block, render_popup_footer};
use crate::ui::layout::centered_popup_area;
use crate::widgets::format_amount;

const LABEL_WIDTH: usize = 13;

/// Renders the modal for `row`. Long particulars wrap inside the popup.
pub fn render(frame: &mut Frame, area: Rect, row: &StatementRow, palette: &Palette) {
    let width = (area.width * 6 / 10).clamp(40, 80);
    let popup_area = centered_popup_area(area, width, 12);

    let popup_block = create_popup_block("Transaction Details", palette);
    frame.render_widget(Clear, popup_area);
    frame.render_widget(popup_block.clone(), popup_area);

    let inner = popup_block.inner(popup_area);
    let body = Rect::new(
        inner.x + 1,
        inner.y,
        inner.width.saturating_sub(2),
        inner.height.saturating_sub(2),
    );
    if body.height == 0 || body.width < 10 {
        return;
    }

    let paragraph = Paragraph::new(detail_lines(row, palette)).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, body);

    render_popup_footer(frame, popup_area, &[("c", "Copy"), ("Esc", "Close")], palette);
}

fn detail_lines(row: &StatementRow, palette: &Palette) -> Vec<Line<'static>> {
    let field = |label: &str, value: String, style: Style| {
        Line::from(vec![
            Span::styled(format!("{label:<LABEL_WIDTH$}"), palette.muted_style()),
            Span::styled(value, style),
        ])
    };
    let amount = |value: f64| {
        if value == 0.0 {
            "-".to_string()
        } else {
            format_amount(value)
        }
    };
    let bold = Modifier::BOLD;

    vec![
        field("Date", row.date.clone(), Style::default().fg(palette.text)),
        field(
            "Particulars",
            row.particulars.clone(),
            Style::default().fg(palette.primary).add_modifier(bold),
        ),
        field(
            "Withdrawal",
            amount(row.withdrawal),
            Style::default().fg(palette.error).add_modifier(bold),
        ),
        field(
            "Deposit",
            amount(row.deposit),
            Style::default().fg(palette.success).add_modifier(bold),
        ),
    ]
}
