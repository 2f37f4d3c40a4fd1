//! Raw statement lines returned by the transactions schema.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Row, Table, TableState},
};

use crate::state::{App, TableFocus};
use crate::ui::helpers::create_border_block;
use crate::widgets::format_amount;

const DATE_WIDTH: u16 = 12;
const AMOUNT_WIDTH: u16 = 12;

/// Every statement line in service order, scrolled to keep the cursor
/// visible. Zero amounts are left blank.
pub fn render_statement(app: &App, frame: &mut Frame, area: Rect) {
    let palette = app.ui.theme.palette();
    let lines = app.data.statement_rows();
    let focused = app.nav.focus == TableFocus::Statement
        && !app.ui.has_active_popup()
        && !app.nav.is_any_detail_open();

    let title = format!("Statement ({})", lines.len());
    let block = create_border_block(&title, focused, &palette).title_bottom(
        Line::from(" Tab:Switch table ")
            .alignment(Alignment::Right)
            .style(palette.muted_style()),
    );

    let header = Row::new(vec![
        Cell::from("  Date"),
        Cell::from("Particulars"),
        Cell::from(Line::from("Withdrawal").alignment(Alignment::Right)),
        Cell::from(Line::from("Deposit").alignment(Alignment::Right)),
    ])
    .style(Style::default().fg(palette.accent).add_modifier(Modifier::BOLD));

    let amount = |value: f64, color| {
        let text = if value == 0.0 {
            String::new()
        } else {
            format_amount(value)
        };
        Cell::from(
            Line::from(text)
                .alignment(Alignment::Right)
                .style(Style::default().fg(color)),
        )
    };

    let rows: Vec<Row> = lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let marker = if focused && i == app.nav.statement_cursor {
                "▶ "
            } else {
                "  "
            };
            Row::new(vec![
                Cell::from(Line::from(vec![
                    Span::styled(marker, Style::default().fg(palette.primary)),
                    Span::styled(line.date.clone(), palette.muted_style()),
                ])),
                Cell::from(Span::styled(
                    line.particulars.clone(),
                    Style::default().fg(palette.text),
                )),
                amount(line.withdrawal, palette.error),
                amount(line.deposit, palette.success),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(DATE_WIDTH),
            Constraint::Min(12),
            Constraint::Length(AMOUNT_WIDTH),
            Constraint::Length(AMOUNT_WIDTH),
        ],
    )
    .header(header)
    .block(block)
    .column_spacing(1)
    .row_highlight_style(if focused {
        palette.selected_style()
    } else {
        Style::default()
    });

    let selected = (!lines.is_empty()).then_some(app.nav.statement_cursor);
    let mut state = TableState::default().with_selected(selected);
    frame.render_stateful_widget(table, area, &mut state);
}
