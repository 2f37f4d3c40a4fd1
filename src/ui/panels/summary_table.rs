//! Paginated summary table.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table, TableState},
};

use crate::state::{App, PAGE_SIZE, TableFocus};
use crate::ui::helpers::create_border_block;
use crate::widgets::{format_amount, truncate_middle};

/// Width reserved for each amount column.
const AMOUNT_WIDTH: u16 = 14;

/// Renders the current page of the summary, largest volume first.
///
/// The row under the cursor carries a `▶` indicator; the block's bottom
/// border shows `Page x/y`.
pub fn render_summary_table(app: &App, frame: &mut Frame, area: Rect) {
    let palette = app.ui.theme.palette();
    let focused = app.nav.focus == TableFocus::Summary
        && !app.ui.has_active_popup()
        && !app.nav.is_any_detail_open();
    let page_count = app.data.page_count();

    let block = create_border_block("Counterparties", focused, &palette).title_bottom(
        Line::from(format!(" Page {}/{} ", app.nav.current_page, page_count.max(1)))
            .alignment(Alignment::Right)
            .style(palette.muted_style()),
    );
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(items) = app.data.page(app.nav.current_page).filter(|p| !p.is_empty()) else {
        let empty = Paragraph::new("No counterparties in this statement")
            .style(palette.muted_style())
            .alignment(Alignment::Center);
        frame.render_widget(empty, inner);
        return;
    };

    let id_width = inner
        .width
        .saturating_sub(2 * AMOUNT_WIDTH + 4)
        .max(8) as usize;
    let header_style = Style::default()
        .fg(palette.accent)
        .add_modifier(Modifier::BOLD);
    let header = Row::new(vec![
        Cell::from("  Counterparty"),
        Cell::from(Line::from("Debited").alignment(Alignment::Right)),
        Cell::from(Line::from("Credited").alignment(Alignment::Right)),
    ])
    .style(header_style)
    .bottom_margin(1);

    let rows: Vec<Row> = items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let indicator = if i == app.nav.cursor { "▶ " } else { "  " };
            Row::new(vec![
                Cell::from(Line::from(vec![
                    Span::styled(indicator, Style::default().fg(palette.primary)),
                    Span::styled(
                        truncate_middle(&item.identifier, id_width),
                        Style::default().fg(palette.text),
                    ),
                ])),
                Cell::from(
                    Line::from(format_amount(item.total_debited))
                        .alignment(Alignment::Right)
                        .style(Style::default().fg(palette.error)),
                ),
                Cell::from(
                    Line::from(format_amount(item.total_credited))
                        .alignment(Alignment::Right)
                        .style(Style::default().fg(palette.success)),
                ),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Min(10),
            Constraint::Length(AMOUNT_WIDTH),
            Constraint::Length(AMOUNT_WIDTH),
        ],
    )
    .header(header)
    .column_spacing(1)
    .row_highlight_style(palette.selected_style());

    let mut state = TableState::default().with_selected(Some(app.nav.cursor.min(PAGE_SIZE - 1)));
    frame.render_stateful_widget(table, inner, &mut state);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::AppCommand;
    use crate::test_utils::{AppMother, ResponseMother, SummaryItemMother, buffer_to_string};
    use ratatui::{Terminal, backend::TestBackend};

    fn render_table(app: &App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render_summary_table(app, frame, frame.area()))
            .unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    #[test]
    fn test_single_row_shows_amounts() {
        let app = AppMother::loaded(ResponseMother::single());
        let content = render_table(&app, 60, 8);

        let row = content
            .lines()
            .find(|line| line.contains("a@x"))
            .expect("row for a@x");
        let fields: Vec<&str> = row
            .trim_matches(|c| c == '║' || c == '│' || c == ' ')
            .split_whitespace()
            .collect();
        assert_eq!(fields, vec!["▶", "a@x", "100", "50"]);
        assert!(content.contains("Page 1/1"));
    }

    #[test]
    fn test_page_shows_at_most_page_size_rows() {
        let app = AppMother::loaded(ResponseMother::with_items(SummaryItemMother::many(23)));
        let content = render_table(&app, 60, 20);

        let rows = content.lines().filter(|l| l.contains("@upi")).count();
        assert_eq!(rows, PAGE_SIZE);
        assert!(content.contains("payee0@upi"));
        assert!(!content.contains("payee10@upi"));
        assert!(content.contains("Page 1/3"));
    }

    #[test]
    fn test_last_page_after_navigation() {
        let mut app = AppMother::loaded(ResponseMother::with_items(SummaryItemMother::many(23)));
        app.execute_command(AppCommand::NextPage);
        app.execute_command(AppCommand::NextPage);
        let content = render_table(&app, 60, 20);

        assert_eq!(content.lines().filter(|l| l.contains("@upi")).count(), 3);
        assert!(content.contains("payee22@upi"));
        assert!(content.contains("Page 3/3"));
    }

    #[test]
    fn test_empty_summary_message() {
        let app = AppMother::loaded(ResponseMother::with_items(Vec::new()));
        let content = render_table(&app, 60, 8);
        assert!(content.contains("No counterparties"));
        assert!(content.contains("Page 1/1"));
    }
}
