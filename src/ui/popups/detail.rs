//! Detail modal for one counterparty.
//!
//! Shows the identifier, its debited and credited totals, and the raw
//! transaction lines exactly as the service returned them.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
};

use crate::domain::SummaryItem;
use crate::theme::Palette;
use crate::ui::helpers::{create_border_block, create_popup_block, render_popup_footer};
use crate::ui::layout::centered_popup_area;
use crate::widgets::format_amount;

/// Rows above the transaction list: identifier, amounts, blank.
const SUMMARY_ROWS: u16 = 4;

/// Renders the detail modal for `item`.
///
/// `scroll` is the index of the first visible transaction line.
pub fn render(frame: &mut Frame, area: Rect, item: &SummaryItem, scroll: u16, palette: &Palette) {
    let width = (area.width * 8 / 10).clamp(40, 100);
    let height = (area.height * 8 / 10).max(14);
    let popup_area = centered_popup_area(area, width, height);

    let popup_block = create_popup_block("Counterparty Details", palette);
    frame.render_widget(Clear, popup_area);
    frame.render_widget(popup_block.clone(), popup_area);

    let inner = popup_block.inner(popup_area);
    // Footer separator and hints take the last two rows.
    let body = Rect::new(
        inner.x + 1,
        inner.y,
        inner.width.saturating_sub(2),
        inner.height.saturating_sub(2),
    );
    if body.height <= SUMMARY_ROWS || body.width < 10 {
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(SUMMARY_ROWS), Constraint::Min(1)])
        .split(body);

    frame.render_widget(Paragraph::new(summary_lines(item, palette)), chunks[0]);
    render_transactions(frame, chunks[1], item, scroll, palette);

    render_popup_footer(
        frame,
        popup_area,
        &[("↑/↓", "Scroll"), ("c", "Copy"), ("Esc", "Close")],
        palette,
    );
}

fn summary_lines(item: &SummaryItem, palette: &Palette) -> Vec<Line<'static>> {
    let label = palette.muted_style();
    let bold = Modifier::BOLD;

    vec![
        Line::from(vec![
            Span::styled("Counterparty  ", label),
            Span::styled(
                item.identifier.clone(),
                Style::default().fg(palette.primary).add_modifier(bold),
            ),
        ]),
        Line::from(vec![
            Span::styled("Debited       ", label),
            Span::styled(
                format_amount(item.total_debited),
                Style::default().fg(palette.error).add_modifier(bold),
            ),
        ]),
        Line::from(vec![
            Span::styled("Credited      ", label),
            Span::styled(
                format_amount(item.total_credited),
                Style::default().fg(palette.success).add_modifier(bold),
            ),
        ]),
    ]
}

fn render_transactions(
    frame: &mut Frame,
    area: Rect,
    item: &SummaryItem,
    scroll: u16,
    palette: &Palette,
) {
    let title = format!("Transactions ({})", item.transactions.len());
    let block = create_border_block(&title, false, palette);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if item.transactions.is_empty() {
        frame.render_widget(
            Paragraph::new("No transactions listed").style(palette.muted_style()),
            inner,
        );
        return;
    }

    let lines: Vec<Line> = item
        .transactions
        .iter()
        .map(|t| Line::styled(t.clone(), Style::default().fg(palette.text)))
        .collect();

    let max_scroll = item.transactions.len().saturating_sub(1) as u16;
    frame.render_widget(
        Paragraph::new(lines).scroll((scroll.min(max_scroll), 0)),
        inner,
    );
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{SummaryItemMother, buffer_to_string};
    use crate::theme::DARK;
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(item: &SummaryItem, scroll: u16) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), item, scroll, &DARK))
            .unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    /// Text inside the transaction list box, one entry per non-empty row.
    fn transaction_rows(content: &str) -> Vec<String> {
        let lines: Vec<&str> = content.lines().collect();
        let start = lines
            .iter()
            .position(|l| l.contains("Transactions ("))
            .expect("transactions box");
        lines[start + 1..]
            .iter()
            .take_while(|l| !l.contains('╰'))
            .map(|l| l.replace(['│', '╭', '╮'], "").trim().to_string())
            .filter(|l| !l.is_empty())
            .collect()
    }

    #[test]
    fn test_detail_shows_item() {
        let content = draw(&SummaryItemMother::single(), 0);

        assert!(content.contains("Counterparty Details"));
        assert!(content.contains("Counterparty  a@x"));
        assert!(content.contains("Debited       100"));
        assert!(content.contains("Credited      50"));
        assert!(content.contains("Transactions (1)"));
        assert_eq!(transaction_rows(&content), vec!["t1"]);
        assert!(content.contains("c:Copy"));
    }

    #[test]
    fn test_detail_scrolls_transactions() {
        let item =
            SummaryItem::new("b@y", 1.0, 2.0).with_transactions(["first", "second", "third"]);

        assert_eq!(transaction_rows(&draw(&item, 0))[0], "first");
        assert_eq!(transaction_rows(&draw(&item, 1))[0], "second");
        // Clamped to the last line.
        assert_eq!(transaction_rows(&draw(&item, 50)), vec!["third"]);
    }

    #[test]
    fn test_detail_without_transactions() {
        let item = SummaryItem::new("c@z", 0.0, 0.0);
        let content = draw(&item, 0);
        assert!(content.contains("No transactions listed"));
    }
}
