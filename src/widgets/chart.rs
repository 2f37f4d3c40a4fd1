//! Chart widgets for the dashboard.
//!
//! Terminals cannot draw a real pie, so slice shares are rendered as a
//! [`ShareList`]: one row per slice with a proportional bar and percentage.
//! Debit/credit volumes use [`StackedBarChart`], one horizontal bar per
//! counterparty with the debited part first.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

use crate::domain::{PieSlice, StackedBar};
use crate::theme::Palette;
use crate::widgets::helpers::{format_amount, format_percent, truncate_middle};

const BAR_CHAR: &str = "█";
const SWATCH: &str = "■";

/// Widest label column before identifiers are truncated.
const MAX_LABEL_WIDTH: u16 = 22;

fn label_width(area: Rect) -> u16 {
    (area.width / 3).clamp(6, MAX_LABEL_WIDTH)
}

fn scaled(value: f64, max: f64, width: u16) -> u16 {
    if max <= 0.0 || !value.is_finite() || value <= 0.0 {
        return 0;
    }
    let cells = (value / max * f64::from(width)).round();
    (cells as u16).min(width)
}

// ============================================================================
// ShareList
// ============================================================================

/// Proportional share rows for the top counterparties.
///
/// ```text
/// ■ a@x             ██████████████   66.7%
/// ■ b@y             ███████          33.3%
/// ```
#[derive(Debug, Clone)]
pub struct ShareList<'a> {
    slices: &'a [PieSlice],
    palette: Palette,
}

impl<'a> ShareList<'a> {
    #[must_use]
    pub const fn new(slices: &'a [PieSlice], palette: Palette) -> Self {
        Self { slices, palette }
    }

    /// Colour for the slice at `index`, cycling through the palette.
    #[must_use]
    pub const fn slice_color(palette: &Palette, index: usize) -> Color {
        let colors = [
            palette.primary,
            palette.accent,
            palette.success,
            palette.warning,
            palette.error,
        ];
        colors[index % colors.len()]
    }
}

impl Widget for ShareList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 12 || area.height == 0 {
            return;
        }

        let total: f64 = self.slices.iter().map(|s| s.value).sum();
        let label_w = label_width(area);
        let pct_w: u16 = 7;
        // swatch + space, label + space, bar, pct
        let bar_w = area.width.saturating_sub(2 + label_w + 1 + pct_w);
        if bar_w == 0 {
            return;
        }
        let text_style = Style::new().fg(self.palette.text);

        for (i, slice) in self.slices.iter().enumerate().take(area.height as usize) {
            let y = area.y + i as u16;
            let color = Self::slice_color(&self.palette, i);
            let share = if total > 0.0 { slice.value / total } else { 0.0 };

            let mut x = area.x;
            buf.set_string(x, y, SWATCH, Style::new().fg(color));
            x += 2;

            let label = truncate_middle(&slice.label, label_w as usize);
            buf.set_stringn(x, y, &label, label_w as usize, text_style);
            x += label_w + 1;

            let filled = scaled(share, 1.0, bar_w);
            if filled > 0 {
                buf.set_string(x, y, BAR_CHAR.repeat(filled as usize), Style::new().fg(color));
            }
            x += bar_w;

            let pct = format!("{:>7}", format_percent(share));
            buf.set_stringn(x, y, &pct, pct_w as usize, text_style);
        }
    }
}

// ============================================================================
// StackedBarChart
// ============================================================================

/// Horizontal stacked bars: debited then credited, scaled to the largest bar.
///
/// ```text
/// a@x        ██████████░░░░░  150
/// ```
#[derive(Debug, Clone)]
pub struct StackedBarChart<'a> {
    bars: &'a [StackedBar],
    palette: Palette,
}

impl<'a> StackedBarChart<'a> {
    #[must_use]
    pub const fn new(bars: &'a [StackedBar], palette: Palette) -> Self {
        Self { bars, palette }
    }
}

impl Widget for StackedBarChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 12 || area.height == 0 {
            return;
        }

        let max = self
            .bars
            .iter()
            .map(StackedBar::total)
            .fold(0.0_f64, f64::max);
        let label_w = label_width(area);
        let value_w: u16 = 12;
        let bar_w = area.width.saturating_sub(label_w + 1 + 1 + value_w);
        if bar_w == 0 {
            return;
        }
        let text_style = Style::new().fg(self.palette.text);
        let debit_style = Style::new().fg(self.palette.error);
        let credit_style = Style::new().fg(self.palette.success);

        for (i, bar) in self.bars.iter().enumerate().take(area.height as usize) {
            let y = area.y + i as u16;
            let mut x = area.x;

            let label = truncate_middle(&bar.label, label_w as usize);
            buf.set_stringn(x, y, &label, label_w as usize, text_style);
            x += label_w + 1;

            let whole = scaled(bar.total(), max, bar_w);
            let debit = scaled(bar.debited, max, bar_w).min(whole);
            let credit = whole - debit;
            if debit > 0 {
                buf.set_string(x, y, BAR_CHAR.repeat(debit as usize), debit_style);
            }
            if credit > 0 {
                buf.set_string(x + debit, y, BAR_CHAR.repeat(credit as usize), credit_style);
            }
            x += bar_w + 1;

            let value = format_amount(bar.total());
            buf.set_stringn(x, y, &value, value_w as usize, text_style);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::DARK;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    fn count_bar_cells(buf: &Buffer, y: u16, color: Color) -> usize {
        (0..buf.area.width)
            .filter(|&x| buf[(x, y)].symbol() == BAR_CHAR && buf[(x, y)].fg == color)
            .count()
    }

    #[test]
    fn test_scaled() {
        assert_eq!(scaled(50.0, 100.0, 20), 10);
        assert_eq!(scaled(100.0, 100.0, 20), 20);
        assert_eq!(scaled(0.0, 100.0, 20), 0);
        assert_eq!(scaled(10.0, 0.0, 20), 0);
        assert_eq!(scaled(200.0, 100.0, 20), 20);
    }

    #[test]
    fn test_share_list_rows() {
        let slices = vec![
            PieSlice {
                label: "a@x".to_string(),
                value: 150.0,
            },
            PieSlice {
                label: "b@y".to_string(),
                value: 50.0,
            },
        ];
        let area = Rect::new(0, 0, 60, 3);
        let mut buf = Buffer::empty(area);
        ShareList::new(&slices, DARK).render(area, &mut buf);

        let first = row_text(&buf, 0);
        assert!(first.contains("a@x"));
        assert!(first.contains("75.0%"));
        assert!(row_text(&buf, 1).contains("25.0%"));
        assert!(row_text(&buf, 2).trim().is_empty());

        let first_bar = count_bar_cells(&buf, 0, DARK.primary);
        let second_bar = count_bar_cells(&buf, 1, DARK.accent);
        assert!(first_bar > second_bar);
    }

    #[test]
    fn test_stacked_bars_split_debit_and_credit() {
        let bars = vec![
            StackedBar {
                label: "a@x".to_string(),
                debited: 100.0,
                credited: 100.0,
            },
            StackedBar {
                label: "b@y".to_string(),
                debited: 0.0,
                credited: 100.0,
            },
        ];
        let area = Rect::new(0, 0, 60, 2);
        let mut buf = Buffer::empty(area);
        StackedBarChart::new(&bars, DARK).render(area, &mut buf);

        let debit = count_bar_cells(&buf, 0, DARK.error);
        let credit = count_bar_cells(&buf, 0, DARK.success);
        assert!(debit > 0);
        assert_eq!(debit, credit);

        assert_eq!(count_bar_cells(&buf, 1, DARK.error), 0);
        // Half the max total: as long as row 0's credited half.
        assert_eq!(count_bar_cells(&buf, 1, DARK.success), credit);
        assert!(row_text(&buf, 0).contains("200"));
    }

    #[test]
    fn test_tiny_area_renders_nothing() {
        let bars = vec![StackedBar {
            label: "a@x".to_string(),
            debited: 1.0,
            credited: 1.0,
        }];
        let area = Rect::new(0, 0, 8, 1);
        let mut buf = Buffer::empty(area);
        StackedBarChart::new(&bars, DARK).render(area, &mut buf);
        assert!(row_text(&buf, 0).trim().is_empty());
    }
}
