//! Screen regions for the header, content, dashboard and popups.

use ratatui::layout::{Constraint, Layout, Rect};

// ============================================================================
// Constants
// ============================================================================

pub const HEADER_HEIGHT: u16 = 3;
pub const FOOTER_HEIGHT: u16 = 1;
pub const STATS_HEIGHT: u16 = 3;

/// Below this width the charts stack under the table instead of beside it.
pub const WIDE_LAYOUT_MIN_WIDTH: u16 = 100;

/// Share chart rows: borders plus one row per slice.
const SHARE_HEIGHT: u16 = 7;

/// Margin kept around a popup on every side, in cells.
const POPUP_MARGIN: u16 = 2;

// ============================================================================
// Regions
// ============================================================================

#[derive(Debug, Clone, Copy)]
pub struct AppLayout {
    pub header: Rect,
    pub main: Rect,
    /// One row of key hints.
    pub footer: Rect,
}

/// Regions of the loaded dashboard.
#[derive(Debug, Clone, Copy)]
pub struct DashboardLayout {
    pub stats: Rect,
    pub table: Rect,
    pub pie: Rect,
    pub bars: Rect,
}

#[must_use]
pub fn calculate_app_layout(area: Rect) -> AppLayout {
    let [header, main, footer] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(FOOTER_HEIGHT),
    ])
    .areas(area);

    AppLayout {
        header,
        main,
        footer,
    }
}

/// Stat cards on top; below them the table with the charts either to its
/// right (wide terminals) or underneath it.
#[must_use]
pub fn calculate_dashboard_layout(area: Rect) -> DashboardLayout {
    let [stats, body] =
        Layout::vertical([Constraint::Length(STATS_HEIGHT), Constraint::Min(5)]).areas(area);

    let (table, pie, bars) = if area.width >= WIDE_LAYOUT_MIN_WIDTH {
        let [table, charts] =
            Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
                .areas(body);
        let [pie, bars] =
            Layout::vertical([Constraint::Length(SHARE_HEIGHT), Constraint::Min(4)])
                .areas(charts);
        (table, pie, bars)
    } else {
        let [table, pie, bars] = Layout::vertical([
            Constraint::Min(8),
            Constraint::Length(SHARE_HEIGHT),
            Constraint::Length(8),
        ])
        .areas(body);
        (table, pie, bars)
    };

    DashboardLayout {
        stats,
        table,
        pie,
        bars,
    }
}

/// A `width` x `height` rect centred in `parent`, shrunk to leave
/// [`POPUP_MARGIN`] cells free on each side.
#[must_use]
pub fn centered_popup_area(parent: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(parent.width.saturating_sub(2 * POPUP_MARGIN));
    let h = height.min(parent.height.saturating_sub(2 * POPUP_MARGIN));

    Rect {
        x: parent.x + parent.width.saturating_sub(w) / 2,
        y: parent.y + parent.height.saturating_sub(h) / 2,
        width: w,
        height: h,
    }
}
