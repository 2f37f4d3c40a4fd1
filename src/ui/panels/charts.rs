//! Chart panels drawn from the current random sample.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    widgets::Paragraph,
};

use crate::domain::PIE_TOP_N;
use crate::state::App;
use crate::ui::helpers::create_border_block;
use crate::widgets::{ShareList, StackedBarChart};

const NO_DATA: &str = "No data to chart";

/// Volume share of the top sampled counterparties.
pub fn render_share(app: &App, frame: &mut Frame, area: Rect) {
    let palette = app.ui.theme.palette();
    let title = format!("Volume Share · top {PIE_TOP_N}");
    let block = create_border_block(&title, false, &palette);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.chart_data.pie.is_empty() {
        render_empty(frame, inner, app);
        return;
    }
    frame.render_widget(ShareList::new(&app.chart_data.pie, palette), inner);
}

/// Debited versus credited for every sampled counterparty.
pub fn render_bars(app: &App, frame: &mut Frame, area: Rect) {
    let palette = app.ui.theme.palette();
    let title = format!("Debit / Credit · sample of {}", app.chart_data.bars.len());
    let block = create_border_block(&title, false, &palette);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.chart_data.bars.is_empty() {
        render_empty(frame, inner, app);
        return;
    }
    frame.render_widget(StackedBarChart::new(&app.chart_data.bars, palette), inner);
}

fn render_empty(frame: &mut Frame, area: Rect, app: &App) {
    let empty = Paragraph::new(NO_DATA)
        .style(app.ui.theme.palette().muted_style())
        .alignment(Alignment::Center);
    frame.render_widget(empty, area);
}

// ============================================================================
// Tests
// ============================================================================
