//! UI rendering module for the ParsePoint TUI.
//!
//! This module provides the main rendering entry point and orchestrates
//! rendering of all UI components including panels, popups, and overlays.
//!
//! # Module Structure
//!
//! - `panels` - Main content panels (welcome, stats, tables, charts)
//! - `popups` - Modal dialogs (file prompt, details, help, messages)
//! - `components` - Reusable UI components (toast notifications)
//! - `layout` - Layout calculations and structs
//! - `header` - Header bar rendering
//! - `footer` - Footer bar rendering
//! - `helpers` - Shared helper functions for creating styled blocks

pub mod components;
pub mod footer;
pub mod header;
pub mod helpers;
pub mod layout;
pub mod panels;
pub mod popups;

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    widgets::Block,
};

use crate::state::{App, PopupState, ViewPhase};

use layout::{calculate_app_layout, calculate_dashboard_layout};

// ============================================================================
// Main Render Entry Point
// ============================================================================

/// Main render function that orchestrates all UI rendering.
///
/// Draw order, bottom to top:
/// 1. Header, main content for the current phase, footer
/// 2. The active popup, or a detail modal when none is open
/// 3. The help overlay
/// 4. Toast notifications
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();
    let palette = app.ui.theme.palette();

    frame.render_widget(Block::default().style(palette.base()), size);

    let layout = calculate_app_layout(size);
    header::render(frame, layout.header, app);
    render_main_content(app, frame, layout.main);
    footer::render(frame, layout.footer, app);

    render_popups(app, frame, size);

    if !app.ui.has_active_popup() {
        if let Some(item) = app.selected_item() {
            popups::render_detail(frame, size, item, app.nav.detail_scroll, &palette);
        } else if let Some(row) = app.selected_statement_row() {
            popups::render_statement_detail(frame, size, row, &palette);
        }
    }

    if app.ui.show_help {
        popups::render_help(frame, size, app.ui.help_scroll_offset, &palette);
    }

    if let Some((message, _)) = &app.ui.toast {
        components::render_toast(frame, size, message, &palette);
    }
}

// ============================================================================
// Internal Rendering Functions
// ============================================================================

/// Render the main content area for the current view phase.
fn render_main_content(app: &App, frame: &mut Frame, area: Rect) {
    match &app.ui.phase {
        ViewPhase::Welcome | ViewPhase::Failed(_) => panels::render_welcome(app, frame, area),
        ViewPhase::Loading => panels::render_loading(app, frame, area),
        ViewPhase::Loaded => {
            let dashboard = calculate_dashboard_layout(area);
            panels::render_stats(app, frame, dashboard.stats);
            if app.data.statement_rows().is_empty() {
                panels::render_summary_table(app, frame, dashboard.table);
            } else {
                let [summary, statement] =
                    Layout::vertical([Constraint::Percentage(50), Constraint::Percentage(50)])
                        .areas(dashboard.table);
                panels::render_summary_table(app, frame, summary);
                panels::render_statement(app, frame, statement);
            }
            panels::render_share(app, frame, dashboard.pie);
            panels::render_bars(app, frame, dashboard.bars);
        }
    }
}

/// Render popup overlays based on current popup state
fn render_popups(app: &App, frame: &mut Frame, area: Rect) {
    let palette = app.ui.theme.palette();
    match &app.ui.popup_state {
        PopupState::FileInput(input) => {
            popups::render_file_input(
                frame,
                area,
                input,
                app.ui.selection_error.as_ref(),
                &palette,
            );
        }
        PopupState::Message(message) => {
            popups::render_message(frame, area, message, &palette);
        }
        PopupState::ConfirmQuit => {
            popups::render_confirm_quit(frame, area, &palette);
        }
        PopupState::None => {}
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::AppCommand;
    use crate::domain::UPLOAD_FAILURE_MESSAGE;
    use crate::test_utils::{AppMother, ResponseMother, SummaryItemMother, buffer_to_string};
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(app: &App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    #[test]
    fn test_welcome_screen() {
        let app = AppMother::fresh();
        let content = draw(&app, 100, 30);

        assert!(content.contains("[parsepoint]"));
        assert!(content.contains("to choose a PDF"));
        assert!(content.contains("o:Open"));
        assert!(!content.contains("Total Credited"));
    }

    #[test]
    fn test_loaded_dashboard() {
        let app = AppMother::loaded(ResponseMother::single());
        let content = draw(&app, 120, 36);

        assert!(content.contains("Total Credited"));
        assert!(content.contains("Total Debited"));
        assert!(content.contains("Counterparties"));
        assert!(content.contains("a@x"));
        assert!(content.contains("Volume Share"));
        assert!(content.contains("Debit / Credit"));
        assert!(content.contains("Page 1/1"));
    }

    #[test]
    fn test_loaded_dashboard_narrow_terminal() {
        let app = AppMother::loaded(ResponseMother::with_items(SummaryItemMother::many(12)));
        let content = draw(&app, 80, 40);

        assert!(content.contains("payee0@upi"));
        assert!(content.contains("Volume Share"));
        assert!(content.contains("Page 1/2"));
    }

    #[test]
    fn test_failure_screen() {
        let mut app = AppMother::fresh();
        app.pending_request = Some(1);
        app.ui.phase = ViewPhase::Loading;
        app.complete_upload(1, Err(crate::domain::UploadError::Status { status: 500 }));
        let content = draw(&app, 100, 30);

        assert!(content.contains(UPLOAD_FAILURE_MESSAGE));
        assert!(content.contains("Failed"));
    }

    #[test]
    fn test_detail_modal_over_dashboard() {
        let mut app = AppMother::loaded(ResponseMother::single());
        app.execute_command(AppCommand::Select);
        let content = draw(&app, 120, 36);

        assert!(content.contains("Counterparty Details"));
        assert!(content.contains("Transactions (1)"));
        assert!(content.contains("t1"));
    }

    #[test]
    fn test_statement_panel_for_transactions_schema() {
        let app = AppMother::loaded(ResponseMother::transactions_schema());
        let content = draw(&app, 140, 50);

        assert!(content.contains("Statement (1)"));
        assert!(content.contains("Particulars"));
        assert!(content.contains("Withdrawal"));
        assert!(content.contains("01/04/2024"));
    }

    #[test]
    fn test_summary_only_without_statement_lines() {
        let app = AppMother::loaded(ResponseMother::single());
        let content = draw(&app, 140, 50);

        assert!(!content.contains("Statement ("));
    }

    #[test]
    fn test_statement_detail_modal() {
        let mut app = AppMother::loaded(ResponseMother::transactions_schema());
        app.execute_command(AppCommand::SwitchFocus);
        app.execute_command(AppCommand::Select);
        let content = draw(&app, 140, 50);

        assert!(content.contains("Transaction Details"));
        assert!(content.contains("Particulars  UPI/a@x/t1"));
        assert!(!content.contains("Counterparty Details"));

        app.execute_command(AppCommand::Dismiss);
        assert!(!draw(&app, 140, 50).contains("Transaction Details"));
    }

    #[test]
    fn test_popup_hides_detail_modal() {
        let mut app = AppMother::loaded(ResponseMother::single());
        app.execute_command(AppCommand::Select);
        app.ui.show_message("Clipboard not available");
        let content = draw(&app, 120, 36);

        assert!(content.contains("Clipboard not available"));
        assert!(!content.contains("Counterparty Details"));
    }

    #[test]
    fn test_help_and_toast_on_top() {
        let mut app = AppMother::fresh();
        app.execute_command(AppCommand::ToggleHelp);
        app.ui.show_toast("Charts resampled", 10);
        let content = draw(&app, 100, 40);

        assert!(content.contains("Help (? to close)"));
        assert!(content.contains("Charts resampled"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let mut app = AppMother::loaded(ResponseMother::with_items(SummaryItemMother::many(30)));
        app.execute_command(AppCommand::Select);
        app.ui.show_toast("[+] Copied payee0@upi", 10);
        draw(&app, 20, 8);

        app.ui.open_confirm_quit();
        draw(&app, 20, 8);
    }
}
