//! Application actions for ParsePoint.
//!
//! This module handles high-level actions: choosing a file, submitting an
//! upload, toggling the theme, reshuffling chart samples and clipboard
//! operations.

use std::path::Path;

use super::platform::clipboard::{self, ClipboardResult};
use super::{App, AppConfig, AppMessage, PopupState, ViewPhase};
use crate::domain::upload::normalize_dropped_path;
use crate::domain::{CHART_SAMPLE_SIZE, ChartData, UploadSelection};

impl App {
    // ========================================================================
    // File Selection
    // ========================================================================

    /// Validates `path` and makes it the current selection if it is a PDF.
    ///
    /// # Returns
    ///
    /// `true` if the file was accepted.
    pub(crate) fn select_path(&mut self, path: &Path) -> bool {
        let result = UploadSelection::from_path(path);
        match &result {
            Ok(selection) => {
                tracing::info!(
                    file = %selection.name,
                    bytes = selection.size_bytes,
                    "file selected"
                );
            }
            Err(err) => {
                tracing::info!(path = %path.display(), "selection rejected: {err}");
            }
        }
        let accepted = result.is_ok();
        self.ui.apply_selection(result);
        accepted
    }

    /// Validates the path typed into the file prompt.
    ///
    /// The prompt closes on success and stays open on rejection so the
    /// path can be corrected.
    pub(crate) fn submit_file_input(&mut self) {
        let PopupState::FileInput(input) = &self.ui.popup_state else {
            return;
        };
        let raw = normalize_dropped_path(input.value());
        if raw.is_empty() {
            return;
        }

        if self.select_path(Path::new(&raw)) {
            self.ui.dismiss_popup();
            if let Some(name) = self.ui.selected_name() {
                let message = format!("[+] Selected {name}. Press u to upload");
                self.ui.show_toast(message, 30);
            }
        }
    }

    /// Handles bracketed paste: text for the prompt, or a dropped file.
    pub(crate) fn handle_paste(&mut self, text: &str) {
        if let Some(input) = self.ui.popup_state.as_file_input_mut() {
            input.paste(text);
            return;
        }
        if self.ui.has_active_popup() || self.nav.is_any_detail_open() {
            return;
        }

        let path = normalize_dropped_path(text);
        if !path.is_empty() && self.select_path(Path::new(&path)) {
            if let Some(name) = self.ui.selected_name() {
                let message = format!("[+] Dropped {name}. Press u to upload");
                self.ui.show_toast(message, 30);
            }
        }
    }

    // ========================================================================
    // Upload
    // ========================================================================

    /// Uploads the current selection in a background task.
    ///
    /// Does nothing without a selection. A second submission while one is
    /// in flight is refused.
    pub(crate) fn submit_upload(&mut self) {
        let Some(selection) = self.ui.selection.clone() else {
            return;
        };
        if self.pending_request.is_some() {
            self.ui.show_toast("[x] Upload already in progress", 20);
            return;
        }

        self.next_request_id += 1;
        let request_id = self.next_request_id;
        self.pending_request = Some(request_id);

        self.nav.reset();
        self.data.clear();
        self.chart_data = ChartData::default();
        self.ui.phase = ViewPhase::Loading;
        tracing::info!(request_id, file = %selection.name, "upload started");

        let client = self.client.clone();
        let message_tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = client.submit(&selection).await;
            // Receiver may be dropped during shutdown - safe to ignore
            let _ = message_tx.send(AppMessage::UploadCompleted { request_id, result });
        });
    }

    // ========================================================================
    // Charts
    // ========================================================================

    /// Draws a fresh sample and recomputes chart inputs.
    pub(crate) fn resample_charts(&mut self) {
        let sample = self.data.sample(CHART_SAMPLE_SIZE, &mut self.rng);
        self.chart_data = ChartData::derive(&sample);
    }

    pub(crate) fn reshuffle_charts(&mut self) {
        if self.data.is_empty() {
            return;
        }
        self.resample_charts();
        self.ui.show_toast("Charts resampled", 10);
    }

    // ========================================================================
    // Theme
    // ========================================================================

    /// Switches between dark and light and writes the choice to disk.
    pub(crate) fn toggle_theme(&mut self) {
        self.ui.theme = self.ui.theme.toggled();
        let theme = self.ui.theme;

        let Some(path) = &self.config_path else {
            return;
        };
        match AppConfig::persist_theme(path, theme) {
            Ok(()) => tracing::debug!(theme = theme.as_str(), "theme saved"),
            Err(err) => {
                tracing::warn!("failed to save theme: {err}");
                self.ui.show_toast("[x] Could not save theme", 20);
            }
        }
    }

    // ========================================================================
    // Detail View
    // ========================================================================

    /// Opens the detail modal for the row under the cursor.
    pub(crate) fn open_detail(&mut self) {
        let index = self.nav.cursor_index();
        self.nav.select(index, self.data.len());
    }

    pub(crate) fn scroll_detail_down(&mut self) {
        let max_scroll = self
            .selected_item()
            .map_or(0, |item| item.transactions.len().saturating_sub(1));
        self.nav
            .scroll_detail_down(u16::try_from(max_scroll).unwrap_or(u16::MAX));
    }

    /// Opens the line detail modal for the statement line under the cursor.
    pub(crate) fn open_statement_detail(&mut self) {
        let index = self.nav.statement_cursor;
        self.nav.select_statement(index, self.data.statement_rows().len());
    }

    /// Copies the selected counterparty identifier to the clipboard.
    pub(crate) fn copy_selected_identifier(&mut self) {
        if let Some(identifier) = self.selected_item().map(|item| item.identifier.clone()) {
            self.copy_to_clipboard(&identifier);
        }
    }

    /// Copies the particulars of the selected statement line.
    pub(crate) fn copy_selected_particulars(&mut self) {
        if let Some(particulars) = self.selected_statement_row().map(|r| r.particulars.clone()) {
            self.copy_to_clipboard(&particulars);
        }
    }

    fn copy_to_clipboard(&mut self, text: &str) {
        let result = clipboard::copy_text(text);
        self.report_copy(text, result);
    }

    /// A failed copy opens a message popup; the text is still on screen
    /// for a manual copy.
    pub(crate) fn report_copy(&mut self, text: &str, result: ClipboardResult<()>) {
        match result {
            Ok(()) => self.ui.show_toast(format!("[+] Copied {text}"), 20),
            Err(err) => {
                tracing::warn!("clipboard copy failed: {err}");
                self.ui.show_message(format!("Could not copy to the clipboard.\n{err}"));
            }
        }
    }
}
