//! Message processing for the ParsePoint application.
//!
//! Background upload tasks report through [`AppMessage`]; this module applies
//! their results to the app state.

use super::{App, AppMessage, ViewPhase};
use crate::domain::{ChartData, SummaryResponse, UploadError};

impl App {
    pub(crate) fn process_messages(&mut self) {
        while let Ok(message) = self.message_rx.try_recv() {
            match message {
                AppMessage::UploadCompleted { request_id, result } => {
                    self.complete_upload(request_id, result);
                }
            }
        }
    }

    /// Applies the outcome of an upload.
    ///
    /// Results whose `request_id` does not match the pending request are
    /// stale and dropped.
    pub(crate) fn complete_upload(
        &mut self,
        request_id: u64,
        result: Result<SummaryResponse, UploadError>,
    ) {
        if self.pending_request != Some(request_id) {
            tracing::debug!(request_id, "discarding stale upload result");
            return;
        }
        self.pending_request = None;

        match result {
            Ok(response) => {
                tracing::info!(
                    request_id,
                    items = response.summary.len(),
                    "statement parsed"
                );
                self.data.load(response);
                self.nav.reset();
                self.resample_charts();
                self.ui.phase = ViewPhase::Loaded;
                let count = self.data.len();
                self.ui
                    .show_toast(format!("[+] Parsed {count} counterparties"), 20);
            }
            Err(err) => {
                tracing::warn!(request_id, "upload failed: {err}");
                self.data.clear();
                self.chart_data = ChartData::default();
                self.nav.reset();
                self.ui.phase = ViewPhase::Failed(err.user_message().to_string());
            }
        }
    }
}
