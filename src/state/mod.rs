//! State management module for the ParsePoint TUI application.
//!
//! This module provides a decomposed state architecture, separating concerns into:
//!
//! - [`NavigationState`] - Page, cursor and detail selection
//! - [`SummaryStore`] - The last parsed summary and its derived views
//! - [`UiState`] - View phase, file selection, popups, toasts, theme
//! - [`AppConfig`] - Persistent configuration with load/save capabilities
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                        App                           │
//! ├─────────────────┬────────────────┬───────────────────┤
//! │ NavigationState │  SummaryStore  │      UiState      │
//! │  - page         │  - response    │  - phase          │
//! │  - cursor       │  - sorted      │  - selection      │
//! │  - selected     │  - statement   │  - popups/toasts  │
//! │  - focus        │    rows        │                   │
//! └─────────────────┴────────────────┴───────────────────┘
//! ```

use std::path::PathBuf;

use rand::rngs::StdRng;
use tokio::sync::mpsc;

use crate::client::ParsePointClient;
use crate::domain::{ChartData, ResponseSchema, SummaryResponse, UploadError};
use crate::theme::Theme;

// ============================================================================
// Module Declarations
// ============================================================================

mod app_lifecycle;

pub mod config;
pub mod data;
pub mod navigation;
pub mod platform;
pub mod ui_state;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::AppConfig;
pub use data::{PAGE_SIZE, SummaryStore};
pub use navigation::{NavigationState, TableFocus};
pub use ui_state::{FileInputState, PopupState, UiState, ViewPhase};

// ============================================================================
// App Message Types
// ============================================================================

/// Messages sent from background tasks to the main app loop.
#[derive(Debug)]
pub enum AppMessage {
    /// An upload finished. `request_id` ties it to the submission that
    /// started it.
    UploadCompleted {
        request_id: u64,
        result: Result<SummaryResponse, UploadError>,
    },
}

// ============================================================================
// Startup Options
// ============================================================================

/// Options that can be passed when starting the application.
///
/// Every field overrides the stored configuration for this session only.
#[derive(Debug, Clone, Default)]
pub struct StartupOptions {
    /// PDF to select and upload immediately.
    pub file: Option<PathBuf>,
    /// Seed for chart sampling; entropy when absent.
    pub seed: Option<u64>,
    pub theme: Option<Theme>,
    pub endpoint: Option<String>,
    pub schema: Option<ResponseSchema>,
    pub timeout_secs: Option<u64>,
}

// ============================================================================
// Main App State
// ============================================================================

/// The main application state container.
#[derive(Debug)]
pub struct App {
    // ========================================================================
    // Sub-states (decomposed concerns)
    // ========================================================================
    /// Navigation state - page, cursor, detail selection.
    pub nav: NavigationState,

    /// Data state - parsed summary.
    pub data: SummaryStore,

    /// UI state - phase, selection, popups, toasts, theme.
    pub ui: UiState,

    /// Chart inputs derived from the current random sample.
    pub chart_data: ChartData,

    // ========================================================================
    // App-level state
    // ========================================================================
    /// Whether the application should exit.
    pub exit: bool,

    /// Animation tick counter for UI animations.
    pub animation_tick: u64,

    // ========================================================================
    // Async Communication Channels
    // ========================================================================
    // NOTE: Channel sends use `let _ = tx.send(...)`: the receiver may be
    // dropped during shutdown.
    /// Sender for app messages (cloned for background tasks).
    pub(crate) message_tx: mpsc::UnboundedSender<AppMessage>,

    /// Receiver for app messages.
    pub(crate) message_rx: mpsc::UnboundedReceiver<AppMessage>,

    // ========================================================================
    // Upload
    // ========================================================================
    /// Client for the parsing service.
    pub(crate) client: ParsePointClient,

    /// Id of the in-flight upload; results for any other id are dropped.
    pub(crate) pending_request: Option<u64>,

    pub(crate) next_request_id: u64,

    /// Source of randomness for chart sampling.
    pub(crate) rng: StdRng,

    /// Where theme changes are written; `None` disables persistence.
    pub(crate) config_path: Option<PathBuf>,

    /// File passed on the command line, consumed by `run`.
    pub(crate) startup_file: Option<PathBuf>,
}

impl App {
    /// Returns `true` while an upload is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.pending_request.is_some()
    }

    /// The summary item shown in the detail modal.
    #[must_use]
    pub fn selected_item(&self) -> Option<&crate::domain::SummaryItem> {
        self.nav.selected.and_then(|index| self.data.get(index))
    }

    /// Number of rows on the current page.
    #[must_use]
    pub fn rows_on_page(&self) -> usize {
        self.data.page(self.nav.current_page).map_or(0, <[_]>::len)
    }

    /// The statement line shown in the line detail modal.
    #[must_use]
    pub fn selected_statement_row(&self) -> Option<&crate::domain::StatementRow> {
        self.nav
            .statement_selected
            .and_then(|index| self.data.statement_rows().get(index))
    }
}

// ============================================================================
// Implementation Modules
// ============================================================================

// Message processing
mod app_messages;

// Command execution, input handling
mod app_commands;

// File selection, upload, theme, clipboard actions
mod app_actions;

// ============================================================================
// Tests
// ============================================================================
