//! Panel rendering for the main content area of the ParsePoint TUI.
//!
//! # Panels
//!
//! - **Welcome**: Instructions, selection errors and upload failures
//! - **Loading**: Spinner while an upload is in flight
//! - **Stats**: Total credited, total debited and counterparty count
//! - **Summary Table**: Paginated counterparties sorted by volume
//! - **Statement**: Raw statement lines, shown for the transactions schema
//! - **Charts**: Volume share and debit/credit bars for the current sample

pub mod charts;
pub mod statement;
pub mod stats;
pub mod summary_table;
pub mod welcome;

pub use charts::{render_bars, render_share};
pub use statement::render_statement;
pub use stats::render_stats;
pub use summary_table::render_summary_table;
pub use welcome::{render_loading, render_welcome};
