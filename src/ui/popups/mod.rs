//! Popup UI components for the ParsePoint TUI.
//!
//! Popups are modal overlays drawn on top of the dashboard that take all
//! input until dismissed.

pub mod confirm;
pub mod detail;
pub mod file_input;
pub mod help;
pub mod message;
pub mod statement_detail;

pub use confirm::render as render_confirm_quit;
pub use detail::render as render_detail;
pub use file_input::render as render_file_input;
pub use help::render as render_help;
pub use message::render as render_message;
pub use statement_detail::render as render_statement_detail;
