//! Reusable UI components for the ParsePoint TUI.
//!
//! Components are stateless: they render what they are given and own no
//! application state.
//!
//! - [`toast`] - Toast notification overlay for non-blocking messages

pub mod toast;

pub use toast::render_toast;
