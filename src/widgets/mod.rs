//! Reusable widget components for the ParsePoint TUI.
//!
//! # Module Structure
//!
//! - [`helpers`]: Formatting of amounts, percentages and identifiers
//! - [`chart`]: Share list and stacked bar chart widgets

pub mod chart;
pub mod helpers;

pub use chart::{ShareList, StackedBarChart};
pub use helpers::{format_amount, format_percent, truncate_middle};
