//! Domain types for the ParsePoint statement dashboard.
//!
//! # Module Organization
//!
//! - [`error`] - Selection and upload error types
//! - [`upload`] - Statement file selection and validation
//! - [`summary`] - Parsing API response types and decoding
//! - [`charts`] - Chart series derived from summary samples

// ============================================================================
// Module Declarations
// ============================================================================

pub mod charts;
pub mod error;
pub mod summary;
pub mod upload;

// ============================================================================
// Re-exports
// ============================================================================

pub use charts::{CHART_SAMPLE_SIZE, ChartData, PIE_TOP_N, PieSlice, StackedBar};
pub use error::{SelectionError, UPLOAD_FAILURE_MESSAGE, UploadError};
pub use summary::{OverallTotals, ResponseSchema, StatementRow, SummaryItem, SummaryResponse};
pub use upload::UploadSelection;
