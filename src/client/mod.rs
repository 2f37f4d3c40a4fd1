//! HTTP clients for the ParsePoint parsing API.
//!
//! # Example
//!
//! ```ignore
//! use crate::client::{HttpConfig, ParsePointClient, DEFAULT_ENDPOINT};
//!
//! let client = ParsePointClient::new(DEFAULT_ENDPOINT, ResponseSchema::UpiSummary, HttpConfig::default());
//! let summary = client.submit(&selection).await?;
//! ```

pub mod http;
pub mod parse_point;

// ============================================================================
// Re-exports
// ============================================================================

pub use http::{DEFAULT_TIMEOUT_SECS, HttpConfig};
pub use parse_point::{DEFAULT_ENDPOINT, ParsePointClient};
