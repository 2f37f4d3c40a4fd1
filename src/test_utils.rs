//! Shared test utilities and Mother pattern factories.
//!
//! Use these helpers to avoid copy-pasting setup code across tests.
#![allow(dead_code)]

use ratatui::buffer::Buffer;

use crate::domain::{OverallTotals, ResponseSchema, StatementRow, SummaryItem, SummaryResponse};
use crate::state::{App, AppConfig, StartupOptions};

// ============================================================================
// Mother Pattern Factories
// ============================================================================

pub struct SummaryItemMother;

impl SummaryItemMother {
    /// `a@x`, debited 100, credited 50, one transaction `t1`.
    #[must_use]
    pub fn single() -> SummaryItem {
        SummaryItem::new("a@x", 100.0, 50.0).with_transactions(["t1"])
    }

    /// `n` items `payee{i}@upi` with strictly decreasing volumes.
    #[must_use]
    pub fn many(n: usize) -> Vec<SummaryItem> {
        (0..n)
            .map(|i| {
                let base = (n - i) as f64;
                SummaryItem::new(format!("payee{i}@upi"), base * 10.0, base * 5.0)
                    .with_transactions([format!("UPI/{i}/payment")])
            })
            .collect()
    }
}

pub struct ResponseMother;

impl ResponseMother {
    /// One-item response with totals matching the item.
    #[must_use]
    pub fn single() -> SummaryResponse {
        SummaryResponse {
            schema: ResponseSchema::UpiSummary,
            summary: vec![SummaryItemMother::single()],
            totals: Some(OverallTotals {
                total_debited: 100.0,
                total_credited: 50.0,
            }),
            statement_rows: Vec::new(),
        }
    }

    /// Response carrying `items` and totals summed from them.
    #[must_use]
    pub fn with_items(items: Vec<SummaryItem>) -> SummaryResponse {
        let totals = OverallTotals {
            total_debited: items.iter().map(|i| i.total_debited).sum(),
            total_credited: items.iter().map(|i| i.total_credited).sum(),
        };
        SummaryResponse {
            schema: ResponseSchema::UpiSummary,
            summary: items,
            totals: Some(totals),
            statement_rows: Vec::new(),
        }
    }

    /// Response in the older transactions schema, without totals.
    #[must_use]
    pub fn transactions_schema() -> SummaryResponse {
        SummaryResponse {
            schema: ResponseSchema::Transactions,
            summary: vec![SummaryItemMother::single()],
            totals: None,
            statement_rows: vec![StatementRow {
                date: "01/04/2024".to_string(),
                particulars: "UPI/a@x/t1".to_string(),
                withdrawal: 100.0,
                deposit: 0.0,
            }],
        }
    }

    /// JSON body the service returns for [`ResponseMother::single`].
    #[must_use]
    pub fn single_json() -> &'static str {
        r#"{
            "upi_summary": [
                {"UPI": "a@x", "total_debited": 100, "total_credited": 50, "transactions": ["t1"]}
            ],
            "overall_totals": {"total_debited": 100, "total_credited": 50}
        }"#
    }
}

pub struct AppMother;

impl AppMother {
    /// Fresh app with default config, a fixed seed and no persistence.
    #[must_use]
    pub fn fresh() -> App {
        Self::with_endpoint(AppConfig::default().endpoint)
    }

    /// Fresh app posting to `endpoint` (e.g. a mockito server URL).
    #[must_use]
    pub fn with_endpoint(endpoint: impl Into<String>) -> App {
        let options = StartupOptions {
            seed: Some(7),
            endpoint: Some(endpoint.into()),
            ..StartupOptions::default()
        };
        App::with_config(AppConfig::default(), options, None)
    }

    /// App with `response` already loaded, as after a successful upload.
    #[must_use]
    pub fn loaded(response: SummaryResponse) -> App {
        let mut app = Self::fresh();
        app.pending_request = Some(1);
        app.complete_upload(1, Ok(response));
        app
    }
}

// ============================================================================
// Rendering Helpers
// ============================================================================

/// Flattens a buffer into newline-separated rows of symbols.
#[must_use]
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut result = String::with_capacity((area.width as usize + 1) * area.height as usize);
    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            result.push_str(buffer[(x, y)].symbol());
        }
        if y + 1 < area.y + area.height {
            result.push('\n');
        }
    }
    result
}
