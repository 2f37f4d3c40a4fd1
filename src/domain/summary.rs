//! Statement summary types returned by the parsing API.
//!
//! The wire format belongs to the remote service and has changed once
//! already, so the expected shape is selected through [`ResponseSchema`]
//! rather than guessed from the body.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::error::UploadError;

/// Identifier shown for a summary entry the service left unnamed.
pub const UNIDENTIFIED: &str = "(unidentified)";

// ============================================================================
// Response Schema
// ============================================================================

/// Versioned response contract of the parsing service.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum ResponseSchema {
    /// `{ "upi_summary": [...], "overall_totals": {...} }`
    #[default]
    UpiSummary,
    /// `{ "transactions": [...], "upi_summary": [...] }` (no totals)
    Transactions,
}

impl ResponseSchema {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::UpiSummary => "upi-summary",
            Self::Transactions => "transactions",
        }
    }
}

// ============================================================================
// Summary Types
// ============================================================================

/// Aggregated debits, credits and raw transaction lines for one counterparty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryItem {
    /// Counterparty identifier (UPI handle or reference).
    #[serde(
        rename = "UPI",
        alias = "upi",
        alias = "identifier",
        deserialize_with = "identifier"
    )]
    pub identifier: String,
    #[serde(default, deserialize_with = "amount")]
    pub total_debited: f64,
    #[serde(default, deserialize_with = "amount")]
    pub total_credited: f64,
    /// Transaction descriptions exactly as the service returned them.
    #[serde(default, deserialize_with = "transaction_lines")]
    pub transactions: Vec<String>,
}

impl SummaryItem {
    #[must_use]
    pub fn new(identifier: impl Into<String>, total_debited: f64, total_credited: f64) -> Self {
        Self {
            identifier: identifier.into(),
            total_debited,
            total_credited,
            transactions: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_transactions<I, S>(mut self, transactions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.transactions = transactions.into_iter().map(Into::into).collect();
        self
    }

    /// Gross volume: debited plus credited.
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.total_debited + self.total_credited
    }
}

/// Statement-wide totals reported by the service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct OverallTotals {
    #[serde(default, deserialize_with = "amount")]
    pub total_debited: f64,
    #[serde(default, deserialize_with = "amount")]
    pub total_credited: f64,
}

/// One raw statement line (only present in the `transactions` schema).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatementRow {
    #[serde(rename = "Date", default)]
    pub date: String,
    #[serde(rename = "Particulars", default)]
    pub particulars: String,
    #[serde(rename = "Withdrawal", default, deserialize_with = "amount")]
    pub withdrawal: f64,
    #[serde(rename = "Deposit", default, deserialize_with = "amount")]
    pub deposit: f64,
}

/// Decoded body of a successful upload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryResponse {
    pub schema: ResponseSchema,
    #[serde(rename = "upi_summary")]
    pub summary: Vec<SummaryItem>,
    #[serde(rename = "overall_totals")]
    pub totals: Option<OverallTotals>,
    #[serde(rename = "transactions", skip_serializing_if = "Vec::is_empty")]
    pub statement_rows: Vec<StatementRow>,
}

// ============================================================================
// Decoding
// ============================================================================

#[derive(Deserialize)]
struct UpiSummaryBody {
    upi_summary: Vec<SummaryItem>,
    overall_totals: OverallTotals,
}

#[derive(Deserialize)]
struct TransactionsBody {
    #[serde(default)]
    transactions: Vec<StatementRow>,
    upi_summary: Vec<SummaryItem>,
}

impl SummaryResponse {
    /// Decodes a response body according to `schema`.
    ///
    /// # Errors
    ///
    /// Returns [`UploadError::Rejected`] when the body carries an `error`
    /// field and [`UploadError::Decode`] when it does not match the schema.
    pub fn decode(schema: ResponseSchema, body: &[u8]) -> Result<Self, UploadError> {
        let value: Value =
            serde_json::from_slice(body).map_err(|e| UploadError::decode(e.to_string()))?;

        if let Some(message) = value.get("error") {
            let message = message
                .as_str()
                .map_or_else(|| message.to_string(), str::to_string);
            return Err(UploadError::Rejected { message });
        }

        match schema {
            ResponseSchema::UpiSummary => {
                let body: UpiSummaryBody =
                    serde_json::from_value(value).map_err(|e| UploadError::decode(e.to_string()))?;
                Ok(Self {
                    schema,
                    summary: body.upi_summary,
                    totals: Some(body.overall_totals),
                    statement_rows: Vec::new(),
                })
            }
            ResponseSchema::Transactions => {
                let body: TransactionsBody =
                    serde_json::from_value(value).map_err(|e| UploadError::decode(e.to_string()))?;
                Ok(Self {
                    schema,
                    summary: body.upi_summary,
                    totals: None,
                    statement_rows: body.transactions,
                })
            }
        }
    }
}

// ============================================================================
// Lenient Field Decoders
// ============================================================================

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Number(f64),
    Text(String),
}

/// Parses an amount the way statement exports write them: `"1,250.00"`,
/// `""` and garbage all coerce, empty and garbage to zero. `NaN` and
/// infinities are garbage too.
#[must_use]
pub fn parse_amount(text: &str) -> f64 {
    let cleaned: String = text.trim().chars().filter(|c| *c != ',').collect();
    cleaned
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

fn amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<RawAmount> = Option::deserialize(deserializer)?;
    Ok(match raw {
        Some(RawAmount::Number(n)) => n,
        Some(RawAmount::Text(s)) => parse_amount(&s),
        None => 0.0,
    })
}

fn identifier<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| UNIDENTIFIED.to_string()))
}

fn transaction_lines<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Vec<Value>> = Option::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(|v| match v {
            Value::String(s) => s,
            Value::Null => String::new(),
            other => other.to_string(),
        })
        .collect())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const V2_BODY: &str = r#"{
        "upi_summary": [
            {"UPI": "a@x", "total_debited": 100, "total_credited": 50, "transactions": ["t1"]}
        ],
        "overall_totals": {"total_debited": 100, "total_credited": 50}
    }"#;

    #[test]
    fn test_decode_upi_summary_schema() {
        let response = SummaryResponse::decode(ResponseSchema::UpiSummary, V2_BODY.as_bytes())
            .expect("body should decode");

        assert_eq!(response.summary.len(), 1);
        let item = &response.summary[0];
        assert_eq!(item.identifier, "a@x");
        assert_eq!(item.total_debited, 100.0);
        assert_eq!(item.total_credited, 50.0);
        assert_eq!(item.transactions, vec!["t1".to_string()]);
        assert_eq!(
            response.totals,
            Some(OverallTotals {
                total_debited: 100.0,
                total_credited: 50.0
            })
        );
        assert!(response.statement_rows.is_empty());
    }

    #[test]
    fn test_decode_transactions_schema() {
        let body = r#"{
            "transactions": [
                {"Date": "01-04-2024", "Particulars": "UPI/DR/1234/shop", "Withdrawal": "1,250.50", "Deposit": ""}
            ],
            "upi_summary": [
                {"UPI": "shop", "total_debited": 1250.5, "total_credited": 0}
            ]
        }"#;

        let response = SummaryResponse::decode(ResponseSchema::Transactions, body.as_bytes())
            .expect("body should decode");

        assert_eq!(response.totals, None);
        assert_eq!(response.statement_rows.len(), 1);
        assert_eq!(response.statement_rows[0].withdrawal, 1250.5);
        assert_eq!(response.statement_rows[0].deposit, 0.0);
        assert!(response.summary[0].transactions.is_empty());
    }

    #[test]
    fn test_decode_does_not_merge_schemas() {
        // A v2 body under the v1 contract still decodes its summary but
        // never invents totals.
        let response = SummaryResponse::decode(ResponseSchema::Transactions, V2_BODY.as_bytes())
            .expect("upi_summary is shared");
        assert_eq!(response.totals, None);

        // A v1 body under the v2 contract is missing overall_totals.
        let v1 = r#"{"transactions": [], "upi_summary": []}"#;
        let err = SummaryResponse::decode(ResponseSchema::UpiSummary, v1.as_bytes()).unwrap_err();
        assert!(matches!(err, UploadError::Decode { .. }));
    }

    #[test]
    fn test_decode_error_body_is_rejected() {
        let body = r#"{"error": "No tables found in PDF"}"#;
        let err = SummaryResponse::decode(ResponseSchema::UpiSummary, body.as_bytes()).unwrap_err();
        match err {
            UploadError::Rejected { message } => assert_eq!(message, "No tables found in PDF"),
            other => panic!("Expected Rejected, got {other:?}"),
        }
    }

    #[rstest]
    #[case::not_json("<html>502</html>")]
    #[case::array("[]")]
    #[case::empty("")]
    #[case::wrong_types(r#"{"upi_summary": 3, "overall_totals": {}}"#)]
    fn test_decode_malformed_bodies(#[case] body: &str) {
        let result = SummaryResponse::decode(ResponseSchema::UpiSummary, body.as_bytes());
        assert!(matches!(result, Err(UploadError::Decode { .. })));
    }

    #[rstest]
    #[case::plain("250", 250.0)]
    #[case::thousands("1,250.75", 1250.75)]
    #[case::padded("  42.5 ", 42.5)]
    #[case::empty("", 0.0)]
    #[case::garbage("n/a", 0.0)]
    #[case::nan("NaN", 0.0)]
    #[case::infinity("inf", 0.0)]
    #[case::negative_infinity("-Infinity", 0.0)]
    fn test_parse_amount(#[case] input: &str, #[case] expected: f64) {
        assert_eq!(parse_amount(input), expected);
    }

    #[test]
    fn test_lenient_item_fields() {
        let json = r#"{"UPI": null, "total_debited": "2,000", "total_credited": null,
                       "transactions": ["a", null, 7]}"#;
        let item: SummaryItem = serde_json::from_str(json).unwrap();

        assert_eq!(item.identifier, UNIDENTIFIED);
        assert_eq!(item.total_debited, 2000.0);
        assert_eq!(item.total_credited, 0.0);
        assert_eq!(item.transactions, vec!["a", "", "7"]);
    }

    #[test]
    fn test_volume_is_gross() {
        let item = SummaryItem::new("a@x", 100.0, 50.0);
        assert_eq!(item.volume(), 150.0);
    }

    #[test]
    fn test_schema_serde_names() {
        assert_eq!(
            serde_json::to_string(&ResponseSchema::UpiSummary).unwrap(),
            "\"upi-summary\""
        );
        let schema: ResponseSchema = serde_json::from_str("\"transactions\"").unwrap();
        assert_eq!(schema, ResponseSchema::Transactions);
        assert_eq!(schema.as_str(), "transactions");
    }
}
