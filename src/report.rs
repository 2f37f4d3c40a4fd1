//! Plain-text summary for `parsepoint summary`.

use std::fmt::Write;

use crate::state::SummaryStore;
use crate::widgets::{format_amount, truncate_middle};

const ID_WIDTH: usize = 36;
const AMOUNT_WIDTH: usize = 14;

/// Renders every counterparty, largest volume first, followed by the
/// service-reported totals.
#[must_use]
pub fn render_text(store: &SummaryStore) -> String {
    let mut out = String::new();
    let rule = "-".repeat(ID_WIDTH + 2 * AMOUNT_WIDTH + 2);

    let _ = writeln!(
        out,
        "{:<ID_WIDTH$} {:>AMOUNT_WIDTH$} {:>AMOUNT_WIDTH$}",
        "Counterparty", "Debited", "Credited"
    );
    let _ = writeln!(out, "{rule}");

    for item in store.sorted() {
        let _ = writeln!(
            out,
            "{:<ID_WIDTH$} {:>AMOUNT_WIDTH$} {:>AMOUNT_WIDTH$}",
            truncate_middle(&item.identifier, ID_WIDTH),
            format_amount(item.total_debited),
            format_amount(item.total_credited),
        );
    }

    let _ = writeln!(out, "{rule}");
    let (debited, credited) = store.totals().map_or_else(
        || ("n/a".to_string(), "n/a".to_string()),
        |t| (format_amount(t.total_debited), format_amount(t.total_credited)),
    );
    let _ = writeln!(
        out,
        "{:<ID_WIDTH$} {debited:>AMOUNT_WIDTH$} {credited:>AMOUNT_WIDTH$}",
        "Total"
    );
    let _ = writeln!(out, "Counterparties: {}", store.len());
    out
}
