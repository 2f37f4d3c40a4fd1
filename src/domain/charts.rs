//! Chart series derived from a sample of summary items.
//!
//! Derivation is read-only: it takes a borrowed sample and produces owned
//! series the renderer can draw without touching the store.

use std::cmp::Ordering;

use super::summary::SummaryItem;

/// Number of items drawn for chart rendering.
pub const CHART_SAMPLE_SIZE: usize = 20;

/// Number of slices in the volume share chart.
pub const PIE_TOP_N: usize = 5;

// ============================================================================
// Series Types
// ============================================================================

/// One slice of the volume share chart.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    /// Gross volume (debited + credited).
    pub value: f64,
}

/// One stacked bar: debited and credited for a counterparty.
#[derive(Debug, Clone, PartialEq)]
pub struct StackedBar {
    pub label: String,
    pub debited: f64,
    pub credited: f64,
}

impl StackedBar {
    #[must_use]
    pub fn total(&self) -> f64 {
        self.debited + self.credited
    }
}

/// Everything the chart panel draws.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartData {
    /// Top [`PIE_TOP_N`] sampled items by gross volume.
    pub pie: Vec<PieSlice>,
    /// Whole sample, largest volume first.
    pub bars: Vec<StackedBar>,
}

impl ChartData {
    /// Derives both series from a sample.
    #[must_use]
    pub fn derive(sample: &[SummaryItem]) -> Self {
        let mut ordered: Vec<&SummaryItem> = sample.iter().collect();
        ordered.sort_by(|a, b| by_volume_desc(a, b));

        let pie = ordered
            .iter()
            .take(PIE_TOP_N)
            .map(|item| PieSlice {
                label: item.identifier.clone(),
                value: item.volume(),
            })
            .collect();

        let bars = ordered
            .iter()
            .map(|item| StackedBar {
                label: item.identifier.clone(),
                debited: item.total_debited,
                credited: item.total_credited,
            })
            .collect();

        Self { pie, bars }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pie.is_empty() && self.bars.is_empty()
    }

    /// Sum of all pie slice values.
    #[must_use]
    pub fn pie_total(&self) -> f64 {
        self.pie.iter().map(|s| s.value).sum()
    }

    /// Share of each slice in `[0, 1]`; all zeros when the total is zero.
    #[must_use]
    pub fn pie_shares(&self) -> Vec<f64> {
        let total = self.pie_total();
        self.pie
            .iter()
            .map(|s| if total > 0.0 { s.value / total } else { 0.0 })
            .collect()
    }

    /// Largest bar total, used to scale the bar chart.
    #[must_use]
    pub fn max_bar_total(&self) -> f64 {
        self.bars.iter().map(StackedBar::total).fold(0.0, f64::max)
    }
}

/// Descending order by gross volume. Decoded amounts are always finite.
#[must_use]
pub fn by_volume_desc(a: &SummaryItem, b: &SummaryItem) -> Ordering {
    b.volume().total_cmp(&a.volume())
}

// ============================================================================
// Tests
// ============================================================================
