//! Purchase plan results.
//!
//! A `PurchasePlan` is the value returned by the search: how many units of
//! each pack to buy, and what that costs and yields in total.

use crate::catalog::PackCatalog;
use serde::{Deserialize, Serialize};

/// A combination of pack purchases.
///
/// `counts` has one entry per catalog pack, in catalog order. The totals
/// always equal the counts weighted by the pack prices and yields.
///
/// # Examples
///
/// ```rust
/// use gemcalc::{search, PackCatalog};
///
/// let catalog = PackCatalog::reference();
/// let plan = search(7676.0, &catalog);
///
/// assert_eq!(plan.counts, vec![1, 0, 0]);
/// assert_eq!(plan.total_price, 15000.0);
/// assert_eq!(plan.total_gems, 7676.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchasePlan {
    /// Money paid for the whole plan.
    pub total_price: f64,

    /// Gems received from the whole plan.
    pub total_gems: f64,

    /// Units bought per pack, in catalog order.
    pub counts: Vec<u64>,
}

/// One pack's share of a plan, for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanLine {
    pub label: String,
    pub count: u64,
    pub price: f64,
    pub gems: f64,
}

impl PurchasePlan {
    /// The plan that buys nothing.
    pub fn zero(pack_count: usize) -> Self {
        Self {
            total_price: 0.0,
            total_gems: 0.0,
            counts: vec![0; pack_count],
        }
    }

    /// Build a plan from per-pack counts, computing the totals from the catalog.
    ///
    /// Missing trailing counts are treated as zero.
    pub fn from_counts(catalog: &PackCatalog, mut counts: Vec<u64>) -> Self {
        counts.resize(catalog.len(), 0);

        let mut total_price = 0.0;
        let mut total_gems = 0.0;
        for (pack, &count) in catalog.iter().zip(&counts) {
            total_price += count as f64 * pack.unit_price;
            total_gems += count as f64 * pack.gems;
        }

        Self {
            total_price,
            total_gems,
            counts,
        }
    }

    /// True when no pack is bought.
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Total number of pack units bought.
    pub fn units(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Gems left over after covering `required` gems.
    pub fn surplus(&self, required: f64) -> f64 {
        (self.total_gems - required).max(0.0)
    }

    /// Per-pack breakdown, skipping packs with a zero count.
    pub fn lines(&self, catalog: &PackCatalog) -> Vec<PlanLine> {
        catalog
            .iter()
            .zip(&self.counts)
            .filter(|&(_, &count)| count > 0)
            .map(|(pack, &count)| PlanLine {
                label: pack.label.clone(),
                count,
                price: count as f64 * pack.unit_price,
                gems: count as f64 * pack.gems,
            })
            .collect()
    }
}
