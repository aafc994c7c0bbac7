//! Purchasable gem packs.
//!
//! A `Pack` is one discrete, repeatable purchase option: a fixed price
//! that grants a fixed amount of gems.

use serde::{Deserialize, Serialize};

/// One purchase option: pay `unit_price`, receive `gems` gems.
///
/// Packs are plain values. Validation (positive, finite price and yield)
/// happens when they are collected into a [`PackCatalog`](crate::PackCatalog).
///
/// # Examples
///
/// ```rust
/// use gemcalc::Pack;
///
/// let pack = Pack::new("Large", 15000.0, 7676.0);
/// assert_eq!(pack.label, "Large");
/// assert!((pack.price_per_gem() - 15000.0 / 7676.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pack {
    /// Display name of the pack.
    pub label: String,

    /// Money paid for one unit of this pack.
    pub unit_price: f64,

    /// Gems granted by one unit of this pack.
    #[serde(alias = "yield")]
    pub gems: f64,
}

impl Pack {
    /// Create a new pack.
    pub fn new(label: impl Into<String>, unit_price: f64, gems: f64) -> Self {
        Self {
            label: label.into(),
            unit_price,
            gems,
        }
    }

    /// Money paid per gem when buying only this pack.
    pub fn price_per_gem(&self) -> f64 {
        self.unit_price / self.gems
    }
}
