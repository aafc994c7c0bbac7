//! Pack catalog module.
//!
//! A `PackCatalog` is the ordered, read-only list of packs the search
//! chooses from. Construction validates every pack so that the search
//! can rely on positive, finite prices and yields.

use crate::error::CalcError;
use crate::pack::Pack;
use serde::Serialize;

/// An ordered, validated collection of packs.
///
/// The order is the caller's order; search results report per-pack counts
/// in this same order.
///
/// # Examples
///
/// ```rust
/// use gemcalc::{Pack, PackCatalog};
///
/// let catalog = PackCatalog::new(vec![
///     Pack::new("Large", 15000.0, 7676.0),
///     Pack::new("Medium", 7500.0, 3808.0),
///     Pack::new("Small", 4500.0, 2268.0),
/// ])
/// .unwrap();
///
/// assert_eq!(catalog.len(), 3);
/// assert_eq!(catalog.cheapest_per_gem().label, "Large");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PackCatalog {
    packs: Vec<Pack>,
}

impl PackCatalog {
    /// Build a catalog, rejecting empty lists and packs with a
    /// non-positive or non-finite price or yield.
    pub fn new(packs: Vec<Pack>) -> Result<Self, CalcError> {
        if packs.is_empty() {
            return Err(CalcError::EmptyCatalog);
        }

        for pack in &packs {
            validate_pack(pack)?;
        }

        Ok(Self { packs })
    }

    /// The three-pack catalog used as the calculator's default.
    pub fn reference() -> Self {
        Self {
            packs: vec![
                Pack::new("Large", 15000.0, 7676.0),
                Pack::new("Medium", 7500.0, 3808.0),
                Pack::new("Small", 4500.0, 2268.0),
            ],
        }
    }

    /// All packs, in catalog order.
    pub fn packs(&self) -> &[Pack] {
        &self.packs
    }

    /// Iterate over the packs in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, Pack> {
        self.packs.iter()
    }

    pub fn len(&self) -> usize {
        self.packs.len()
    }

    /// Always `false` for a constructed catalog; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.packs.is_empty()
    }

    /// The pack with the lowest price per gem.
    ///
    /// This is the theoretical best-case rate, shown next to search results
    /// as a comparison figure. Ties keep the earliest pack.
    pub fn cheapest_per_gem(&self) -> &Pack {
        let mut best = &self.packs[0];
        for pack in &self.packs[1..] {
            if pack.price_per_gem() < best.price_per_gem() {
                best = pack;
            }
        }
        best
    }
}

impl<'a> IntoIterator for &'a PackCatalog {
    type Item = &'a Pack;
    type IntoIter = std::slice::Iter<'a, Pack>;

    fn into_iter(self) -> Self::IntoIter {
        self.packs.iter()
    }
}

fn validate_pack(pack: &Pack) -> Result<(), CalcError> {
    let invalid = |reason: &str| CalcError::InvalidPack {
        label: pack.label.clone(),
        reason: reason.to_string(),
    };

    if !pack.unit_price.is_finite() || pack.unit_price <= 0.0 {
        return Err(invalid("price must be a positive number"));
    }
    if !pack.gems.is_finite() || pack.gems <= 0.0 {
        return Err(invalid("yield must be a positive number"));
    }
    Ok(())
}
