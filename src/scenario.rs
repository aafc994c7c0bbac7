//! Expected-cost scenarios.
//!
//! Each scenario turns its own inputs into a real-valued gem requirement
//! with one closed-form expression, then asks the search for the cheapest
//! way to buy that many gems. Only expected values are computed.

use crate::catalog::PackCatalog;
use crate::error::CalcError;
use crate::plan::PurchasePlan;
use crate::search::{check_requirement, required_gems, search, MAX_REQUIREMENT};
use serde::{Deserialize, Serialize};

/// Smallest success probability used in a division.
pub const MIN_PROBABILITY: f64 = 1e-9;

/// A way of acquiring target items, priced in gems.
///
/// # Examples
///
/// ```rust
/// use gemcalc::{PackCatalog, Scenario};
///
/// // A 1% item, 300 gems per draw: 100 expected draws, 30000 gems.
/// let gacha = Scenario::SingleTarget { probability: 0.01, gems_per_draw: 300.0 };
/// assert!((gacha.requirement().unwrap() - 30000.0).abs() < 1e-6);
///
/// let estimate = gacha.estimate(&PackCatalog::reference()).unwrap();
/// assert!(estimate.plan.total_gems >= 30000.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Scenario {
    /// Buy items outright at a fixed gem price each.
    Direct { gems_per_item: f64, quantity: f64 },

    /// Draw until one specific item appears.
    SingleTarget { probability: f64, gems_per_draw: f64 },

    /// Draw until `copies` copies of an item have appeared.
    MultiCopy {
        copies: f64,
        probability: f64,
        gems_per_draw: f64,
    },
}

impl Scenario {
    /// Expected number of draws, or `None` for direct purchases.
    pub fn expected_draws(&self) -> Option<f64> {
        match *self {
            Scenario::Direct { .. } => None,
            Scenario::SingleTarget { probability, .. } => Some(1.0 / clamp_probability(probability)),
            Scenario::MultiCopy {
                copies,
                probability,
                ..
            } => Some(non_negative(copies) / clamp_probability(probability)),
        }
    }

    /// Gems needed for this scenario, before rounding.
    ///
    /// Negative counts and prices are treated as zero and probabilities are
    /// clamped into `[MIN_PROBABILITY, 1]`, so the only failures are a result
    /// that overflows to infinity or comes from NaN inputs, and one above
    /// [`MAX_REQUIREMENT`].
    pub fn requirement(&self) -> Result<f64, CalcError> {
        let gems = match *self {
            Scenario::Direct {
                gems_per_item,
                quantity,
            } => non_negative(gems_per_item) * non_negative(quantity),
            Scenario::SingleTarget { gems_per_draw, .. }
            | Scenario::MultiCopy { gems_per_draw, .. } => {
                self.expected_draws().unwrap_or(0.0) * non_negative(gems_per_draw)
            }
        };

        if !gems.is_finite() {
            Err(CalcError::NonFiniteRequirement(gems))
        } else if gems > MAX_REQUIREMENT {
            Err(CalcError::RequirementTooLarge {
                requirement: gems,
                limit: MAX_REQUIREMENT,
            })
        } else {
            Ok(gems)
        }
    }

    /// Price this scenario against a catalog.
    pub fn estimate(&self, catalog: &PackCatalog) -> Result<Estimate, CalcError> {
        let requirement = self.requirement()?;
        check_requirement(requirement, catalog)?;
        let gems_needed = required_gems(requirement);
        let plan = search(requirement, catalog);
        let ideal_price = gems_needed as f64 * catalog.cheapest_per_gem().price_per_gem();

        tracing::debug!(
            scenario = ?self,
            requirement,
            price = plan.total_price,
            "scenario estimated"
        );

        Ok(Estimate {
            scenario: *self,
            requirement,
            gems_needed,
            plan,
            ideal_price,
        })
    }
}

/// A scenario priced against a catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Estimate {
    pub scenario: Scenario,

    /// Gems needed, as computed by the scenario formula.
    pub requirement: f64,

    /// The requirement rounded up to whole gems.
    pub gems_needed: u64,

    /// Cheapest pack combination covering `gems_needed`.
    pub plan: PurchasePlan,

    /// `gems_needed` priced at the best price-per-gem in the catalog,
    /// as if gems could be bought one at a time.
    pub ideal_price: f64,
}

impl Estimate {
    /// Gems bought beyond what the scenario needs.
    pub fn surplus(&self) -> f64 {
        self.plan.surplus(self.gems_needed as f64)
    }
}

/// Which of two compared options is cheaper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Choice {
    Direct,
    Gacha,
    Even,
}

/// Buying directly versus drawing, priced side by side.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub direct: Estimate,
    pub gacha: Estimate,
}

impl Comparison {
    /// The option with the lower plan price.
    pub fn cheaper(&self) -> Choice {
        let direct = self.direct.plan.total_price;
        let gacha = self.gacha.plan.total_price;
        if direct < gacha {
            Choice::Direct
        } else if gacha < direct {
            Choice::Gacha
        } else {
            Choice::Even
        }
    }

    /// Absolute price difference between the two plans.
    pub fn savings(&self) -> f64 {
        (self.direct.plan.total_price - self.gacha.plan.total_price).abs()
    }
}

/// Price a direct purchase and a gacha scenario against the same catalog.
pub fn compare(
    direct: &Scenario,
    gacha: &Scenario,
    catalog: &PackCatalog,
) -> Result<Comparison, CalcError> {
    Ok(Comparison {
        direct: direct.estimate(catalog)?,
        gacha: gacha.estimate(catalog)?,
    })
}

fn clamp_probability(p: f64) -> f64 {
    if p.is_nan() {
        return p;
    }
    p.clamp(MIN_PROBABILITY, 1.0)
}

fn non_negative(x: f64) -> f64 {
    if x < 0.0 {
        0.0
    } else {
        x
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pack::Pack;

    #[test]
    fn test_direct_requirement() {
        let direct = Scenario::Direct {
            gems_per_item: 2500.0,
            quantity: 3.0,
        };
        assert_eq!(direct.requirement().unwrap(), 7500.0);
        assert_eq!(direct.expected_draws(), None);
    }

    #[test]
    fn test_multi_copy_requirement() {
        let scenario = Scenario::MultiCopy {
            copies: 5.0,
            probability: 0.02,
            gems_per_draw: 150.0,
        };
        assert!((scenario.expected_draws().unwrap() - 250.0).abs() < 1e-9);
        assert!((scenario.requirement().unwrap() - 37500.0).abs() < 1e-6);
    }

    #[test]
    fn test_zero_probability_is_clamped() {
        let scenario = Scenario::SingleTarget {
            probability: 0.0,
            gems_per_draw: 1.0,
        };
        let requirement = scenario.requirement().unwrap();
        assert!(requirement.is_finite());
        assert!((requirement - 1.0 / MIN_PROBABILITY).abs() < 1.0);
    }

    #[test]
    fn test_probability_above_one_is_clamped() {
        let scenario = Scenario::SingleTarget {
            probability: 3.0,
            gems_per_draw: 300.0,
        };
        assert_eq!(scenario.requirement().unwrap(), 300.0);
    }

    #[test]
    fn test_negative_inputs_clamp_to_zero() {
        let scenario = Scenario::Direct {
            gems_per_item: -10.0,
            quantity: 4.0,
        };
        assert_eq!(scenario.requirement().unwrap(), 0.0);
    }

    #[test]
    fn test_nan_requirement_rejected() {
        let scenario = Scenario::SingleTarget {
            probability: f64::NAN,
            gems_per_draw: 300.0,
        };
        assert!(matches!(
            scenario.requirement(),
            Err(CalcError::NonFiniteRequirement(_))
        ));
    }

    #[test]
    fn test_overflow_rejected() {
        let scenario = Scenario::Direct {
            gems_per_item: f64::MAX,
            quantity: 10.0,
        };
        assert_eq!(
            scenario.requirement(),
            Err(CalcError::NonFiniteRequirement(f64::INFINITY))
        );
    }

    #[test]
    fn test_requirement_above_limit_rejected() {
        let scenario = Scenario::Direct {
            gems_per_item: 1e20,
            quantity: 1.0,
        };
        assert_eq!(
            scenario.requirement(),
            Err(CalcError::RequirementTooLarge {
                requirement: 1e20,
                limit: MAX_REQUIREMENT,
            })
        );
    }

    #[test]
    fn test_estimate_checks_catalog_limit() {
        // Under the global limit, but more half-gem packs than a plan may hold.
        let catalog = PackCatalog::new(vec![Pack::new("Tiny", 1.0, 0.5)]).unwrap();
        let scenario = Scenario::Direct {
            gems_per_item: 5e15,
            quantity: 1.0,
        };
        assert!(scenario.requirement().is_ok());
        assert!(matches!(
            scenario.estimate(&catalog),
            Err(CalcError::RequirementTooLarge { .. })
        ));
    }

    #[test]
    fn test_estimate_ideal_price() {
        let catalog = PackCatalog::reference();
        let direct = Scenario::Direct {
            gems_per_item: 7676.0,
            quantity: 1.0,
        };
        let estimate = direct.estimate(&catalog).unwrap();
        assert_eq!(estimate.gems_needed, 7676);
        assert!((estimate.ideal_price - 15000.0).abs() < 1e-6);
        assert_eq!(estimate.plan.total_price, 15000.0);
        assert_eq!(estimate.surplus(), 0.0);
    }

    #[test]
    fn test_compare_picks_cheaper() {
        let catalog = PackCatalog::reference();
        let direct = Scenario::Direct {
            gems_per_item: 2000.0,
            quantity: 1.0,
        };
        let gacha = Scenario::SingleTarget {
            probability: 0.01,
            gems_per_draw: 300.0,
        };
        let comparison = compare(&direct, &gacha, &catalog).unwrap();
        assert_eq!(comparison.cheaper(), Choice::Direct);
        assert_eq!(
            comparison.savings(),
            comparison.gacha.plan.total_price - comparison.direct.plan.total_price
        );
    }

    #[test]
    fn test_compare_even() {
        let catalog = PackCatalog::reference();
        let a = Scenario::Direct {
            gems_per_item: 100.0,
            quantity: 1.0,
        };
        let b = Scenario::SingleTarget {
            probability: 1.0,
            gems_per_draw: 100.0,
        };
        assert_eq!(compare(&a, &b, &catalog).unwrap().cheaper(), Choice::Even);
    }

    #[test]
    fn test_scenario_json_shape() {
        let scenario: Scenario = serde_json::from_str(
            r#"{"kind":"multi_copy","copies":2,"probability":0.5,"gems_per_draw":100}"#,
        )
        .unwrap();
        assert_eq!(scenario.requirement().unwrap(), 400.0);
    }
}
