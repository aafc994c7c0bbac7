//! Minimum-cost pack search.
//!
//! Given a gem requirement and a catalog, find the integer combination of
//! pack purchases that covers the requirement at the lowest total price.
//! Among equally cheap combinations the one wasting the fewest gems wins.
//!
//! ## Strategy
//!
//! Packs are ordered by yield, largest first, and only the first
//! [`PRIMARY_DIMENSIONS`] of them are searched:
//!
//! 1. The two largest packs are enumerated up to `ceil(need / gems) +
//!    COUNT_SLACK` units, stopping a loop as soon as the partial price
//!    already exceeds the best plan found.
//! 2. For the third pack, the count that exactly covers the remaining
//!    shortfall is computed and a window of `±REMAINDER_WINDOW` units
//!    around it is tried.
//!
//! The best single-pack plan seeds the search. A partial plan is skipped
//! when even buying its shortfall at the best remaining price per gem could
//! not beat the current best. That bound is convex in each loop count, so
//! both loops start at the first count it admits instead of at zero, and
//! stop once it is exceeded on the rising side.
//!
//! Packs beyond the three largest yields always get a count of zero. This
//! keeps the search bounded; a catalog with more packs needs a different
//! strategy (for example branch-and-bound over every pack), not more loops.
//!
//! ## Limits
//!
//! Requirements above [`requirement_limit`] are outside the searchable
//! range: beyond [`MAX_REQUIREMENT`] gems are no longer exact in `f64`, and
//! the largest pack may not be bought more than [`MAX_UNITS`] times.

use crate::catalog::PackCatalog;
use crate::error::CalcError;
use crate::plan::PurchasePlan;

/// Number of packs that take part in the search.
pub const PRIMARY_DIMENSIONS: usize = 3;

/// Extra units enumerated past `ceil(need / gems)` for the two largest packs.
pub const COUNT_SLACK: u64 = 3;

/// Half-width of the window tried around the exact third-pack count.
pub const REMAINDER_WINDOW: u64 = 2;

/// Tolerance for floating-point noise in requirements and price comparisons.
pub const EPSILON: f64 = 1e-9;

/// Largest requirement the search accepts: 2^53, the last gem count every
/// smaller whole number of which is exact in `f64`.
pub const MAX_REQUIREMENT: f64 = 9_007_199_254_740_992.0;

/// Most units of the largest pack a plan may need.
pub const MAX_UNITS: u64 = 1 << 53;

/// Round a real-valued gem requirement up to whole gems.
///
/// Values within [`EPSILON`] above an integer round down to that integer,
/// so noise from upstream formulas does not cost an extra gem. Values at
/// or below `EPSILON`, and NaN, give zero. Values past `u64::MAX` saturate;
/// [`search`] never rounds those since they exceed [`MAX_REQUIREMENT`].
///
/// # Examples
///
/// ```rust
/// use gemcalc::search::required_gems;
///
/// assert_eq!(required_gems(0.0), 0);
/// assert_eq!(required_gems(10.2), 11);
/// assert_eq!(required_gems(3000.0000000001), 3000);
/// ```
pub fn required_gems(requirement: f64) -> u64 {
    if requirement.is_nan() || requirement <= EPSILON {
        return 0;
    }
    (requirement - EPSILON).ceil() as u64
}

/// Largest requirement [`search`] can cover with `catalog`.
///
/// This is [`MAX_REQUIREMENT`], or less when even [`MAX_UNITS`] units of
/// the largest-yield pack fall short of it.
pub fn requirement_limit(catalog: &PackCatalog) -> f64 {
    let largest = catalog.iter().map(|p| p.gems).fold(0.0, f64::max);
    MAX_REQUIREMENT.min(largest * MAX_UNITS as f64)
}

/// Check that `requirement` is inside the searchable range for `catalog`.
///
/// # Errors
///
/// [`CalcError::RequirementTooLarge`] when it exceeds [`requirement_limit`].
///
/// # Examples
///
/// ```rust
/// use gemcalc::search::check_requirement;
/// use gemcalc::{CalcError, PackCatalog};
///
/// let catalog = PackCatalog::reference();
/// assert!(check_requirement(1e12, &catalog).is_ok());
/// assert!(matches!(
///     check_requirement(1e20, &catalog),
///     Err(CalcError::RequirementTooLarge { .. })
/// ));
/// ```
pub fn check_requirement(requirement: f64, catalog: &PackCatalog) -> Result<(), CalcError> {
    let limit = requirement_limit(catalog);
    if requirement > limit {
        Err(CalcError::RequirementTooLarge { requirement, limit })
    } else {
        Ok(())
    }
}

/// One searched pack, in yield-sorted order.
#[derive(Debug, Clone, Copy)]
struct Dimension {
    /// Position of the pack in the caller's catalog.
    index: usize,
    price: f64,
    gems: f64,
    max_count: u64,
}

impl Dimension {
    fn cost(&self, count: u64) -> (f64, f64) {
        (count as f64 * self.price, count as f64 * self.gems)
    }

    /// Whether the lower bound drops as this pack's count grows, i.e. the
    /// pack beats `rate` on price per gem.
    fn bound_falls(&self, rate: f64) -> bool {
        self.gems * rate > self.price
    }

    /// Smallest count whose lower bound can still reach `best`, for a partial
    /// plan costing `base` that lacks `shortfall` gems, with the rest bought
    /// at `rate` or worse. One unit is given back to absorb rounding.
    fn first_admissible(&self, base: f64, shortfall: f64, rate: f64, best: f64) -> u64 {
        if shortfall <= 0.0 {
            return 0;
        }
        let covering = (shortfall / self.gems).ceil();
        let start = if rate.is_infinite() {
            covering
        } else {
            let saving = self.gems * rate - self.price;
            let excess = base + shortfall * rate - best;
            if saving <= 0.0 || excess <= 0.0 {
                return 0;
            }
            (excess / saving).floor().min(covering)
        };
        (start as u64).saturating_sub(1)
    }
}

#[derive(Debug, Clone, Copy)]
struct Candidate {
    counts: [u64; PRIMARY_DIMENSIONS],
    price: f64,
    gems: f64,
}

/// Find the cheapest combination of packs covering `requirement` gems.
///
/// The requirement is rounded up with [`required_gems`] first. A requirement
/// that rounds to zero, or that is not finite, returns the all-zero plan.
/// The returned counts are in catalog order.
///
/// The result covers the requirement for every requirement up to
/// [`requirement_limit`]. Past that limit nothing is searched and the
/// all-zero plan is returned with a warning; callers that need to tell the
/// two apart use [`check_requirement`] first, as `Scenario::estimate` does.
///
/// # Examples
///
/// ```rust
/// use gemcalc::{search, PackCatalog};
///
/// let catalog = PackCatalog::reference();
///
/// // Nothing needed, nothing bought.
/// assert!(search(0.0, &catalog).is_empty());
///
/// // One gem: the cheapest single pack.
/// let plan = search(1.0, &catalog);
/// assert_eq!(plan.total_price, 4500.0);
/// assert_eq!(plan.counts, vec![0, 0, 1]);
/// ```
pub fn search(requirement: f64, catalog: &PackCatalog) -> PurchasePlan {
    let need = required_gems(requirement);
    if need == 0 || !requirement.is_finite() {
        return PurchasePlan::zero(catalog.len());
    }
    if let Err(err) = check_requirement(requirement, catalog) {
        tracing::warn!(%err, "requirement outside the searchable range");
        return PurchasePlan::zero(catalog.len());
    }
    let need = need as f64;

    let dims = primary_dimensions(catalog, need);
    let first = dims[0];
    let second = dims.get(1).copied();
    let third = dims.get(2).copied();

    let mut best: Option<Candidate> = None;
    let mut evaluated: u64 = 0;

    // Start from the best single-pack plan so pruning applies from the first loop.
    for (slot, dim) in dims.iter().enumerate() {
        let mut counts = [0; PRIMARY_DIMENSIONS];
        counts[slot] = (need / dim.gems).ceil() as u64;
        let (price, gems) = dim.cost(counts[slot]);
        evaluated += 1;
        consider(&mut best, need, counts, price, gems);
    }

    let rest_rate = cheapest_rate(&dims[1..]);
    let last_rate = cheapest_rate(&dims[2.min(dims.len())..]);

    let mut a = first.first_admissible(0.0, need, rest_rate, best_price(&best));
    while a <= first.max_count {
        let (price_a, gems_a) = first.cost(a);
        if exceeds_best(&best, price_a) {
            break;
        }
        let shortfall_a = need - gems_a;
        if exceeds_best(&best, lower_bound(price_a, shortfall_a, rest_rate)) {
            if shortfall_a <= 0.0 || !first.bound_falls(rest_rate) {
                break;
            }
            // Best improved since `a` was chosen; skip ahead to its new start.
            a = first
                .first_admissible(0.0, need, rest_rate, best_price(&best))
                .max(a + 1);
            continue;
        }

        let Some(second) = second else {
            let partial = Candidate {
                counts: [a, 0, 0],
                price: price_a,
                gems: gems_a,
            };
            evaluated += fill_remainder(&mut best, need, third, partial);
            a += 1;
            continue;
        };

        let mut b = second.first_admissible(price_a, shortfall_a, last_rate, best_price(&best));
        while b <= second.max_count {
            let (price_b, gems_b) = second.cost(b);
            let price_ab = price_a + price_b;
            if exceeds_best(&best, price_ab) {
                break;
            }
            let shortfall = shortfall_a - gems_b;
            if exceeds_best(&best, lower_bound(price_ab, shortfall, last_rate)) {
                if shortfall <= 0.0 || !second.bound_falls(last_rate) {
                    break;
                }
                let Some(next) = b.checked_add(1) else {
                    break;
                };
                b = second
                    .first_admissible(price_a, shortfall_a, last_rate, best_price(&best))
                    .max(next);
                continue;
            }

            let partial = Candidate {
                counts: [a, b, 0],
                price: price_ab,
                gems: gems_a + gems_b,
            };
            evaluated += fill_remainder(&mut best, need, third, partial);

            let Some(next) = b.checked_add(1) else {
                break;
            };
            b = next;
        }
        a += 1;
    }

    let Some(best) = best else {
        // The first pack alone always reaches `need` within its bound.
        return PurchasePlan::zero(catalog.len());
    };

    tracing::debug!(
        need,
        evaluated,
        price = best.price,
        gems = best.gems,
        "minimum-cost search finished"
    );

    let mut counts = vec![0; catalog.len()];
    for (dim, &count) in dims.iter().zip(&best.counts) {
        counts[dim.index] = count;
    }
    PurchasePlan::from_counts(catalog, counts)
}

/// Complete `partial` with the third pack, trying the window around the
/// count that exactly covers what is still missing. Returns how many
/// combinations were evaluated.
fn fill_remainder(
    best: &mut Option<Candidate>,
    need: f64,
    third: Option<Dimension>,
    partial: Candidate,
) -> u64 {
    let Some(third) = third else {
        consider(best, need, partial.counts, partial.price, partial.gems);
        return 1;
    };

    let shortfall = need - partial.gems;
    let exact = if shortfall <= 0.0 {
        0
    } else {
        (shortfall / third.gems).ceil() as u64
    };
    let low = exact.saturating_sub(REMAINDER_WINDOW);
    let high = exact.saturating_add(REMAINDER_WINDOW);
    for c in low..=high {
        let (price_c, gems_c) = third.cost(c);
        let mut counts = partial.counts;
        counts[2] = c;
        consider(best, need, counts, partial.price + price_c, partial.gems + gems_c);
    }
    high - low + 1
}

/// The searched packs, largest yield first. Equal yields keep catalog order.
fn primary_dimensions(catalog: &PackCatalog, need: f64) -> Vec<Dimension> {
    let packs = catalog.packs();
    let mut order: Vec<usize> = (0..packs.len()).collect();
    order.sort_by(|&l, &r| packs[r].gems.total_cmp(&packs[l].gems));

    order
        .into_iter()
        .take(PRIMARY_DIMENSIONS)
        .map(|index| {
            let pack = &packs[index];
            Dimension {
                index,
                price: pack.unit_price,
                gems: pack.gems,
                max_count: ((need / pack.gems).ceil() as u64).saturating_add(COUNT_SLACK),
            }
        })
        .collect()
}

/// Lowest price per gem among `dims`, or infinity when there are none.
fn cheapest_rate(dims: &[Dimension]) -> f64 {
    dims.iter()
        .map(|d| d.price / d.gems)
        .fold(f64::INFINITY, f64::min)
}

/// Cheapest conceivable price for a partial plan that still lacks `shortfall`
/// gems, when the rest can only be bought at `rate` or worse.
fn lower_bound(price: f64, shortfall: f64, rate: f64) -> f64 {
    if shortfall <= 0.0 {
        price
    } else {
        price + shortfall * rate
    }
}

fn best_price(best: &Option<Candidate>) -> f64 {
    best.map_or(f64::INFINITY, |b| b.price)
}

fn exceeds_best(best: &Option<Candidate>, price: f64) -> bool {
    best.is_some_and(|b| price > b.price + EPSILON)
}

fn consider(
    best: &mut Option<Candidate>,
    need: f64,
    counts: [u64; PRIMARY_DIMENSIONS],
    price: f64,
    gems: f64,
) {
    if gems + EPSILON < need {
        return;
    }

    let better = match best {
        None => true,
        Some(cur) => {
            price < cur.price - EPSILON
                || ((price - cur.price).abs() <= EPSILON && gems < cur.gems)
        }
    };

    if better {
        *best = Some(Candidate {
            counts,
            price,
            gems,
        });
    }
}
