//! # gemcalc - Deterministic Gacha Economics Calculator
//!
//! Prices in-game currency ("gems") bought through fixed packs, and
//! compares buying items outright against drawing for them:
//! - **Minimum-cost search** over pack combinations, breaking price ties
//!   by the least wasted gems
//! - **Expected-value scenarios** (direct purchase, single target, multiple copies)
//! - **Permissive input parsing** and locale-style display formatting
//!
//! Everything is a pure function of its arguments. Only expected values
//! are computed; there is no simulation and no variance.
//!
//! ## Core Concepts
//!
//! ```text
//! [Scenario] → gem requirement → [search] → [PurchasePlan]
//!                                   ↑
//!                             [PackCatalog]
//! ```
//!
//! 1. A **Scenario** turns its inputs into a real-valued gem requirement
//! 2. The **search** rounds the requirement up and finds the cheapest plan
//! 3. The **PurchasePlan** lists units per pack with total price and gems
//!
//! ## Example
//!
//! ```rust
//! use gemcalc::*;
//!
//! let catalog = PackCatalog::new(vec![
//!     Pack::new("Large", 15000.0, 7676.0),
//!     Pack::new("Medium", 7500.0, 3808.0),
//!     Pack::new("Small", 4500.0, 2268.0),
//! ])
//! .unwrap();
//!
//! let plan = search(7676.0, &catalog);
//! assert_eq!(plan.counts, vec![1, 0, 0]);
//! assert_eq!(plan.total_price, 15000.0);
//!
//! let direct = Scenario::Direct { gems_per_item: 3000.0, quantity: 1.0 };
//! let gacha = Scenario::SingleTarget { probability: 0.01, gems_per_draw: 300.0 };
//! let comparison = compare(&direct, &gacha, &catalog).unwrap();
//! assert_eq!(comparison.cheaper(), Choice::Direct);
//! ```
//!
//! ## Modules
//!
//! - [`pack`] - Purchasable pack value type
//! - [`catalog`] - Validated pack catalog and best price-per-gem
//! - [`search`] - Minimum-cost pack search
//! - [`plan`] - Search results
//! - [`scenario`] - Expected gem requirements for acquisition scenarios
//! - [`input`] - Permissive numeric text parsing
//! - [`format`] - Display formatting
//! - [`config`] - JSON configuration
//! - [`error`] - Error types

pub mod catalog;
pub mod config;
pub mod error;
pub mod format;
pub mod input;
#[cfg(feature = "cli")]
pub mod logger;
pub mod pack;
pub mod plan;
pub mod scenario;
pub mod search;

pub use catalog::PackCatalog;
pub use config::{CalculatorConfig, ScenarioInputs};
pub use error::CalcError;
pub use format::DisplayFormat;
pub use pack::Pack;
pub use plan::{PlanLine, PurchasePlan};
pub use scenario::{compare, Choice, Comparison, Estimate, Scenario};
pub use search::{check_requirement, required_gems, search, MAX_REQUIREMENT, PRIMARY_DIMENSIONS};
