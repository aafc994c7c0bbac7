//! Error types for the calculator.
//!
//! The minimum-cost search itself is total and never fails. Errors only
//! come from validating a catalog, from scenario formulas that produce a
//! non-finite or out-of-range requirement, and from loading configuration.

use thiserror::Error;

/// Errors that can occur while building catalogs, evaluating scenarios,
/// or loading configuration.
///
/// # Examples
///
/// ```rust
/// use gemcalc::CalcError;
///
/// let err = CalcError::InvalidPack {
///     label: "Starter".to_string(),
///     reason: "yield must be positive".to_string(),
/// };
/// assert_eq!(err.to_string(), "Invalid pack Starter: yield must be positive");
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CalcError {
    /// A catalog was built from an empty list of packs.
    #[error("Pack catalog is empty")]
    EmptyCatalog,

    /// A pack has a price or yield the search cannot work with.
    ///
    /// Price and yield must both be finite and strictly positive;
    /// a zero yield would make the search bounds unbounded.
    #[error("Invalid pack {label}: {reason}")]
    InvalidPack { label: String, reason: String },

    /// A scenario formula produced an infinite or NaN gem requirement.
    #[error("Requirement is not a finite number: {0}")]
    NonFiniteRequirement(f64),

    /// A requirement is finite but past what the search can cover exactly.
    #[error("Requirement of {requirement} gems exceeds the supported limit of {limit}")]
    RequirementTooLarge { requirement: f64, limit: f64 },

    /// The configuration file could not be read.
    #[error("Failed to read config {path}: {message}")]
    ConfigRead { path: String, message: String },

    /// The configuration text is not valid JSON for `CalculatorConfig`.
    #[error("Failed to parse config: {0}")]
    ConfigParse(String),
}
