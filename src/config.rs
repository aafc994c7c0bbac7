//! Calculator configuration.
//!
//! A configuration bundles the pack catalog, display settings and the
//! default value of every scenario input. It is stored as JSON; every
//! section is optional and falls back to the reference defaults.

use crate::catalog::PackCatalog;
use crate::error::CalcError;
use crate::format::DisplayFormat;
use crate::pack::Pack;
use crate::scenario::Scenario;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default values for scenario inputs.
///
/// The CLI uses these as parse fallbacks when a flag's text is not a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioInputs {
    /// Gems needed when pricing a bare gem amount.
    pub gems: f64,

    /// In-game gem price of one item bought directly.
    pub gems_per_item: f64,

    /// Items bought directly.
    pub quantity: f64,

    /// Draw success rate, as a fraction in (0, 1].
    pub probability: f64,

    pub gems_per_draw: f64,

    /// Copies wanted in the multi-copy scenario.
    pub copies: f64,
}

impl Default for ScenarioInputs {
    fn default() -> Self {
        Self {
            gems: 0.0,
            gems_per_item: 3000.0,
            quantity: 1.0,
            probability: 0.01,
            gems_per_draw: 300.0,
            copies: 1.0,
        }
    }
}

impl ScenarioInputs {
    pub fn direct(&self) -> Scenario {
        Scenario::Direct {
            gems_per_item: self.gems_per_item,
            quantity: self.quantity,
        }
    }

    pub fn single_target(&self) -> Scenario {
        Scenario::SingleTarget {
            probability: self.probability,
            gems_per_draw: self.gems_per_draw,
        }
    }

    pub fn multi_copy(&self) -> Scenario {
        Scenario::MultiCopy {
            copies: self.copies,
            probability: self.probability,
            gems_per_draw: self.gems_per_draw,
        }
    }
}

/// Full calculator configuration.
///
/// # Examples
///
/// ```rust
/// use gemcalc::CalculatorConfig;
///
/// let config = CalculatorConfig::from_json_str(r#"{
///     "packs": [
///         { "label": "Big", "unit_price": 10000, "gems": 5000 },
///         { "label": "Small", "unit_price": 1200, "gems": 500 }
///     ],
///     "display": { "currency_suffix": " USD" }
/// }"#).unwrap();
///
/// let catalog = config.catalog().unwrap();
/// assert_eq!(catalog.len(), 2);
/// assert_eq!(config.display.currency_suffix, " USD");
/// assert_eq!(config.inputs.gems_per_draw, 300.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    pub packs: Vec<Pack>,
    pub display: DisplayFormat,
    pub inputs: ScenarioInputs,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            packs: PackCatalog::reference().packs().to_vec(),
            display: DisplayFormat::default(),
            inputs: ScenarioInputs::default(),
        }
    }
}

impl CalculatorConfig {
    /// Parse a configuration from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self, CalcError> {
        serde_json::from_str(text).map_err(|e| CalcError::ConfigParse(e.to_string()))
    }

    /// Read and parse a JSON configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CalcError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| CalcError::ConfigRead {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let config = Self::from_json_str(&text)?;
        tracing::debug!(path = %path.display(), packs = config.packs.len(), "config loaded");
        Ok(config)
    }

    /// Validate the configured packs into a catalog.
    pub fn catalog(&self) -> Result<PackCatalog, CalcError> {
        PackCatalog::new(self.packs.clone())
    }

    /// Serialize back to pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String, CalcError> {
        serde_json::to_string_pretty(self).map_err(|e| CalcError::ConfigParse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_uses_defaults() {
        let config = CalculatorConfig::from_json_str("{}").unwrap();
        assert_eq!(config, CalculatorConfig::default());
        assert_eq!(config.catalog().unwrap(), PackCatalog::reference());
    }

    #[test]
    fn test_partial_inputs() {
        let config =
            CalculatorConfig::from_json_str(r#"{"inputs": {"probability": 0.005}}"#).unwrap();
        assert_eq!(config.inputs.probability, 0.005);
        assert_eq!(config.inputs.gems_per_draw, 300.0);
    }

    #[test]
    fn test_invalid_json() {
        let err = CalculatorConfig::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, CalcError::ConfigParse(_)));
    }

    #[test]
    fn test_empty_pack_list_fails_validation() {
        let config = CalculatorConfig::from_json_str(r#"{"packs": []}"#).unwrap();
        assert_eq!(config.catalog(), Err(CalcError::EmptyCatalog));
    }

    #[test]
    fn test_missing_file() {
        let err = CalculatorConfig::from_path("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, CalcError::ConfigRead { .. }));
    }

    #[test]
    fn test_round_trip_json() {
        let config = CalculatorConfig::default();
        let text = config.to_json_string().unwrap();
        assert_eq!(CalculatorConfig::from_json_str(&text).unwrap(), config);
    }

    #[test]
    fn test_scenarios_from_inputs() {
        let inputs = ScenarioInputs::default();
        assert_eq!(inputs.direct().requirement().unwrap(), 3000.0);
        assert!((inputs.single_target().requirement().unwrap() - 30000.0).abs() < 1e-6);
    }
}
