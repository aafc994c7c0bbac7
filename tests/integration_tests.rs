use gemcalc::input::{parse_number, parse_percent};
use gemcalc::*;

/// Test the full path from text inputs to a priced comparison.
#[test]
fn test_text_inputs_to_comparison() {
    let catalog = PackCatalog::reference();

    let gems_per_item = parse_number(" 3,000 ", 0.0);
    let probability = parse_percent("1%", 0.5);
    let gems_per_draw = parse_number("300", 0.0);

    let direct = Scenario::Direct {
        gems_per_item,
        quantity: 1.0,
    };
    let gacha = Scenario::SingleTarget {
        probability,
        gems_per_draw,
    };
    let comparison = compare(&direct, &gacha, &catalog).unwrap();

    // 3000 gems: one Medium pack (3808 gems) for 7500.
    assert_eq!(comparison.direct.gems_needed, 3000);
    assert_eq!(comparison.direct.plan.counts, vec![0, 1, 0]);
    assert_eq!(comparison.direct.plan.total_price, 7500.0);

    // 100 expected draws x 300 gems.
    assert_eq!(comparison.gacha.gems_needed, 30000);
    assert!(comparison.gacha.plan.total_gems >= 30000.0);
    assert_eq!(comparison.cheaper(), Choice::Direct);
}

/// Test that a bad text input falls back to its default and still prices.
#[test]
fn test_bad_input_uses_default() {
    let catalog = PackCatalog::reference();
    let inputs = ScenarioInputs::default();

    let quantity = parse_number("two", inputs.quantity);
    let scenario = Scenario::Direct {
        gems_per_item: inputs.gems_per_item,
        quantity,
    };
    let estimate = scenario.estimate(&catalog).unwrap();
    assert_eq!(estimate.gems_needed, 3000);
}

/// Test the multi-copy scenario end to end.
#[test]
fn test_multi_copy_estimate() {
    let catalog = PackCatalog::reference();
    let scenario = Scenario::MultiCopy {
        copies: 2.0,
        probability: 0.5,
        gems_per_draw: 1000.0,
    };
    let estimate = scenario.estimate(&catalog).unwrap();

    // 4 draws x 1000 gems = 4000 gems: Small x 2 (4536) for 9000.
    assert_eq!(estimate.gems_needed, 4000);
    assert_eq!(estimate.plan.counts, vec![0, 0, 2]);
    assert_eq!(estimate.plan.total_price, 9000.0);
    assert_eq!(estimate.surplus(), 536.0);
    assert!(estimate.ideal_price < estimate.plan.total_price);
}

/// Test that a zero requirement buys nothing and costs nothing.
#[test]
fn test_zero_quantity_buys_nothing() {
    let catalog = PackCatalog::reference();
    let scenario = Scenario::Direct {
        gems_per_item: 3000.0,
        quantity: 0.0,
    };
    let estimate = scenario.estimate(&catalog).unwrap();
    assert!(estimate.plan.is_empty());
    assert_eq!(estimate.plan.total_price, 0.0);
    assert_eq!(estimate.ideal_price, 0.0);
}

/// Test pricing with a catalog loaded from JSON config.
#[test]
fn test_config_catalog() {
    let config = CalculatorConfig::from_json_str(
        r#"{
            "packs": [
                { "label": "Monthly", "unit_price": 600, "yield": 300 },
                { "label": "Bundle", "unit_price": 9800, "yield": 6480 },
                { "label": "Chest", "unit_price": 4900, "yield": 3280 },
                { "label": "Pouch", "unit_price": 120, "yield": 60 }
            ],
            "inputs": { "probability": 0.006, "gems_per_draw": 160 }
        }"#,
    )
    .unwrap();
    let catalog = config.catalog().unwrap();
    assert_eq!(catalog.cheapest_per_gem().label, "Chest");

    let estimate = config.inputs.single_target().estimate(&catalog).unwrap();
    assert_eq!(estimate.plan.counts.len(), 4);
    // Pouch has the fourth-largest yield and is never searched.
    assert_eq!(estimate.plan.counts[3], 0);
    assert!(estimate.plan.total_gems >= estimate.gems_needed as f64);
}

/// Test that an invalid pack in config is reported by label.
#[test]
fn test_config_invalid_pack() {
    let config = CalculatorConfig::from_json_str(
        r#"{ "packs": [ { "label": "Free", "unit_price": 0, "yield": 100 } ] }"#,
    )
    .unwrap();
    match config.catalog() {
        Err(CalcError::InvalidPack { label, .. }) => assert_eq!(label, "Free"),
        other => panic!("expected invalid pack, got {:?}", other),
    }
}

/// Test display formatting of a plan's totals.
#[test]
fn test_formatted_plan() {
    let catalog = PackCatalog::reference();
    let plan = search(10000.0, &catalog);
    let format = DisplayFormat::default();

    assert_eq!(format.currency(plan.total_price), "21,000円");
    let lines = plan.lines(&catalog);
    let labels: Vec<&str> = lines.iter().map(|l| l.label.as_str()).collect();
    assert_eq!(labels, vec!["Medium", "Small"]);
}

/// Test that estimates serialize to JSON for reporting.
#[test]
fn test_estimate_serializes() {
    let catalog = PackCatalog::reference();
    let estimate = Scenario::Direct {
        gems_per_item: 7676.0,
        quantity: 1.0,
    }
    .estimate(&catalog)
    .unwrap();

    let json = serde_json::to_value(&estimate).unwrap();
    assert_eq!(json["gems_needed"], 7676);
    assert_eq!(json["plan"]["counts"], serde_json::json!([1, 0, 0]));
    assert_eq!(json["scenario"]["kind"], "direct");
}

/// Test that an oversized gem amount from text input is reported, not
/// priced with a plan that falls short.
#[test]
fn test_oversized_text_input_rejected() {
    let catalog = PackCatalog::reference();
    let gems = parse_number("100,000,000,000,000,000,000", 0.0);
    let scenario = Scenario::Direct {
        gems_per_item: gems,
        quantity: 1.0,
    };
    match scenario.estimate(&catalog) {
        Err(CalcError::RequirementTooLarge { requirement, limit }) => {
            assert_eq!(requirement, 1e20);
            assert_eq!(limit, MAX_REQUIREMENT);
        }
        other => panic!("expected requirement too large, got {:?}", other),
    }
}

/// Test that the effective config, with inputs overridden, round-trips
/// through its JSON dump.
#[test]
fn test_effective_config_dump() {
    let mut config = CalculatorConfig::default();
    config.inputs.gems = parse_number("12,345", 0.0);
    config.inputs.probability = parse_percent("0.7%", config.inputs.probability);

    let text = config.to_json_string().unwrap();
    let reloaded = CalculatorConfig::from_json_str(&text).unwrap();
    assert_eq!(reloaded.inputs.gems, 12345.0);
    assert_eq!(reloaded, config);
}
