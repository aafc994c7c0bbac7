//! Basic example: price a gem amount and compare buying against drawing
//!
//! This example demonstrates:
//! - Building a pack catalog
//! - Finding the cheapest pack combination for a gem requirement
//! - Comparing a direct purchase with a gacha scenario

use gemcalc::*;

fn main() -> Result<(), CalcError> {
    let catalog = PackCatalog::new(vec![
        Pack::new("Large", 15000.0, 7676.0),
        Pack::new("Medium", 7500.0, 3808.0),
        Pack::new("Small", 4500.0, 2268.0),
    ])?;
    let format = DisplayFormat::default();

    println!("Cheapest plan for 10,000 gems:");
    let plan = search(10000.0, &catalog);
    for line in plan.lines(&catalog) {
        println!("  {} x {}: {}", line.count, line.label, format.currency(line.price));
    }
    println!(
        "  Total: {} for {} gems",
        format.currency(plan.total_price),
        format.decimal(plan.total_gems, 0)
    );

    let direct = Scenario::Direct {
        gems_per_item: 3000.0,
        quantity: 2.0,
    };
    let gacha = Scenario::MultiCopy {
        copies: 2.0,
        probability: 0.03,
        gems_per_draw: 300.0,
    };
    let comparison = compare(&direct, &gacha, &catalog)?;

    println!("\nTwo copies:");
    println!(
        "  Buy directly: {} gems -> {}",
        comparison.direct.gems_needed,
        format.currency(comparison.direct.plan.total_price)
    );
    println!(
        "  Gacha:        {} gems -> {}",
        comparison.gacha.gems_needed,
        format.currency(comparison.gacha.plan.total_price)
    );
    println!("  Cheaper: {:?}", comparison.cheaper());

    Ok(())
}
