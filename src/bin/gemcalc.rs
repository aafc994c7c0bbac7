use clap::Parser;
use gemcalc::input::{parse_number, parse_percent};
use gemcalc::logger;
use gemcalc::*;
use serde::Serialize;
use std::path::PathBuf;

/// Price gem packs and compare buying items against drawing for them.
///
/// Numeric flags accept free text ("15,000", " 2.5 "); anything that does
/// not parse falls back to the configured default.
#[derive(Parser, Debug)]
#[command(name = "gemcalc", version, about)]
struct Cli {
    /// JSON config with packs, display settings and default inputs
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Price a bare gem amount
    #[arg(long)]
    gems: Option<String>,

    /// Gem price of one item bought directly
    #[arg(long)]
    gems_per_item: Option<String>,

    /// Number of items bought directly
    #[arg(long)]
    quantity: Option<String>,

    /// Draw success rate in percent, e.g. "0.7" or "0.7%"
    #[arg(long)]
    rate: Option<String>,

    /// Gems spent per draw
    #[arg(long)]
    gems_per_draw: Option<String>,

    /// Copies wanted for the multi-copy estimate
    #[arg(long)]
    copies: Option<String>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Print the effective config (file plus flags) as JSON and exit
    #[arg(long)]
    print_config: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Overlay the flags that were given onto the configured inputs.
    fn apply(&self, inputs: &mut ScenarioInputs) {
        let number = |flag: &Option<String>, default: f64| {
            flag.as_deref().map_or(default, |text| parse_number(text, default))
        };

        inputs.gems = number(&self.gems, inputs.gems);
        inputs.gems_per_item = number(&self.gems_per_item, inputs.gems_per_item);
        inputs.quantity = number(&self.quantity, inputs.quantity);
        inputs.gems_per_draw = number(&self.gems_per_draw, inputs.gems_per_draw);
        inputs.copies = number(&self.copies, inputs.copies);
        if let Some(rate) = &self.rate {
            inputs.probability = parse_percent(rate, inputs.probability);
        }
    }
}

#[derive(Serialize)]
struct Report<'a> {
    catalog: &'a PackCatalog,
    best_rate: &'a Pack,
    #[serde(skip_serializing_if = "Option::is_none")]
    gems: Option<Estimate>,
    comparison: Comparison,
    multi_copy: Estimate,
}

fn build_report<'a>(
    catalog: &'a PackCatalog,
    inputs: &ScenarioInputs,
) -> Result<Report<'a>, CalcError> {
    let gems = if inputs.gems > 0.0 {
        let bare = Scenario::Direct {
            gems_per_item: inputs.gems,
            quantity: 1.0,
        };
        Some(bare.estimate(catalog)?)
    } else {
        None
    };

    Ok(Report {
        catalog,
        best_rate: catalog.cheapest_per_gem(),
        gems,
        comparison: compare(&inputs.direct(), &inputs.single_target(), catalog)?,
        multi_copy: inputs.multi_copy().estimate(catalog)?,
    })
}

fn print_estimate(title: &str, estimate: &Estimate, catalog: &PackCatalog, fmt: &DisplayFormat) {
    println!("== {} ==", title);
    if let Some(draws) = estimate.scenario.expected_draws() {
        println!("  expected draws: {}", fmt.number(draws));
    }
    println!("  gems needed:    {}", fmt.decimal(estimate.gems_needed as f64, 0));
    for line in estimate.plan.lines(catalog) {
        println!(
            "    {} x {:<12} {:>14}  ({} gems)",
            line.count,
            line.label,
            fmt.currency(line.price),
            fmt.decimal(line.gems, 0)
        );
    }
    println!("  packs bought:   {}", estimate.plan.units());
    println!("  total price:    {}", fmt.currency(estimate.plan.total_price));
    println!("  gems received:  {}", fmt.decimal(estimate.plan.total_gems, 0));
    println!("  surplus gems:   {}", fmt.decimal(estimate.surplus(), 0));
    println!("  ideal price:    {}", fmt.currency(estimate.ideal_price));
    println!();
}

fn print_report(report: &Report<'_>, fmt: &DisplayFormat) {
    let catalog = report.catalog;

    println!("== Packs ==");
    for pack in catalog {
        println!(
            "  {:<12} {:>14}  {:>10} gems  {} per gem",
            pack.label,
            fmt.currency(pack.unit_price),
            fmt.decimal(pack.gems, 0),
            fmt.decimal(pack.price_per_gem(), 4)
        );
    }
    println!("  best rate: {}", report.best_rate.label);
    println!();

    if let Some(gems) = &report.gems {
        print_estimate("Gems", gems, catalog, fmt);
    }
    print_estimate("Buy directly", &report.comparison.direct, catalog, fmt);
    print_estimate("Gacha (single target)", &report.comparison.gacha, catalog, fmt);
    print_estimate("Gacha (multiple copies)", &report.multi_copy, catalog, fmt);

    let verdict = match report.comparison.cheaper() {
        Choice::Direct => "buying directly is cheaper",
        Choice::Gacha => "drawing is cheaper",
        Choice::Even => "both cost the same",
    };
    println!(
        "Verdict: {} (difference {})",
        verdict,
        fmt.currency(report.comparison.savings())
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);
    tracing::debug!("CLI args: {:?}", cli);

    let mut config = match &cli.config {
        Some(path) => CalculatorConfig::from_path(path),
        None => Ok(CalculatorConfig::default()),
    }
    .map_err(|e| {
        tracing::error!("Configuration failed: {}", e);
        e
    })?;
    cli.apply(&mut config.inputs);

    if cli.print_config {
        println!("{}", config.to_json_string()?);
        return Ok(());
    }

    let catalog = config.catalog()?;
    let report = build_report(&catalog, &config.inputs)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report, &config.display);
    }
    Ok(())
}
