//! Compare one investment scenario across every risk tier
//!
//! Usage: cargo run --bin compare_risk_levels -- --initial-investment 100000 --investment-period 5

use std::path::PathBuf;

use anyhow::{Context, Result};
use cashflow_projection::{ProjectionRequest, RequestOverrides, ScenarioRunner};
use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "compare_risk_levels", about = "Project one scenario under every risk tier")]
struct Args {
    /// JSON request file; its risk level is ignored
    #[arg(long)]
    request: Option<PathBuf>,

    #[arg(long)]
    initial_investment: Option<f64>,

    #[arg(long, allow_negative_numbers = true)]
    investment_period: Option<i32>,

    #[arg(long)]
    annual_investment: Option<f64>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    let overrides = RequestOverrides {
        initial_investment: args.initial_investment,
        investment_period: args.investment_period,
        annual_investment: args.annual_investment,
        risk_level: None,
    };
    let base = ProjectionRequest::load(args.request.as_deref())
        .context("Failed to load projection request")?
        .with_overrides(&overrides)
        .into_scenario_base()
        .context("Invalid projection inputs")?;

    let results = ScenarioRunner::new(base).run_all();

    println!("{:<11} {:>8} {:>14} {:>14} {:>14} {:>10} {:>9}",
        "Risk", "Return", "Distributions", "FinalCumCF", "PassiveInc", "BreakEven", "IRR");
    println!("{}", "-".repeat(86));

    for result in &results {
        let s = result.summary();
        let break_even = s.break_even_year.map(|y| format!("{}y", y)).unwrap_or_else(|| "-".into());
        let irr = s.irr.map(|r| format!("{:.2}%", r * 100.0)).unwrap_or_else(|| "n/a".into());

        println!("{:<11} {:>7.2}% {:>14.2} {:>14.2} {:>14.2} {:>10} {:>9}",
            s.risk_level.label(),
            s.risk_level.percentage() * 100.0,
            s.total_distributions,
            s.final_cumulative_cash_flow,
            s.passive_income,
            break_even,
            irr,
        );
    }

    Ok(())
}
