//! Cashflow Projection CLI
//!
//! Projects one investment scenario and prints the yearly cash flows

use std::fs::File;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use cashflow_projection::{
    project, ProjectionRequest, ProjectionResult, ProjectionSummary, RequestOverrides,
};
use clap::Parser;
use log::info;
use serde::Serialize;

#[derive(Debug, Parser)]
#[command(name = "cashflow_projection", version, about = "Project 10 years of investment cash flows")]
struct Args {
    /// JSON request file; flags below override its values
    #[arg(long)]
    request: Option<PathBuf>,

    /// Amount invested in year 1
    #[arg(long)]
    initial_investment: Option<f64>,

    /// Years of annual contributions after year 1
    #[arg(long, allow_negative_numbers = true)]
    investment_period: Option<i32>,

    /// Annual contribution
    #[arg(long)]
    annual_investment: Option<f64>,

    /// Risk tier: low, moderate, high or aggressive
    #[arg(long)]
    risk_level: Option<String>,

    /// Write the yearly rows to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Print the result as JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    #[serde(flatten)]
    result: &'a ProjectionResult,
    summary: ProjectionSummary,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    let overrides = RequestOverrides {
        initial_investment: args.initial_investment,
        investment_period: args.investment_period,
        annual_investment: args.annual_investment,
        risk_level: args.risk_level.clone(),
    };
    let request = ProjectionRequest::load(args.request.as_deref())
        .context("Failed to load projection request")?
        .with_overrides(&overrides);

    let arguments = request.into_arguments().context("Invalid projection inputs")?;
    let result = project(&arguments);
    let summary = result.summary();

    if let Some(path) = &args.csv {
        let file = File::create(path)
            .with_context(|| format!("Unable to create CSV file {}", path.display()))?;
        result.write_csv(file)?;
        info!("Wrote {} rows to {}", result.rows.len(), path.display());
    }

    if args.json {
        let output = JsonOutput { result: &result, summary };
        serde_json::to_writer_pretty(io::stdout().lock(), &output)?;
        println!();
        return Ok(());
    }

    print_table(&result);
    print_summary(&summary);

    Ok(())
}

fn print_table(result: &ProjectionResult) {
    let a = &result.arguments;
    let level = a.risk_level.risk_level();

    println!("Cashflow Projection");
    println!("===================\n");
    println!("  Initial Investment: ${:.2}", a.initial_investment);
    println!("  Investment Period:  {} years", a.investment_period);
    println!("  Annual Investment:  ${:.2}", a.annual_investment);
    println!("  Risk Level:         {} ({:.2}%)", level.label, level.percentage_value * 100.0);
    println!();

    println!("{:>5} {:>14} {:>14} {:>14} {:>14}",
        "Year", "CapitalCall", "Distribution", "NetCashFlow", "Cumulative");
    println!("{}", "-".repeat(65));

    for row in &result.rows {
        println!("{:>5} {:>14.2} {:>14.2} {:>14.2} {:>14.2}",
            row.year,
            row.capital_call,
            row.capital_distribution,
            row.net_cash_flow,
            row.cumulative_cash_flow,
        );
    }
}

fn print_summary(summary: &ProjectionSummary) {
    println!("\nSummary:");
    println!("  Total Capital Called: ${:.2}", summary.total_capital_called);
    println!("  Total Distributions:  ${:.2}", summary.total_distributions);
    println!("  Final Cumulative CF:  ${:.2}", summary.final_cumulative_cash_flow);
    println!("  Passive Income:       ${:.2}", summary.passive_income);
    match summary.break_even_year {
        Some(year) => println!("  Break-even Year:      {}y", year),
        None => println!("  Break-even Year:      beyond projection"),
    }
    match summary.irr {
        Some(irr) => println!("  IRR:                  {:.4}%", irr * 100.0),
        None => println!("  IRR:                  n/a"),
    }
}
