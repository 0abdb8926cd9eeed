//! Cashflow output structures for projections

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::assumptions::RiskTier;
use crate::error::ProjectionError;
use super::engine::ChartDataArguments;
use super::income::calculate_passive_income;
use super::irr::calculate_irr;

/// A single row of projection output for one year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    /// Year label, "1y" through "10y"
    pub year: String,
    /// Money paid in this year (zero or negative)
    pub capital_call: f64,
    pub capital_distribution: f64,
    pub net_cash_flow: f64,
    pub cumulative_cash_flow: f64,
}

/// Complete projection result
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResult {
    /// Inputs the projection was run with
    pub arguments: ChartDataArguments,

    /// Yearly rows, in order
    pub rows: Vec<ChartData>,
}

impl ProjectionResult {
    pub fn new(arguments: ChartDataArguments, rows: Vec<ChartData>) -> Self {
        Self { arguments, rows }
    }

    pub fn risk_level(&self) -> RiskTier {
        self.arguments.risk_level
    }

    pub fn capital_calls(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.capital_call).collect()
    }

    pub fn net_cash_flows(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.net_cash_flow).collect()
    }

    /// Get summary statistics
    pub fn summary(&self) -> ProjectionSummary {
        let total_capital_called: f64 = self.rows.iter().map(|r| r.capital_call.abs()).sum();
        let total_distributions: f64 = self.rows.iter().map(|r| r.capital_distribution).sum();
        let final_cumulative_cash_flow = self.rows.last().map(|r| r.cumulative_cash_flow).unwrap_or(0.0);

        let break_even_year = self
            .rows
            .iter()
            .position(|r| r.cumulative_cash_flow >= 0.0)
            .map(|idx| idx as u32 + 1);

        let percentage = self.risk_level().percentage();

        ProjectionSummary {
            risk_level: self.risk_level(),
            total_capital_called,
            total_distributions,
            final_cumulative_cash_flow,
            break_even_year,
            passive_income: calculate_passive_income(&self.capital_calls(), percentage),
            irr: calculate_irr(&self.net_cash_flows()),
        }
    }

    /// Write the yearly rows as CSV (camelCase headers)
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), ProjectionError> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for row in &self.rows {
            csv_writer.serialize(row)?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionSummary {
    pub risk_level: RiskTier,
    pub total_capital_called: f64,
    pub total_distributions: f64,
    pub final_cumulative_cash_flow: f64,
    /// First year (1-based) whose cumulative cash flow is non-negative
    pub break_even_year: Option<u32>,
    pub passive_income: f64,
    /// Annual IRR of the net cash flows, if one exists
    pub irr: Option<f64>,
}
