//! Core projection engine for yearly investment cashflows

use log::debug;
use serde::{Deserialize, Serialize};

use crate::assumptions::RiskTier;
use crate::error::ProjectionError;
use super::cashflows::{ChartData, ProjectionResult};
use super::state::ProjectionState;

/// Number of years every projection covers
pub const PROJECTION_YEARS: u32 = 10;

/// Inputs for a single projection
///
/// The projection itself accepts any values; call [`ChartDataArguments::validate`]
/// at input boundaries to reject negative or non-finite amounts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataArguments {
    /// Amount called in year 1
    pub initial_investment: f64,

    /// Number of years after year 1 in which the annual investment is called
    pub investment_period: i32,

    /// Amount called in each year of the investment period
    pub annual_investment: f64,

    pub risk_level: RiskTier,
}

impl ChartDataArguments {
    /// Reject negative or non-finite amounts and negative periods
    pub fn validate(&self) -> Result<(), ProjectionError> {
        check_amount("initial investment", self.initial_investment)?;
        check_amount("annual investment", self.annual_investment)?;

        if self.investment_period < 0 {
            return Err(ProjectionError::NegativePeriod(self.investment_period));
        }

        Ok(())
    }

    /// Same inputs under a different risk tier
    pub fn with_risk_level(&self, risk_level: RiskTier) -> Self {
        Self { risk_level, ..*self }
    }
}

fn check_amount(field: &'static str, value: f64) -> Result<(), ProjectionError> {
    if !value.is_finite() {
        return Err(ProjectionError::NonFiniteAmount { field });
    }
    if value < 0.0 {
        return Err(ProjectionError::NegativeAmount { field, value });
    }
    Ok(())
}

/// Capital call for a zero-based year index (zero or negative)
pub fn capital_call_for_year(args: &ChartDataArguments, year_index: u32) -> f64 {
    let mut call = 0.0;

    if year_index == 0 {
        call -= args.initial_investment;
    }

    if year_index > 0 && i64::from(year_index) <= i64::from(args.investment_period) {
        call -= args.annual_investment;
    }

    call
}

/// Project the ten yearly rows for the given inputs
pub fn calculate_chart_data(args: &ChartDataArguments) -> Vec<ChartData> {
    debug!(
        "Projecting initial={} period={} annual={} risk={}",
        args.initial_investment, args.investment_period, args.annual_investment, args.risk_level
    );

    let percentage = args.risk_level.percentage();
    let mut state = ProjectionState::new();

    (0..PROJECTION_YEARS)
        .map(|year_index| state.advance(capital_call_for_year(args, year_index), percentage))
        .collect()
}

/// Run a projection and keep its inputs alongside the rows
pub fn project(args: &ChartDataArguments) -> ProjectionResult {
    ProjectionResult::new(*args, calculate_chart_data(args))
}
