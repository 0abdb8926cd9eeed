//! Running totals carried from one projection year to the next

use super::cashflows::ChartData;

/// Accumulated state of a projection at the start of a year
#[derive(Debug, Clone, Default)]
pub struct ProjectionState {
    /// Zero-based index of the next year to project
    pub year_index: u32,

    /// Sum of |capital call| over all projected years
    pub sum_capital_calls: f64,

    /// Sum of net cash flow over all projected years
    pub cumulative_cash_flow: f64,
}

impl ProjectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one year's capital call and emit its row.
    ///
    /// Distributions accrue on everything called so far, including this year's call.
    pub fn advance(&mut self, capital_call: f64, percentage: f64) -> ChartData {
        self.sum_capital_calls += capital_call.abs();

        let capital_distribution = self.sum_capital_calls * percentage;
        let net_cash_flow = capital_call + capital_distribution;
        self.cumulative_cash_flow += net_cash_flow;

        let row = ChartData {
            year: format!("{}y", self.year_index + 1),
            capital_call,
            capital_distribution,
            net_cash_flow,
            cumulative_cash_flow: self.cumulative_cash_flow,
        };

        self.year_index += 1;
        row
    }
}
