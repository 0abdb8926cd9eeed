//! Scenario runner for comparing risk tiers
//!
//! Holds one set of investment inputs and projects it under any number of
//! risk tiers, in parallel.

use log::info;
use rayon::prelude::*;

use crate::assumptions::RiskTier;
use crate::projection::{project, ChartDataArguments, ProjectionResult};

/// Runs the same inputs under different risk tiers
///
/// # Example
/// ```
/// use cashflow_projection::{ChartDataArguments, RiskTier, ScenarioRunner};
///
/// let runner = ScenarioRunner::new(ChartDataArguments {
///     initial_investment: 10_000.0,
///     investment_period: 3,
///     annual_investment: 1_000.0,
///     risk_level: RiskTier::Moderate,
/// });
/// let results = runner.run_all();
/// assert_eq!(results.len(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    base: ChartDataArguments,
}

impl ScenarioRunner {
    pub fn new(base: ChartDataArguments) -> Self {
        Self { base }
    }

    /// Project the base inputs under a single tier
    pub fn run(&self, tier: RiskTier) -> ProjectionResult {
        project(&self.base.with_risk_level(tier))
    }

    /// Project the base inputs under every tier, in table order
    pub fn run_all(&self) -> Vec<ProjectionResult> {
        self.run_tiers(&RiskTier::ALL)
    }

    /// Project the base inputs under each of the given tiers; results keep the input order
    pub fn run_tiers(&self, tiers: &[RiskTier]) -> Vec<ProjectionResult> {
        info!("Running {} risk scenarios", tiers.len());

        tiers.par_iter().map(|&tier| self.run(tier)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn runner() -> ScenarioRunner {
        ScenarioRunner::new(ChartDataArguments {
            initial_investment: 50_000.0,
            investment_period: 4,
            annual_investment: 5_000.0,
            risk_level: RiskTier::Low,
        })
    }

    #[test]
    fn test_run_all_in_tier_order() {
        let results = runner().run_all();
        assert_eq!(results.len(), 4);

        let tiers: Vec<RiskTier> = results.iter().map(|r| r.risk_level()).collect();
        assert_eq!(tiers, RiskTier::ALL.to_vec());

        // Higher return tiers distribute more
        for pair in results.windows(2) {
            assert!(pair[1].summary().total_distributions > pair[0].summary().total_distributions);
        }
    }

    #[test]
    fn test_run_tiers_keeps_order() {
        let results = runner().run_tiers(&[RiskTier::Aggressive, RiskTier::Low]);
        assert_eq!(results[0].risk_level(), RiskTier::Aggressive);
        assert_eq!(results[1].risk_level(), RiskTier::Low);
        assert_eq!(results[1].rows, runner().run(RiskTier::Low).rows);
    }

    #[test]
    fn test_capital_calls_independent_of_tier() {
        let results = runner().run_all();
        let calls = results[0].capital_calls();
        assert!(results.iter().all(|r| r.capital_calls() == calls));
    }
}
