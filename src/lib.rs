//! Cashflow Projection - deterministic 10-year investment cash flow projections
//!
//! This library provides:
//! - Yearly capital call, distribution and cumulative cash flow projections
//! - A fixed table of risk tiers and their annual returns
//! - Passive income and IRR summaries
//! - Side-by-side projections across risk tiers

pub mod error;
pub mod assumptions;
pub mod projection;
pub mod scenario;
pub mod config;

// Re-export commonly used types
pub use error::ProjectionError;
pub use assumptions::{risk_level, risk_levels, RiskLevel, RiskTier, RISK_LEVELS};
pub use projection::{
    calculate_chart_data, calculate_passive_income, project, ChartData, ChartDataArguments,
    ProjectionResult, ProjectionSummary,
};
pub use scenario::ScenarioRunner;
pub use config::{ProjectionRequest, RequestOverrides};
