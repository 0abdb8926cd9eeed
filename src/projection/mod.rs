//! Yearly cashflow projection, passive income, and IRR

mod state;
mod engine;
mod cashflows;
mod income;
mod irr;

pub use state::ProjectionState;
pub use engine::{
    calculate_chart_data, capital_call_for_year, project, ChartDataArguments, PROJECTION_YEARS,
};
pub use cashflows::{ChartData, ProjectionResult, ProjectionSummary};
pub use income::calculate_passive_income;
pub use irr::calculate_irr;
