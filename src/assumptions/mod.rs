//! Projection assumptions: the risk tier return table

mod risk;

pub use risk::{risk_level, risk_levels, RiskLevel, RiskTier, RISK_LEVELS};
