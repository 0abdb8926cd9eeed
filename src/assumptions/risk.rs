//! Risk tiers and their fixed annual return percentages

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ProjectionError;

/// Label and annual return for one risk tier
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskLevel {
    pub label: &'static str,
    /// Annual return as a decimal (e.g., 0.091 for 9.1%)
    pub percentage_value: f64,
}

/// Selectable risk tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Low,
    Moderate,
    High,
    Aggressive,
}

/// Fixed risk tier table, in ascending order of return
pub const RISK_LEVELS: [(RiskTier, RiskLevel); 4] = [
    (RiskTier::Low, RiskLevel { label: "Low", percentage_value: 0.091 }),
    (RiskTier::Moderate, RiskLevel { label: "Moderate", percentage_value: 0.1203 }),
    (RiskTier::High, RiskLevel { label: "High", percentage_value: 0.1259 }),
    (RiskTier::Aggressive, RiskLevel { label: "Aggressive", percentage_value: 0.1433 }),
];

impl RiskTier {
    /// All tiers in table order
    pub const ALL: [RiskTier; 4] = [
        RiskTier::Low,
        RiskTier::Moderate,
        RiskTier::High,
        RiskTier::Aggressive,
    ];

    /// Lookup key used in requests and on the command line
    pub fn key(&self) -> &'static str {
        match self {
            RiskTier::Low => "low",
            RiskTier::Moderate => "moderate",
            RiskTier::High => "high",
            RiskTier::Aggressive => "aggressive",
        }
    }

    pub fn risk_level(&self) -> &'static RiskLevel {
        let idx = match self {
            RiskTier::Low => 0,
            RiskTier::Moderate => 1,
            RiskTier::High => 2,
            RiskTier::Aggressive => 3,
        };
        &RISK_LEVELS[idx].1
    }

    pub fn label(&self) -> &'static str {
        self.risk_level().label
    }

    pub fn percentage(&self) -> f64 {
        self.risk_level().percentage_value
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for RiskTier {
    type Err = ProjectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(RiskTier::Low),
            "moderate" => Ok(RiskTier::Moderate),
            "high" => Ok(RiskTier::High),
            "aggressive" => Ok(RiskTier::Aggressive),
            _ => Err(ProjectionError::UnknownRiskLevel(s.to_string())),
        }
    }
}

/// The full risk tier table
pub fn risk_levels() -> &'static [(RiskTier, RiskLevel); 4] {
    &RISK_LEVELS
}

/// Resolve a risk key (e.g. "moderate") to its label and percentage
pub fn risk_level(key: &str) -> Result<&'static RiskLevel, ProjectionError> {
    key.parse::<RiskTier>().map(|tier| tier.risk_level())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_constants() {
        assert_eq!(RiskTier::Low.percentage(), 0.091);
        assert_eq!(RiskTier::Moderate.percentage(), 0.1203);
        assert_eq!(RiskTier::High.percentage(), 0.1259);
        assert_eq!(RiskTier::Aggressive.percentage(), 0.1433);
        assert_eq!(RiskTier::Aggressive.label(), "Aggressive");
    }

    #[test]
    fn test_table_order_matches_all() {
        let tiers: Vec<RiskTier> = risk_levels().iter().map(|(tier, _)| *tier).collect();
        assert_eq!(tiers, RiskTier::ALL.to_vec());

        for (tier, level) in risk_levels() {
            assert_eq!(tier.risk_level(), level);
            assert!(level.percentage_value > 0.0 && level.percentage_value < 1.0);
        }
    }

    #[test]
    fn test_parse_keys() {
        assert_eq!("low".parse::<RiskTier>().unwrap(), RiskTier::Low);
        assert_eq!(" High ".parse::<RiskTier>().unwrap(), RiskTier::High);
        assert_eq!("AGGRESSIVE".parse::<RiskTier>().unwrap(), RiskTier::Aggressive);

        for tier in RiskTier::ALL {
            assert_eq!(tier.key().parse::<RiskTier>().unwrap(), tier);
        }
    }

    #[test]
    fn test_unknown_key() {
        let err = risk_level("extreme").unwrap_err();
        assert!(matches!(err, ProjectionError::UnknownRiskLevel(ref key) if key == "extreme"));
    }

    #[test]
    fn test_deserialize_lowercase() {
        let tier: RiskTier = serde_json::from_str("\"moderate\"").unwrap();
        assert_eq!(tier, RiskTier::Moderate);
    }
}
