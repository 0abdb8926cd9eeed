//! JSON projection requests
//!
//! A request file may omit any field; missing fields fall back to defaults.
//! Command-line flags are layered on top through [`RequestOverrides`].

use std::fs;
use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::assumptions::RiskTier;
use crate::error::ProjectionError;
use crate::projection::ChartDataArguments;

/// Input configuration for a projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionRequest {
    /// Amount invested in year 1 (default: 100,000)
    #[serde(default = "default_initial_investment")]
    pub initial_investment: f64,

    /// Years of annual contributions after year 1 (default: 5)
    #[serde(default = "default_investment_period")]
    pub investment_period: i32,

    /// Annual contribution (default: 10,000)
    #[serde(default = "default_annual_investment")]
    pub annual_investment: f64,

    /// Risk tier key: low, moderate, high or aggressive (default: moderate)
    #[serde(default = "default_risk_level")]
    pub risk_level: String,
}

fn default_initial_investment() -> f64 { 100_000.0 }
fn default_investment_period() -> i32 { 5 }
fn default_annual_investment() -> f64 { 10_000.0 }
fn default_risk_level() -> String { RiskTier::Moderate.key().to_string() }

impl Default for ProjectionRequest {
    fn default() -> Self {
        Self {
            initial_investment: default_initial_investment(),
            investment_period: default_investment_period(),
            annual_investment: default_annual_investment(),
            risk_level: default_risk_level(),
        }
    }
}

/// Values given explicitly on the command line; `None` keeps the request's value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOverrides {
    pub initial_investment: Option<f64>,
    pub investment_period: Option<i32>,
    pub annual_investment: Option<f64>,
    pub risk_level: Option<String>,
}

impl ProjectionRequest {
    pub fn from_json_str(json: &str) -> Result<Self, ProjectionError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a request from a JSON file
    pub fn from_path(path: &Path) -> Result<Self, ProjectionError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Load from `path` if given, otherwise start from the defaults
    pub fn load(path: Option<&Path>) -> Result<Self, ProjectionError> {
        match path {
            Some(path) => Self::from_path(path),
            None => Ok(Self::default()),
        }
    }

    pub fn with_overrides(mut self, overrides: &RequestOverrides) -> Self {
        if let Some(v) = overrides.initial_investment {
            self.initial_investment = v;
        }
        if let Some(v) = overrides.investment_period {
            self.investment_period = v;
        }
        if let Some(v) = overrides.annual_investment {
            self.annual_investment = v;
        }
        if let Some(v) = &overrides.risk_level {
            self.risk_level = v.clone();
        }
        self
    }

    /// Resolve the risk key and validate the amounts
    pub fn into_arguments(self) -> Result<ChartDataArguments, ProjectionError> {
        let risk_level = self.risk_level.parse()?;
        self.validated(risk_level)
    }

    /// Validate the amounts for a run that supplies its own tiers.
    ///
    /// The request's risk key is not resolved, so an unknown key is not an error.
    pub fn into_scenario_base(self) -> Result<ChartDataArguments, ProjectionError> {
        self.validated(RiskTier::Low)
    }

    fn validated(self, risk_level: RiskTier) -> Result<ChartDataArguments, ProjectionError> {
        let args = ChartDataArguments {
            initial_investment: self.initial_investment,
            investment_period: self.investment_period,
            annual_investment: self.annual_investment,
            risk_level,
        };

        if let Err(e) = args.validate() {
            warn!("Rejected projection request: {}", e);
            return Err(e);
        }

        Ok(args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let request = ProjectionRequest::from_json_str(r#"{"initial_investment": 2500}"#).unwrap();
        assert_eq!(request.initial_investment, 2500.0);
        assert_eq!(request.investment_period, 5);
        assert_eq!(request.annual_investment, 10_000.0);
        assert_eq!(request.risk_level, "moderate");

        assert_eq!(ProjectionRequest::from_json_str("{}").unwrap(), ProjectionRequest::default());
        assert_eq!(ProjectionRequest::load(None).unwrap(), ProjectionRequest::default());
    }

    #[test]
    fn test_into_arguments() {
        let request = ProjectionRequest::from_json_str(
            r#"{"initial_investment": 1000, "investment_period": 2, "annual_investment": 100, "risk_level": "low"}"#,
        )
        .unwrap();

        let args = request.into_arguments().unwrap();
        assert_eq!(args.risk_level, RiskTier::Low);
        assert_eq!(args.investment_period, 2);
    }

    #[test]
    fn test_rejects_bad_requests() {
        let unknown = ProjectionRequest { risk_level: "extreme".into(), ..Default::default() };
        assert!(matches!(unknown.into_arguments(), Err(ProjectionError::UnknownRiskLevel(_))));

        let negative = ProjectionRequest { annual_investment: -5.0, ..Default::default() };
        assert!(matches!(negative.into_arguments(), Err(ProjectionError::NegativeAmount { .. })));

        assert!(matches!(
            ProjectionRequest::from_json_str("{not json"),
            Err(ProjectionError::Json(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = ProjectionRequest::load(Some(Path::new("does/not/exist.json"))).unwrap_err();
        assert!(matches!(err, ProjectionError::Io(_)));
    }

    #[test]
    fn test_overrides_replace_only_given_fields() {
        let request = ProjectionRequest::from_json_str(
            r#"{"initial_investment": 1000, "investment_period": 2, "risk_level": "high"}"#,
        )
        .unwrap();

        let overridden = request.clone().with_overrides(&RequestOverrides {
            investment_period: Some(7),
            risk_level: Some("aggressive".into()),
            ..Default::default()
        });
        assert_eq!(overridden.initial_investment, 1000.0);
        assert_eq!(overridden.investment_period, 7);
        assert_eq!(overridden.annual_investment, 10_000.0);
        assert_eq!(overridden.risk_level, "aggressive");

        assert_eq!(request.clone().with_overrides(&RequestOverrides::default()), request);
    }

    #[test]
    fn test_scenario_base_ignores_risk_key() {
        let request = ProjectionRequest::from_json_str(
            r#"{"initial_investment": 1000, "risk_level": "extreme"}"#,
        )
        .unwrap();

        let base = request.into_scenario_base().unwrap();
        assert_eq!(base.initial_investment, 1000.0);
        assert_eq!(base.investment_period, 5);

        // Amounts are still validated
        let negative = ProjectionRequest {
            initial_investment: -1.0,
            risk_level: "extreme".into(),
            ..Default::default()
        };
        assert!(matches!(
            negative.into_scenario_base(),
            Err(ProjectionError::NegativeAmount { field: "initial investment", .. })
        ));
    }
}
