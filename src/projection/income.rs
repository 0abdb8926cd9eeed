//! Passive income from a series of capital calls

/// Annual passive income on everything called.
///
/// Capital calls may carry either sign; only their magnitude counts.
pub fn calculate_passive_income(capital_calls: &[f64], risk_level_percentage: f64) -> f64 {
    capital_calls
        .iter()
        .fold(0.0_f64, |sum, call| sum.abs() + call.abs())
        * risk_level_percentage
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_passive_income() {
        assert_abs_diff_eq!(calculate_passive_income(&[100.0, 200.0], 0.1), 30.0, epsilon = 1e-12);
    }

    #[test]
    fn test_empty_calls() {
        assert_eq!(calculate_passive_income(&[], 0.1433), 0.0);
        assert_eq!(calculate_passive_income(&[], 5.0), 0.0);
    }

    #[test]
    fn test_sign_ignored() {
        assert_abs_diff_eq!(
            calculate_passive_income(&[-1000.0, -100.0, 0.0, 100.0], 0.091),
            1200.0 * 0.091,
            epsilon = 1e-9
        );
    }
}
