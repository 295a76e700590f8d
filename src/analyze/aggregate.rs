use super::round_score;
use crate::types::config::Weights;
use crate::types::report::FactorResult;

/// Weighted sum of factor scores, rounded to the nearest integer.
pub fn overall_score(factors: &[FactorResult; 5], weights: &Weights) -> u8 {
    let total = factors
        .iter()
        .zip(weights.as_array())
        .fold(0.0, |sum, (factor, weight)| {
            sum + f64::from(factor.score) * weight
        });
    round_score(total)
}
