//! Preference Scorer - weighted matrices and signed preference scores.

use crate::domain::foundation::Polarity;

/// Weighted scoring over a normalized decision matrix.
///
/// Weights are expected on a 0-1 fractional scale; callers convert from
/// percentages before invoking the scorer. No rescaling happens here.
pub struct PreferenceScorer;

impl PreferenceScorer {
    /// Computes the weighted normalized matrix.
    ///
    /// Elementwise `normalized[i][j] * weights[j]`.
    pub fn weighted_matrix(normalized: &[Vec<f64>], weights: &[f64]) -> Vec<Vec<f64>> {
        normalized
            .iter()
            .map(|row| {
                row.iter()
                    .zip(weights)
                    .map(|(value, weight)| value * weight)
                    .collect()
            })
            .collect()
    }

    /// Computes the signed preference score per alternative.
    ///
    /// # Algorithm
    /// `Yi = Σ_{benefit j} weights[j]·normalized[i][j] − Σ_{cost j} weights[j]·normalized[i][j]`
    ///
    /// # Edge Cases
    /// - `Unspecified` polarity contributes to neither sum
    pub fn preference_scores(
        normalized: &[Vec<f64>],
        weights: &[f64],
        polarities: &[Polarity],
    ) -> Vec<f64> {
        normalized
            .iter()
            .map(|row| {
                let mut sum_benefit = 0.0;
                let mut sum_cost = 0.0;

                for ((value, weight), polarity) in row.iter().zip(weights).zip(polarities) {
                    let weighted = weight * value;
                    match polarity {
                        Polarity::Benefit => sum_benefit += weighted,
                        Polarity::Cost => sum_cost += weighted,
                        Polarity::Unspecified => {}
                    }
                }

                sum_benefit - sum_cost
            })
            .collect()
    }
}
