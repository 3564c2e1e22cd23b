//! Weight Aggregator - geometric-mean consensus across stakeholder weights.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::EngineError;

/// Result of aggregating stakeholder weight vectors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightAggregation {
    /// Per-criterion geometric mean across stakeholders.
    pub geometric_means: Vec<f64>,
    /// Sum of the geometric means.
    pub total: f64,
    /// Percentage weights summing to 100.
    pub normalized_weights: Vec<f64>,
}

/// Combines multiple stakeholders' raw weight vectors into one consensus
/// weight vector.
pub struct WeightAggregator;

impl WeightAggregator {
    /// Aggregates stakeholder weight vectors via per-criterion geometric mean.
    ///
    /// # Algorithm
    /// `gmean_j = (Π_i weight[i][j])^(1/numStakeholders)`;
    /// `normalized_j = 100 · gmean_j / Σ gmean`.
    ///
    /// # Errors
    ///
    /// - `EmptyStakeholders` when no vectors are supplied
    /// - `EmptyCriteria` when vectors have zero length
    /// - `RaggedStakeholderWeights` when vector lengths differ
    /// - `NonPositiveWeight` when any weight is zero, negative, or non-finite
    ///   (the geometric mean is undefined there)
    pub fn aggregate(stakeholder_weights: &[Vec<f64>]) -> Result<WeightAggregation, EngineError> {
        let first = stakeholder_weights
            .first()
            .ok_or(EngineError::EmptyStakeholders)?;
        let criteria = first.len();
        if criteria == 0 {
            return Err(EngineError::EmptyCriteria);
        }

        for (stakeholder, weights) in stakeholder_weights.iter().enumerate() {
            if weights.len() != criteria {
                return Err(EngineError::RaggedStakeholderWeights {
                    stakeholder,
                    expected: criteria,
                    actual: weights.len(),
                });
            }
            for (criterion, &weight) in weights.iter().enumerate() {
                if !weight.is_finite() || weight <= 0.0 {
                    return Err(EngineError::NonPositiveWeight {
                        stakeholder,
                        criterion,
                        value: weight,
                    });
                }
            }
        }

        let exponent = 1.0 / stakeholder_weights.len() as f64;
        let geometric_means: Vec<f64> = (0..criteria)
            .map(|j| {
                let product: f64 = stakeholder_weights.iter().map(|w| w[j]).product();
                product.powf(exponent)
            })
            .collect();

        let total: f64 = geometric_means.iter().sum();
        let normalized_weights: Vec<f64> = geometric_means
            .iter()
            .map(|mean| mean / total * 100.0)
            .collect();

        Ok(WeightAggregation {
            geometric_means,
            total,
            normalized_weights,
        })
    }
}
