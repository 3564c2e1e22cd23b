//! Normalizer - Euclidean vector normalization of criterion columns.

use crate::domain::decision::DecisionMatrix;

/// Vector normalization of a decision matrix.
pub struct Normalizer;

impl Normalizer {
    /// Normalizes each criterion column by its Euclidean norm.
    ///
    /// # Algorithm
    /// For each column j: `denom_j = sqrt(Σ_i matrix[i][j]²)`, then
    /// `output[i][j] = matrix[i][j] / denom_j`.
    ///
    /// # Edge Cases
    /// - All-zero column (`denom_j == 0`): normalizes to all zeros
    /// - Negative values: same formula, sign preserved
    ///
    /// The output is relative to the input's column norms, so the function
    /// is not an idempotent projection of arbitrary input; it is
    /// deterministic for any given matrix.
    pub fn normalize(matrix: &DecisionMatrix) -> Vec<Vec<f64>> {
        let columns = matrix.criterion_count();

        let mut norms = vec![0.0_f64; columns];
        for row in matrix.rows() {
            for (j, value) in row.iter().enumerate() {
                norms[j] += value * value;
            }
        }
        for norm in &mut norms {
            *norm = norm.sqrt();
        }

        matrix
            .rows()
            .iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .map(|(j, value)| {
                        if norms[j] == 0.0 {
                            0.0
                        } else {
                            value / norms[j]
                        }
                    })
                    .collect()
            })
            .collect()
    }
}
