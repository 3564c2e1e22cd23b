//! Accuracy Evaluator - confusion-matrix comparison of two top-N rankings.

use serde::{Deserialize, Serialize};

use crate::domain::decision::RankingEntry;
use crate::domain::foundation::EngineError;

/// Confusion-matrix accuracy report for a top-N ranking comparison.
///
/// The four ratio metrics are percentages (0-100).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccuracyReport {
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1_score: f64,
    pub true_positives: usize,
    pub false_positives: usize,
    pub true_negatives: usize,
    pub false_negatives: usize,
    /// Alternative indices in the system's top N, rank order.
    pub system_top_n: Vec<usize>,
    /// Alternative indices in the reference top N, rank order.
    pub user_top_n: Vec<usize>,
}

/// Compares a system-produced ranking against a reference ranking.
pub struct AccuracyEvaluator;

impl AccuracyEvaluator {
    /// Evaluates top-N agreement between the system and reference rankings.
    ///
    /// # Algorithm
    /// Take the first `top_n` indices of each side. True positives are the
    /// intersection; false positives/negatives are each side's remainder;
    /// true negatives fill up to `max(|system|, |user|)`. Accuracy,
    /// precision, recall, and F1 derive from those counts, scaled to
    /// percentages.
    ///
    /// # Edge Cases
    /// Precision and recall are 0 when their denominator is 0, and F1 is 0
    /// when precision + recall is 0; no NaN is returned.
    ///
    /// # Errors
    ///
    /// - `InvalidTopN` when `top_n` is 0 or exceeds either ranking's length
    pub fn evaluate(
        system_ranking: &[RankingEntry],
        user_ranking: &[usize],
        top_n: usize,
    ) -> Result<AccuracyReport, EngineError> {
        let available = system_ranking.len().min(user_ranking.len());
        if top_n == 0 || top_n > available {
            return Err(EngineError::InvalidTopN { top_n, available });
        }

        let system_top_n: Vec<usize> = system_ranking[..top_n].iter().map(|e| e.index).collect();
        let user_top_n: Vec<usize> = user_ranking[..top_n].to_vec();

        let true_positives = system_top_n
            .iter()
            .filter(|index| user_top_n.contains(index))
            .count();
        let false_positives = system_top_n.len() - true_positives;
        let false_negatives = user_top_n.len() - true_positives;

        let total = system_ranking.len().max(user_ranking.len());
        let true_negatives =
            total.saturating_sub(true_positives + false_positives + false_negatives);

        let accuracy = (true_positives + true_negatives) as f64 / total as f64 * 100.0;
        let precision = Self::ratio(true_positives, true_positives + false_positives);
        let recall = Self::ratio(true_positives, true_positives + false_negatives);
        let f1_score = if precision + recall == 0.0 {
            0.0
        } else {
            2.0 * precision * recall / (precision + recall)
        };

        Ok(AccuracyReport {
            accuracy,
            precision,
            recall,
            f1_score,
            true_positives,
            false_positives,
            true_negatives,
            false_negatives,
            system_top_n,
            user_top_n,
        })
    }

    /// Percentage ratio defined as 0 when the denominator is 0.
    fn ratio(numerator: usize, denominator: usize) -> f64 {
        if denominator == 0 {
            0.0
        } else {
            numerator as f64 / denominator as f64 * 100.0
        }
    }
}
