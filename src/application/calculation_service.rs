//! Calculation Service - orchestrates MOORA runs over the ranking port.
//!
//! The service resolves collaborator-supplied criterion and alternative
//! records into a decision matrix, drives the pure analysis functions, and
//! persists each run's ranking batch through the `RankingRepository` port
//! as a single atomic replacement.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::domain::analysis::{
    AccuracyEvaluator, AccuracyReport, Normalizer, PreferenceScorer, Ranker, WeightAggregator,
};
use crate::domain::decision::{
    Alternative, Criterion, DecisionMatrix, RankingBatch, RankingEntry, RankingRecord,
};
use crate::domain::foundation::{EngineError, Polarity};
use crate::ports::RankingRepository;

use super::CalculationSettings;

/// One alternative's full calculation result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedAlternative {
    pub code: String,
    pub name: String,
    /// Raw values keyed by criterion code.
    pub values: HashMap<String, f64>,
    /// Normalized values keyed by criterion code.
    pub normalized_values: HashMap<String, f64>,
    /// Weighted normalized values keyed by criterion code.
    pub weighted_values: HashMap<String, f64>,
    pub preference_score: f64,
    pub rank: usize,
}

/// A criterion's resolved weight in a calculation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionSummary {
    pub code: String,
    pub name: String,
    pub polarity: Polarity,
    /// Weight on the percentage scale.
    pub weight: f64,
    /// Weight on the fractional scale actually applied to the matrix.
    pub normalized_weight: f64,
}

/// A top-recommendation entry for presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub rank: usize,
    pub code: String,
    pub name: String,
    pub score: f64,
    pub values: HashMap<String, f64>,
}

/// Headline figures for a calculation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub total_alternatives: usize,
    pub total_criteria: usize,
    pub best_alternative: String,
    pub best_score: f64,
    pub generation: Uuid,
    pub computed_at: DateTime<Utc>,
}

/// Complete result of a persisted calculation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationOutcome {
    /// All alternatives in code order with their per-criterion vectors.
    pub alternatives: Vec<RankedAlternative>,
    pub criteria: Vec<CriterionSummary>,
    pub top_recommendations: Vec<Recommendation>,
    pub summary: RunSummary,
}

/// A labeled preference score, pre-ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredAlternative {
    pub code: String,
    pub name: String,
    pub score: f64,
}

/// One position of a step-by-step ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedPosition {
    pub rank: usize,
    pub code: String,
    pub name: String,
    pub score: f64,
    pub original_index: usize,
}

/// Intermediate artifacts of a calculation, for step-by-step display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationSteps {
    pub decision_matrix: Vec<Vec<f64>>,
    pub normalized_matrix: Vec<Vec<f64>>,
    pub weighted_matrix: Vec<Vec<f64>>,
    pub preference_scores: Vec<ScoredAlternative>,
    pub ranking: Vec<RankedPosition>,
    pub total_alternatives: usize,
    pub total_criteria: usize,
}

/// One position of a human-supplied reference ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRankingEntry {
    /// Alternative index in the system ranking's order (0-based position).
    pub index: usize,
    /// Optional display name for the referenced alternative.
    pub name: Option<String>,
}

impl UserRankingEntry {
    /// Creates an unnamed reference entry.
    pub fn new(index: usize) -> Self {
        Self { index, name: None }
    }

    /// Creates a named reference entry.
    pub fn named(index: usize, name: impl Into<String>) -> Self {
        Self {
            index,
            name: Some(name.into()),
        }
    }
}

/// Accuracy evaluation result with display names resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccuracyOutcome {
    pub report: AccuracyReport,
    pub top_n: usize,
    pub system_top_n: Vec<String>,
    pub user_top_n: Vec<String>,
}

/// The best-ranked alternative of the stored batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestAlternative {
    pub name: String,
    pub score: f64,
    pub rank: usize,
}

/// Snapshot of the stored calculation state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationSummary {
    pub rankings_count: usize,
    pub generation: Uuid,
    pub computed_at: DateTime<Utc>,
    pub best_alternative: Option<BestAlternative>,
}

/// Orchestrates MOORA calculations and ranking persistence.
pub struct CalculationService {
    rankings: Arc<dyn RankingRepository>,
    settings: CalculationSettings,
}

impl CalculationService {
    /// Creates a service with default settings.
    pub fn new(rankings: Arc<dyn RankingRepository>) -> Self {
        Self::with_settings(rankings, CalculationSettings::default())
    }

    /// Creates a service with explicit settings.
    pub fn with_settings(rankings: Arc<dyn RankingRepository>, settings: CalculationSettings) -> Self {
        Self { rankings, settings }
    }

    /// Runs a complete MOORA calculation and persists the ranking batch.
    ///
    /// Criteria and alternatives are ordered by code before the matrix is
    /// resolved, so repeated calls over the same records produce the same
    /// matrix layout. When `stakeholder_weights` is supplied and non-empty,
    /// the criterion weights are replaced by the geometric-mean consensus
    /// of those vectors (each vector in criterion code order); otherwise
    /// each criterion's own weight applies. The new batch replaces any
    /// previously persisted batch in one atomic swap.
    ///
    /// # Errors
    ///
    /// Fails fast with an `EngineError` on empty inputs, missing cells,
    /// degenerate stakeholder weights, or storage failure; nothing is
    /// persisted on error.
    pub async fn calculate(
        &self,
        criteria: &[Criterion],
        alternatives: &[Alternative],
        stakeholder_weights: Option<&[Vec<f64>]>,
    ) -> Result<CalculationOutcome, EngineError> {
        let (criteria, alternatives) = ordered_by_code(criteria, alternatives);
        let matrix = DecisionMatrix::resolve(&criteria, &alternatives)?;

        let fractional_weights: Vec<f64> = match stakeholder_weights {
            Some(vectors) if !vectors.is_empty() => {
                let aggregation = WeightAggregator::aggregate(vectors)?;
                if aggregation.normalized_weights.len() != criteria.len() {
                    return Err(EngineError::StakeholderWeightMismatch {
                        expected: criteria.len(),
                        actual: aggregation.normalized_weights.len(),
                    });
                }
                aggregation
                    .normalized_weights
                    .iter()
                    .map(|weight| weight / 100.0)
                    .collect()
            }
            _ => criteria.iter().map(|c| c.weight.as_fraction()).collect(),
        };
        let polarities: Vec<Polarity> = criteria.iter().map(|c| c.polarity).collect();

        let normalized = Normalizer::normalize(&matrix);
        let weighted = PreferenceScorer::weighted_matrix(&normalized, &fractional_weights);
        let scores =
            PreferenceScorer::preference_scores(&normalized, &fractional_weights, &polarities);
        let ranking = Ranker::rank(&scores);

        let codes = matrix.criterion_codes();
        let records: Vec<RankingRecord> = ranking
            .iter()
            .map(|entry| {
                let alternative = &alternatives[entry.index];
                RankingRecord {
                    alternative_code: alternative.code.clone(),
                    alternative_name: alternative.name.clone(),
                    preference_score: entry.score,
                    rank: entry.rank,
                    normalized_values: keyed_row(codes, &normalized[entry.index]),
                    weighted_values: keyed_row(codes, &weighted[entry.index]),
                }
            })
            .collect();

        let batch = RankingBatch::new(records);
        self.rankings.replace_all(batch.clone()).await?;

        let mut rank_of = vec![0usize; alternatives.len()];
        for entry in &ranking {
            rank_of[entry.index] = entry.rank;
        }

        let ranked_alternatives: Vec<RankedAlternative> = alternatives
            .iter()
            .enumerate()
            .map(|(index, alternative)| RankedAlternative {
                code: alternative.code.clone(),
                name: alternative.name.clone(),
                values: alternative.values.clone(),
                normalized_values: keyed_row(codes, &normalized[index]),
                weighted_values: keyed_row(codes, &weighted[index]),
                preference_score: scores[index],
                rank: rank_of[index],
            })
            .collect();

        let criterion_summaries: Vec<CriterionSummary> = criteria
            .iter()
            .zip(&fractional_weights)
            .map(|(criterion, &fraction)| CriterionSummary {
                code: criterion.code.clone(),
                name: criterion.name.clone(),
                polarity: criterion.polarity,
                weight: fraction * 100.0,
                normalized_weight: fraction,
            })
            .collect();

        let top_recommendations: Vec<Recommendation> = ranking
            .iter()
            .take(self.settings.recommendation_count)
            .map(|entry| {
                let alternative = &alternatives[entry.index];
                Recommendation {
                    rank: entry.rank,
                    code: alternative.code.clone(),
                    name: alternative.name.clone(),
                    score: entry.score,
                    values: alternative.values.clone(),
                }
            })
            .collect();

        let best = &alternatives[ranking[0].index];
        let summary = RunSummary {
            total_alternatives: alternatives.len(),
            total_criteria: criteria.len(),
            best_alternative: best.name.clone(),
            best_score: ranking[0].score,
            generation: batch.generation,
            computed_at: batch.computed_at,
        };

        debug!(
            generation = %batch.generation,
            best_alternative = %summary.best_alternative,
            "Persisted ranking batch"
        );

        Ok(CalculationOutcome {
            alternatives: ranked_alternatives,
            criteria: criterion_summaries,
            top_recommendations,
            summary,
        })
    }

    /// Runs a calculation and returns the intermediate artifacts without
    /// persisting anything.
    ///
    /// Uses each criterion's own weight; stakeholder aggregation does not
    /// participate in step-by-step runs.
    ///
    /// # Errors
    ///
    /// Same input validation as [`CalculationService::calculate`].
    pub async fn calculate_steps(
        &self,
        criteria: &[Criterion],
        alternatives: &[Alternative],
    ) -> Result<CalculationSteps, EngineError> {
        let (criteria, alternatives) = ordered_by_code(criteria, alternatives);
        let matrix = DecisionMatrix::resolve(&criteria, &alternatives)?;

        let fractional_weights: Vec<f64> =
            criteria.iter().map(|c| c.weight.as_fraction()).collect();
        let polarities: Vec<Polarity> = criteria.iter().map(|c| c.polarity).collect();

        let normalized = Normalizer::normalize(&matrix);
        let weighted = PreferenceScorer::weighted_matrix(&normalized, &fractional_weights);
        let scores =
            PreferenceScorer::preference_scores(&normalized, &fractional_weights, &polarities);
        let ranking = Ranker::rank(&scores);

        let preference_scores = scores
            .iter()
            .enumerate()
            .map(|(index, &score)| ScoredAlternative {
                code: alternatives[index].code.clone(),
                name: alternatives[index].name.clone(),
                score,
            })
            .collect();

        let ranking_positions = ranking
            .iter()
            .map(|entry| RankedPosition {
                rank: entry.rank,
                code: alternatives[entry.index].code.clone(),
                name: alternatives[entry.index].name.clone(),
                score: entry.score,
                original_index: entry.index,
            })
            .collect();

        Ok(CalculationSteps {
            decision_matrix: matrix.rows().to_vec(),
            normalized_matrix: normalized,
            weighted_matrix: weighted,
            preference_scores,
            ranking: ranking_positions,
            total_alternatives: alternatives.len(),
            total_criteria: criteria.len(),
        })
    }

    /// Compares the persisted ranking against a reference ranking.
    ///
    /// Falls back to the configured default top-N when `top_n` is `None`.
    /// Index lists in the result are resolved to alternative names for
    /// display.
    ///
    /// # Errors
    ///
    /// - `NoRankings` when no batch has been calculated yet
    /// - `InvalidTopN` when the effective top-N is 0 or exceeds either side
    pub async fn evaluate_accuracy(
        &self,
        user_ranking: &[UserRankingEntry],
        top_n: Option<usize>,
    ) -> Result<AccuracyOutcome, EngineError> {
        let batch = self
            .rankings
            .current()
            .await?
            .ok_or(EngineError::NoRankings)?;
        let top_n = top_n.unwrap_or(self.settings.default_top_n);

        let system: Vec<RankingEntry> = batch
            .records
            .iter()
            .enumerate()
            .map(|(index, record)| RankingEntry {
                index,
                score: record.preference_score,
                rank: record.rank,
            })
            .collect();
        let user_indices: Vec<usize> = user_ranking.iter().map(|entry| entry.index).collect();

        let report = AccuracyEvaluator::evaluate(&system, &user_indices, top_n)?;

        let system_top_n = report
            .system_top_n
            .iter()
            .map(|&index| batch.records[index].alternative_name.clone())
            .collect();
        let user_top_n = report
            .user_top_n
            .iter()
            .map(|&index| {
                user_ranking
                    .iter()
                    .find(|entry| entry.index == index)
                    .and_then(|entry| entry.name.clone())
                    .or_else(|| {
                        batch
                            .records
                            .get(index)
                            .map(|record| record.alternative_name.clone())
                    })
                    .unwrap_or_else(|| format!("Alternative {}", index + 1))
            })
            .collect();

        debug!(top_n, accuracy = report.accuracy, "Evaluated ranking accuracy");

        Ok(AccuracyOutcome {
            report,
            top_n,
            system_top_n,
            user_top_n,
        })
    }

    /// Returns a snapshot of the stored calculation state, or `None` when
    /// nothing has been calculated yet.
    pub async fn summary(&self) -> Result<Option<CalculationSummary>, EngineError> {
        let Some(batch) = self.rankings.current().await? else {
            return Ok(None);
        };

        let best_alternative = batch.best().map(|record| BestAlternative {
            name: record.alternative_name.clone(),
            score: record.preference_score,
            rank: record.rank,
        });

        Ok(Some(CalculationSummary {
            rankings_count: batch.len(),
            generation: batch.generation,
            computed_at: batch.computed_at,
            best_alternative,
        }))
    }
}

/// Clones and sorts both record sets by code for a stable matrix layout.
fn ordered_by_code(
    criteria: &[Criterion],
    alternatives: &[Alternative],
) -> (Vec<Criterion>, Vec<Alternative>) {
    let mut criteria = criteria.to_vec();
    criteria.sort_by(|a, b| a.code.cmp(&b.code));
    let mut alternatives = alternatives.to_vec();
    alternatives.sort_by(|a, b| a.code.cmp(&b.code));
    (criteria, alternatives)
}

/// Pairs a matrix row with the criterion codes of its columns.
fn keyed_row(codes: &[String], row: &[f64]) -> HashMap<String, f64> {
    codes.iter().cloned().zip(row.iter().copied()).collect()
}
