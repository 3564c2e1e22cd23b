//! Ranking results - per-run entries, persisted records, and batches.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// One position in a computed ranking.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankingEntry {
    /// Index of the alternative in the matrix row order.
    pub index: usize,
    /// Signed preference score (benefit sum minus cost sum).
    pub score: f64,
    /// 1-based dense rank; rank 1 is best.
    pub rank: usize,
}

/// A persisted per-alternative ranking result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingRecord {
    pub alternative_code: String,
    pub alternative_name: String,
    pub preference_score: f64,
    pub rank: usize,
    /// Normalized matrix row keyed by criterion code.
    pub normalized_values: HashMap<String, f64>,
    /// Weighted normalized row keyed by criterion code.
    pub weighted_values: HashMap<String, f64>,
}

/// A full calculation run's ranking set.
///
/// Each run produces a fresh batch under a new generation identifier; the
/// batch replaces any previously stored batch wholesale. No history is kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingBatch {
    pub generation: Uuid,
    pub computed_at: DateTime<Utc>,
    /// Records ordered by rank ascending.
    pub records: Vec<RankingRecord>,
}

impl RankingBatch {
    /// Creates a batch under a fresh generation identifier.
    pub fn new(records: Vec<RankingRecord>) -> Self {
        Self {
            generation: Uuid::new_v4(),
            computed_at: Utc::now(),
            records,
        }
    }

    /// Returns the number of records in the batch.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the batch holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the rank-1 record, if any.
    pub fn best(&self) -> Option<&RankingRecord> {
        self.records.first()
    }
}
