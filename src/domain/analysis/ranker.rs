//! Ranker - total ordering of alternatives by preference score.

use crate::domain::decision::RankingEntry;

/// Ranks alternatives by descending preference score.
pub struct Ranker;

impl Ranker {
    /// Ranks the given scores.
    ///
    /// # Algorithm
    /// Sort by score descending; rank = 1 + sorted position (dense, no gaps).
    /// Equal scores order by original index ascending, so repeated calls on
    /// the same input always produce the identical ranking.
    pub fn rank(scores: &[f64]) -> Vec<RankingEntry> {
        let mut indexed: Vec<(usize, f64)> = scores.iter().copied().enumerate().collect();
        indexed.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        indexed
            .into_iter()
            .enumerate()
            .map(|(position, (index, score))| RankingEntry {
                index,
                score,
                rank: position + 1,
            })
            .collect()
    }
}
