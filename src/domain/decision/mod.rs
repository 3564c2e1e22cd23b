//! Decision-model types: criteria, alternatives, matrices, and rankings.

mod alternative;
mod criterion;
mod decision_matrix;
mod ranking;

pub use alternative::Alternative;
pub use criterion::Criterion;
pub use decision_matrix::DecisionMatrix;
pub use ranking::{RankingBatch, RankingEntry, RankingRecord};
