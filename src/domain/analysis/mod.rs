//! Analysis Module - Pure domain services for MOORA calculation.
//!
//! This module contains stateless functions that operate on domain objects
//! to rank alternatives and evaluate ranking quality.
//!
//! # Components
//!
//! - `Normalizer` - Euclidean vector normalization of criterion columns
//! - `PreferenceScorer` - Weighted matrix and signed preference scores
//! - `Ranker` - Total ordering of alternatives by preference score
//! - `WeightAggregator` - Geometric-mean consensus across stakeholder weights
//! - `AccuracyEvaluator` - Confusion-matrix comparison of two top-N rankings
//!
//! # Design Philosophy
//!
//! All functions are pure (no side effects) and stateless. They take domain
//! objects as input and return computed results. No ports or adapters needed
//! since there's no I/O or external dependencies, and they never log; invalid
//! input fails fast before any computation runs.

mod accuracy_evaluator;
mod normalizer;
mod ranker;
mod scorer;
mod weight_aggregator;

// Re-export all public types
pub use accuracy_evaluator::{AccuracyEvaluator, AccuracyReport};
pub use normalizer::Normalizer;
pub use ranker::Ranker;
pub use scorer::PreferenceScorer;
pub use weight_aggregator::{WeightAggregation, WeightAggregator};
