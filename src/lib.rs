//! Moora Rank - Multi-Criteria Decision Ranking Engine
//!
//! This crate implements the MOORA method (Multi-Objective Optimization by
//! Ratio Analysis) for ranking alternatives scored on weighted benefit and
//! cost criteria, with geometric-mean weight aggregation across stakeholders
//! and confusion-matrix accuracy evaluation of produced rankings.

pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;
