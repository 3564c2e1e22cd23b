//! Calculation settings.

use serde::{Deserialize, Serialize};

/// Tunables for calculation outputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculationSettings {
    /// Number of entries in the top-recommendation list.
    pub recommendation_count: usize,
    /// Top-N used for accuracy comparisons when the caller gives none.
    pub default_top_n: usize,
}

impl Default for CalculationSettings {
    fn default() -> Self {
        Self {
            recommendation_count: 5,
            default_top_n: 3,
        }
    }
}
