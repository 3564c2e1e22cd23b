//! Alternative record - a candidate item scored against the criterion set.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A candidate alternative with raw scores keyed by criterion code.
///
/// Every alternative must carry a value for every active criterion; the
/// check happens when the decision matrix is resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    pub code: String,
    pub name: String,
    pub values: HashMap<String, f64>,
    pub description: Option<String>,
}

impl Alternative {
    /// Creates a new alternative with no values.
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            values: HashMap::new(),
            description: None,
        }
    }

    /// Adds a value for a criterion, returning self for chaining.
    pub fn with_value(mut self, criterion_code: impl Into<String>, value: f64) -> Self {
        self.values.insert(criterion_code.into(), value);
        self
    }

    /// Sets a value for a criterion.
    pub fn set_value(&mut self, criterion_code: impl Into<String>, value: f64) {
        self.values.insert(criterion_code.into(), value);
    }

    /// Returns the value for a criterion, if present.
    pub fn value(&self, criterion_code: &str) -> Option<f64> {
        self.values.get(criterion_code).copied()
    }
}
