//! Criterion record - a weighted benefit or cost attribute.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Polarity, Weight};

/// A decision criterion with a unique code, polarity, and percentage weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criterion {
    pub code: String,
    pub name: String,
    pub polarity: Polarity,
    pub weight: Weight,
    pub description: Option<String>,
}

impl Criterion {
    /// Creates a new criterion.
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        polarity: Polarity,
        weight: Weight,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            polarity,
            weight,
            description: None,
        }
    }

    /// Creates a criterion with a description.
    pub fn with_description(
        code: impl Into<String>,
        name: impl Into<String>,
        polarity: Polarity,
        weight: Weight,
        description: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            polarity,
            weight,
            description: Some(description.into()),
        }
    }
}
