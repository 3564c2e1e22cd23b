//! Criterion polarity (benefit vs cost attribute).

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a higher raw value on a criterion is preferred or penalized.
///
/// Serialized as a lowercase attribute string. Unknown attribute strings
/// deserialize to `Unspecified`, which contributes to neither the benefit
/// nor the cost sum during scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarity {
    /// Higher raw value is preferred.
    Benefit,
    /// Lower raw value is preferred; weighted contribution is subtracted.
    Cost,
    /// Neither benefit nor cost; ignored by the scorer.
    Unspecified,
}

impl Polarity {
    /// Parses an attribute string, mapping unknown values to `Unspecified`.
    pub fn parse(attribute: &str) -> Self {
        match attribute {
            "benefit" => Polarity::Benefit,
            "cost" => Polarity::Cost,
            _ => Polarity::Unspecified,
        }
    }

    /// Returns true for benefit criteria.
    pub fn is_benefit(&self) -> bool {
        matches!(self, Polarity::Benefit)
    }

    /// Returns true for cost criteria.
    pub fn is_cost(&self) -> bool {
        matches!(self, Polarity::Cost)
    }

    /// Returns the display label for this polarity.
    pub fn label(&self) -> &'static str {
        match self {
            Polarity::Benefit => "benefit",
            Polarity::Cost => "cost",
            Polarity::Unspecified => "unspecified",
        }
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Serialize for Polarity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Polarity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let attribute = String::deserialize(deserializer)?;
        Ok(Polarity::parse(&attribute))
    }
}
