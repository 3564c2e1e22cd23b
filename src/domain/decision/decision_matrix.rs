//! Decision matrix - index-addressed alternative x criterion values.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::EngineError;

use super::{Alternative, Criterion};

/// A rectangular matrix of raw values, rows = alternatives, columns = criteria.
///
/// Code-keyed records are resolved into index-addressed rows exactly once,
/// at construction; rows follow the supplied alternative order and columns
/// the supplied criterion order. The matrix is never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionMatrix {
    alternative_codes: Vec<String>,
    criterion_codes: Vec<String>,
    rows: Vec<Vec<f64>>,
}

impl DecisionMatrix {
    /// Resolves criteria and alternatives into a decision matrix.
    ///
    /// # Errors
    ///
    /// - `EmptyCriteria` / `EmptyAlternatives` on empty input
    /// - `MissingValue` when an alternative lacks a value for a criterion
    pub fn resolve(
        criteria: &[Criterion],
        alternatives: &[Alternative],
    ) -> Result<Self, EngineError> {
        if criteria.is_empty() {
            return Err(EngineError::EmptyCriteria);
        }
        if alternatives.is_empty() {
            return Err(EngineError::EmptyAlternatives);
        }

        let criterion_codes: Vec<String> = criteria.iter().map(|c| c.code.clone()).collect();
        let alternative_codes: Vec<String> = alternatives.iter().map(|a| a.code.clone()).collect();

        let mut rows = Vec::with_capacity(alternatives.len());
        for alternative in alternatives {
            let mut row = Vec::with_capacity(criterion_codes.len());
            for code in &criterion_codes {
                let value = alternative.value(code).ok_or_else(|| EngineError::MissingValue {
                    alternative: alternative.code.clone(),
                    criterion: code.clone(),
                })?;
                row.push(value);
            }
            rows.push(row);
        }

        Ok(Self {
            alternative_codes,
            criterion_codes,
            rows,
        })
    }

    /// Builds a matrix from pre-resolved rows.
    ///
    /// # Errors
    ///
    /// - `EmptyCriteria` / `EmptyAlternatives` on empty input
    /// - `MissingValue` when a row is shorter than the criterion list
    pub fn from_rows(
        alternative_codes: Vec<String>,
        criterion_codes: Vec<String>,
        rows: Vec<Vec<f64>>,
    ) -> Result<Self, EngineError> {
        if criterion_codes.is_empty() {
            return Err(EngineError::EmptyCriteria);
        }
        if alternative_codes.is_empty() || rows.is_empty() {
            return Err(EngineError::EmptyAlternatives);
        }
        for (i, row) in rows.iter().enumerate() {
            if row.len() != criterion_codes.len() {
                let alternative = alternative_codes
                    .get(i)
                    .cloned()
                    .unwrap_or_else(|| i.to_string());
                let criterion = criterion_codes
                    .get(row.len())
                    .cloned()
                    .unwrap_or_else(|| row.len().to_string());
                return Err(EngineError::MissingValue {
                    alternative,
                    criterion,
                });
            }
        }

        Ok(Self {
            alternative_codes,
            criterion_codes,
            rows,
        })
    }

    /// Returns the value at (row, column).
    pub fn value(&self, row: usize, column: usize) -> f64 {
        self.rows[row][column]
    }

    /// Returns the matrix rows.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Returns the ordered alternative codes (row order).
    pub fn alternative_codes(&self) -> &[String] {
        &self.alternative_codes
    }

    /// Returns the ordered criterion codes (column order).
    pub fn criterion_codes(&self) -> &[String] {
        &self.criterion_codes
    }

    /// Returns the number of alternatives (rows).
    pub fn alternative_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the number of criteria (columns).
    pub fn criterion_count(&self) -> usize {
        self.criterion_codes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{Polarity, Weight};

    fn criteria() -> Vec<Criterion> {
        vec![
            Criterion::new("K1", "Price", Polarity::Cost, Weight::new(50.0)),
            Criterion::new("K2", "Quality", Polarity::Benefit, Weight::new(50.0)),
        ]
    }

    #[test]
    fn resolve_builds_rows_in_input_order() {
        let alternatives = vec![
            Alternative::new("A", "First").with_value("K1", 100.0).with_value("K2", 10.0),
            Alternative::new("B", "Second").with_value("K1", 50.0).with_value("K2", 20.0),
        ];

        let matrix = DecisionMatrix::resolve(&criteria(), &alternatives).unwrap();

        assert_eq!(matrix.alternative_count(), 2);
        assert_eq!(matrix.criterion_count(), 2);
        assert_eq!(matrix.value(0, 0), 100.0);
        assert_eq!(matrix.value(1, 1), 20.0);
        assert_eq!(matrix.alternative_codes(), ["A", "B"]);
        assert_eq!(matrix.criterion_codes(), ["K1", "K2"]);
    }

    #[test]
    fn resolve_rejects_empty_criteria() {
        let alternatives = vec![Alternative::new("A", "First").with_value("K1", 1.0)];
        let result = DecisionMatrix::resolve(&[], &alternatives);
        assert!(matches!(result, Err(EngineError::EmptyCriteria)));
    }

    #[test]
    fn resolve_rejects_empty_alternatives() {
        let result = DecisionMatrix::resolve(&criteria(), &[]);
        assert!(matches!(result, Err(EngineError::EmptyAlternatives)));
    }

    #[test]
    fn resolve_rejects_missing_cell() {
        let alternatives = vec![
            Alternative::new("A", "First").with_value("K1", 100.0).with_value("K2", 10.0),
            Alternative::new("B", "Second").with_value("K1", 50.0), // K2 missing
        ];

        let result = DecisionMatrix::resolve(&criteria(), &alternatives);
        match result {
            Err(EngineError::MissingValue { alternative, criterion }) => {
                assert_eq!(alternative, "B");
                assert_eq!(criterion, "K2");
            }
            other => panic!("Expected MissingValue, got {:?}", other),
        }
    }

    #[test]
    fn from_rows_accepts_rectangular_data() {
        let matrix = DecisionMatrix::from_rows(
            vec!["A".into(), "B".into()],
            vec!["K1".into()],
            vec![vec![1.0], vec![2.0]],
        )
        .unwrap();

        assert_eq!(matrix.value(1, 0), 2.0);
    }

    #[test]
    fn from_rows_rejects_ragged_data() {
        let result = DecisionMatrix::from_rows(
            vec!["A".into(), "B".into()],
            vec!["K1".into(), "K2".into()],
            vec![vec![1.0, 2.0], vec![3.0]],
        );

        assert!(matches!(result, Err(EngineError::MissingValue { .. })));
    }
}
