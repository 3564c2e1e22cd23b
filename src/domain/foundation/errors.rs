//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: f64,
        max: f64,
        actual: f64,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: f64, max: f64, actual: f64) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Errors raised by the calculation engine.
///
/// Every invalid-input condition fails fast before any computation runs;
/// the engine never returns partial results.
#[derive(Debug, Clone, Error)]
pub enum EngineError {
    #[error("No alternatives supplied")]
    EmptyAlternatives,

    #[error("No criteria supplied")]
    EmptyCriteria,

    #[error("Alternative '{alternative}' has no value for criterion '{criterion}'")]
    MissingValue {
        alternative: String,
        criterion: String,
    },

    #[error("No stakeholder weight vectors supplied")]
    EmptyStakeholders,

    #[error("Stakeholder {stakeholder} supplied {actual} weights, expected {expected}")]
    RaggedStakeholderWeights {
        stakeholder: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Stakeholder weight vectors cover {actual} criteria, expected {expected}")]
    StakeholderWeightMismatch { expected: usize, actual: usize },

    #[error("Stakeholder {stakeholder} weight for criterion {criterion} must be positive, got {value}")]
    NonPositiveWeight {
        stakeholder: usize,
        criterion: usize,
        value: f64,
    },

    #[error("Top-N of {top_n} is invalid for rankings of size {available}")]
    InvalidTopN { top_n: usize, available: usize },

    #[error("No ranking batch has been calculated yet")]
    NoRankings,

    #[error(transparent)]
    Storage(#[from] DomainError),
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,
    EmptyInput,
    OutOfRange,
    MissingValue,

    // Not found errors
    RankingNotFound,

    // Infrastructure errors
    StorageError,
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::EmptyInput => "EMPTY_INPUT",
            ErrorCode::OutOfRange => "OUT_OF_RANGE",
            ErrorCode::MissingValue => "MISSING_VALUE",
            ErrorCode::RankingNotFound => "RANKING_NOT_FOUND",
            ErrorCode::StorageError => "STORAGE_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
///
/// Used at the port boundary; adapters translate storage failures into
/// this shape.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Creates a storage error.
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageError, message)
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}
