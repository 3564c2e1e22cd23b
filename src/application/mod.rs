//! Application layer orchestrating the calculation engine over the ports.

mod calculation_service;
mod settings;

pub use calculation_service::{
    AccuracyOutcome, BestAlternative, CalculationOutcome, CalculationService, CalculationSteps,
    CalculationSummary, CriterionSummary, RankedAlternative, RankedPosition, Recommendation,
    RunSummary, ScoredAlternative, UserRankingEntry,
};
pub use settings::CalculationSettings;
