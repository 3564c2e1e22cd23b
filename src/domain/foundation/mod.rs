//! Foundation module containing shared domain primitives.
//!
//! - `errors` - Validation, engine, and domain error types
//! - `polarity` - Benefit/cost criterion polarity
//! - `weight` - Percentage-scale criterion weight value object

mod errors;
mod polarity;
mod weight;

pub use errors::{DomainError, EngineError, ErrorCode, ValidationError};
pub use polarity::Polarity;
pub use weight::Weight;
