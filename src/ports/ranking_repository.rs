//! Ranking repository port.
//!
//! Defines the contract for persisting calculation ranking batches.
//! Implementations handle the actual storage operations.
//!
//! # Design
//!
//! - **Whole-batch writes**: A calculation run persists its full ranking
//!   set as one batch; there is no per-record mutation
//! - **Atomic replacement**: Readers must observe either the previous
//!   complete batch or the new complete batch, never a partial overwrite

use crate::domain::decision::RankingBatch;
use crate::domain::foundation::DomainError;
use async_trait::async_trait;

/// Repository port for ranking batch persistence.
///
/// Implementations must guarantee that `replace_all` swaps the stored
/// batch in a single atomic step relative to `current`, e.g. by writing
/// the new batch under its generation identifier and switching a pointer,
/// or by a transactional delete-and-insert.
#[async_trait]
pub trait RankingRepository: Send + Sync {
    /// Replace the stored batch with a new one.
    ///
    /// Any previously stored batch is discarded wholesale.
    ///
    /// # Errors
    ///
    /// - `StorageError` on persistence failure
    async fn replace_all(&self, batch: RankingBatch) -> Result<(), DomainError>;

    /// Return the current complete batch, if a calculation has run.
    async fn current(&self) -> Result<Option<RankingBatch>, DomainError>;

    /// Return the number of records in the current batch.
    async fn count(&self) -> Result<usize, DomainError>;
}
