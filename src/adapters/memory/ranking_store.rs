//! In-Memory Ranking Store Adapter
//!
//! Stores the current ranking batch in memory. Useful for testing and
//! for embedding the engine without external storage.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::decision::RankingBatch;
use crate::domain::foundation::DomainError;
use crate::ports::RankingRepository;

/// In-memory storage for the current ranking batch.
///
/// `replace_all` swaps the whole batch behind a write lock, so readers
/// see either the previous batch or the new one, never a partial state.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRankingStore {
    batch: Arc<RwLock<Option<RankingBatch>>>,
}

impl InMemoryRankingStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the stored batch (useful for tests).
    pub async fn clear(&self) {
        *self.batch.write().await = None;
    }
}

#[async_trait]
impl RankingRepository for InMemoryRankingStore {
    async fn replace_all(&self, batch: RankingBatch) -> Result<(), DomainError> {
        *self.batch.write().await = Some(batch);
        Ok(())
    }

    async fn current(&self) -> Result<Option<RankingBatch>, DomainError> {
        Ok(self.batch.read().await.clone())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.batch.read().await.as_ref().map_or(0, |b| b.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::decision::RankingRecord;
    use std::collections::HashMap;

    fn batch(codes: &[&str]) -> RankingBatch {
        let records = codes
            .iter()
            .enumerate()
            .map(|(position, code)| RankingRecord {
                alternative_code: code.to_string(),
                alternative_name: format!("Alternative {}", code),
                preference_score: 1.0 - position as f64 * 0.1,
                rank: position + 1,
                normalized_values: HashMap::new(),
                weighted_values: HashMap::new(),
            })
            .collect();
        RankingBatch::new(records)
    }

    #[tokio::test]
    async fn test_store_starts_empty() {
        let store = InMemoryRankingStore::new();

        assert!(store.current().await.unwrap().is_none());
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_store_replace_and_read_back() {
        let store = InMemoryRankingStore::new();
        let stored = batch(&["B", "A"]);

        store.replace_all(stored.clone()).await.unwrap();

        let current = store.current().await.unwrap().unwrap();
        assert_eq!(current, stored);
        assert_eq!(store.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_store_replace_discards_previous_batch() {
        let store = InMemoryRankingStore::new();

        store.replace_all(batch(&["A", "B", "C"])).await.unwrap();
        let second = batch(&["C", "A"]);
        store.replace_all(second.clone()).await.unwrap();

        let current = store.current().await.unwrap().unwrap();
        assert_eq!(current.generation, second.generation);
        assert_eq!(current.len(), 2);
    }

    #[tokio::test]
    async fn test_store_clear_removes_batch() {
        let store = InMemoryRankingStore::new();
        store.replace_all(batch(&["A"])).await.unwrap();

        store.clear().await;

        assert!(store.current().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_store_readers_see_complete_batches_under_concurrent_swaps() {
        let store = InMemoryRankingStore::new();
        store.replace_all(batch(&["A", "B"])).await.unwrap();

        let writer = store.clone();
        let write = tokio::spawn(async move {
            for _ in 0..50 {
                writer.replace_all(batch(&["C", "D"])).await.unwrap();
                writer.replace_all(batch(&["A", "B"])).await.unwrap();
            }
        });

        let reader = store.clone();
        let read = tokio::spawn(async move {
            for _ in 0..100 {
                let current = reader.current().await.unwrap().unwrap();
                // Every observed batch is one of the two complete sets.
                let codes: Vec<&str> = current
                    .records
                    .iter()
                    .map(|r| r.alternative_code.as_str())
                    .collect();
                assert!(codes == ["A", "B"] || codes == ["C", "D"]);
            }
        });

        write.await.unwrap();
        read.await.unwrap();
    }
}
