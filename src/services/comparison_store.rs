use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::errors::StoreError;

/// Persists each session's comparison selection between requests.
#[async_trait]
pub trait ComparisonStore: Send + Sync {
    async fn load(&self, session_id: &str) -> Result<Option<Vec<i64>>, StoreError>;

    async fn save(&self, session_id: &str, listing_ids: &[i64]) -> Result<(), StoreError>;

    async fn delete(&self, session_id: &str) -> Result<(), StoreError>;
}

#[derive(Default)]
pub struct InMemoryComparisonStore {
    sessions: RwLock<HashMap<String, Vec<i64>>>,
}

impl InMemoryComparisonStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ComparisonStore for InMemoryComparisonStore {
    async fn load(&self, session_id: &str) -> Result<Option<Vec<i64>>, StoreError> {
        Ok(self.sessions.read().await.get(session_id).cloned())
    }

    async fn save(&self, session_id: &str, listing_ids: &[i64]) -> Result<(), StoreError> {
        self.sessions
            .write()
            .await
            .insert(session_id.to_string(), listing_ids.to_vec());
        Ok(())
    }

    async fn delete(&self, session_id: &str) -> Result<(), StoreError> {
        self.sessions.write().await.remove(session_id);
        Ok(())
    }
}
