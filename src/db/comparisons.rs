use async_trait::async_trait;
use bson::doc;
use mongodb::{Client, Collection};

use crate::errors::StoreError;
use crate::models::comparison::ComparisonDocument;
use crate::services::comparison_store::ComparisonStore;

pub const COMPARISONS_COLLECTION: &str = "Comparisons";

/// One document per session, replaced wholesale on every save.
pub struct MongoComparisonStore {
    collection: Collection<ComparisonDocument>,
}

impl MongoComparisonStore {
    pub fn new(client: &Client, database: &str) -> Self {
        Self {
            collection: client.database(database).collection(COMPARISONS_COLLECTION),
        }
    }
}

#[async_trait]
impl ComparisonStore for MongoComparisonStore {
    async fn load(&self, session_id: &str) -> Result<Option<Vec<i64>>, StoreError> {
        let document = self
            .collection
            .find_one(doc! { "session_id": session_id })
            .await?;
        Ok(document.map(|document| document.listing_ids))
    }

    async fn save(&self, session_id: &str, listing_ids: &[i64]) -> Result<(), StoreError> {
        let document = ComparisonDocument {
            session_id: session_id.to_string(),
            listing_ids: listing_ids.to_vec(),
            updated_at: Some(chrono::Utc::now()),
        };
        self.collection
            .replace_one(doc! { "session_id": session_id }, &document)
            .upsert(true)
            .await?;
        Ok(())
    }

    async fn delete(&self, session_id: &str) -> Result<(), StoreError> {
        self.collection
            .delete_one(doc! { "session_id": session_id })
            .await?;
        Ok(())
    }
}
