use std::path::Path;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::errors::StoreError;
use crate::models::listing::{AdminHotel, ListingRecord};

/// Read access to the listing source.
#[async_trait]
pub trait ListingRepository: Send + Sync {
    async fn all_listings(&self) -> Result<Vec<ListingRecord>, StoreError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<ListingRecord>, StoreError>;

    /// Listings in the order of `ids`; unknown ids are skipped.
    async fn find_by_ids(&self, ids: &[i64]) -> Result<Vec<ListingRecord>, StoreError> {
        let listings = self.all_listings().await?;
        Ok(ids
            .iter()
            .filter_map(|id| listings.iter().find(|listing| listing.id == *id).cloned())
            .collect())
    }

    async fn ping(&self) -> Result<(), StoreError>;

    /// Name reported by the health endpoint
    fn backend(&self) -> &'static str;
}

#[derive(Default)]
pub struct InMemoryListingRepository {
    listings: RwLock<Vec<ListingRecord>>,
}

impl InMemoryListingRepository {
    pub fn new(listings: Vec<ListingRecord>) -> Self {
        Self {
            listings: RwLock::new(listings),
        }
    }

    /// Seed from a JSON array of back-office hotel records.
    pub async fn from_json_file(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let raw = tokio::fs::read_to_string(path.as_ref()).await?;
        let hotels: Vec<AdminHotel> = serde_json::from_str(&raw)?;
        log::info!(
            "Loaded {} listings from {}",
            hotels.len(),
            path.as_ref().display()
        );
        Ok(Self::new(hotels.into_iter().map(ListingRecord::from).collect()))
    }
}

#[async_trait]
impl ListingRepository for InMemoryListingRepository {
    async fn all_listings(&self) -> Result<Vec<ListingRecord>, StoreError> {
        Ok(self.listings.read().await.clone())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<ListingRecord>, StoreError> {
        Ok(self
            .listings
            .read()
            .await
            .iter()
            .find(|listing| listing.id == id)
            .cloned())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
