use async_trait::async_trait;
use bson::doc;
use futures::TryStreamExt;
use mongodb::{Client, Collection, Database};

use crate::errors::StoreError;
use crate::models::listing::{AdminHotel, ListingRecord};
use crate::services::listing_repository::ListingRepository;

pub const LISTINGS_COLLECTION: &str = "Listings";

/// Listings stored as back-office hotel documents.
pub struct MongoListingRepository {
    database: Database,
    collection: Collection<AdminHotel>,
}

impl MongoListingRepository {
    pub fn new(client: &Client, database: &str) -> Self {
        let database = client.database(database);
        let collection = database.collection(LISTINGS_COLLECTION);
        Self {
            database,
            collection,
        }
    }
}

#[async_trait]
impl ListingRepository for MongoListingRepository {
    async fn all_listings(&self) -> Result<Vec<ListingRecord>, StoreError> {
        let cursor = self.collection.find(doc! {}).sort(doc! { "id": 1 }).await?;
        let hotels: Vec<AdminHotel> = cursor.try_collect().await?;
        Ok(hotels.into_iter().map(ListingRecord::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<ListingRecord>, StoreError> {
        let hotel = self.collection.find_one(doc! { "id": id }).await?;
        Ok(hotel.map(ListingRecord::from))
    }

    async fn find_by_ids(&self, ids: &[i64]) -> Result<Vec<ListingRecord>, StoreError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let cursor = self
            .collection
            .find(doc! { "id": { "$in": ids.to_vec() } })
            .await?;
        let hotels: Vec<AdminHotel> = cursor.try_collect().await?;

        Ok(ids
            .iter()
            .filter_map(|id| hotels.iter().find(|hotel| hotel.id == *id).cloned())
            .map(ListingRecord::from)
            .collect())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "mongodb"
    }
}
