use std::sync::Arc;

use crate::config::Settings;
use crate::db::{
    comparisons::MongoComparisonStore, listings::MongoListingRepository,
    mongo::create_mongo_client,
};
use crate::errors::StoreError;
use crate::services::comparison_service::ComparisonSet;
use crate::services::comparison_store::{ComparisonStore, InMemoryComparisonStore};
use crate::services::listing_repository::{InMemoryListingRepository, ListingRepository};

/// Shared by every handler through `web::Data`.
#[derive(Clone)]
pub struct AppState {
    pub listings: Arc<dyn ListingRepository>,
    pub comparisons: Arc<dyn ComparisonStore>,
    pub settings: Settings,
}

impl AppState {
    pub fn new(
        listings: Arc<dyn ListingRepository>,
        comparisons: Arc<dyn ComparisonStore>,
        settings: Settings,
    ) -> Self {
        Self {
            listings,
            comparisons,
            settings,
        }
    }

    /// Pick storage from the settings: MongoDB when a URI is configured,
    /// otherwise in-memory stores, optionally seeded from a listings file.
    pub async fn from_settings(settings: Settings) -> Result<Self, StoreError> {
        if let Some(uri) = &settings.mongodb_uri {
            let client = create_mongo_client(uri).await?;
            let listings = MongoListingRepository::new(&client, &settings.mongodb_database);
            let comparisons = MongoComparisonStore::new(&client, &settings.mongodb_database);
            return Ok(Self::new(Arc::new(listings), Arc::new(comparisons), settings));
        }

        let listings = match &settings.listings_file {
            Some(path) => InMemoryListingRepository::from_json_file(path).await?,
            None => {
                log::warn!("No MONGODB_URI or LISTINGS_FILE configured, starting with no listings");
                InMemoryListingRepository::default()
            }
        };
        Ok(Self::new(
            Arc::new(listings),
            Arc::new(InMemoryComparisonStore::new()),
            settings,
        ))
    }

    /// The stored selection for a session, truncated to the current capacity.
    pub async fn load_comparison(&self, session_id: &str) -> Result<ComparisonSet, StoreError> {
        let stored = self.comparisons.load(session_id).await?.unwrap_or_default();
        Ok(ComparisonSet::from_ids(
            self.settings.comparison_capacity,
            stored,
        ))
    }
}
