use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ListingError;
use crate::models::listing::ListingRecord;

/// Inclusive `(min, max)` price per night.
pub type PriceRange = (f64, f64);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub search_query: String,
    pub selected_stars: Vec<u8>,
    pub selected_amenities: Vec<String>,
    pub price_range: PriceRange,
}

impl FilterCriteria {
    /// Criteria that match everything within `price_range`.
    pub fn new(price_range: PriceRange) -> Self {
        Self {
            search_query: String::new(),
            selected_stars: Vec::new(),
            selected_amenities: Vec::new(),
            price_range,
        }
    }

    pub fn with_search_query(self, search_query: impl Into<String>) -> Self {
        Self {
            search_query: search_query.into(),
            ..self
        }
    }

    pub fn with_price_range(self, price_range: PriceRange) -> Self {
        Self {
            price_range,
            ..self
        }
    }

    /// Selects `stars` if absent, deselects it otherwise.
    pub fn toggle_star(self, stars: u8) -> Self {
        let mut selected_stars = self.selected_stars;
        match selected_stars.iter().position(|s| *s == stars) {
            Some(index) => {
                selected_stars.remove(index);
            }
            None => selected_stars.push(stars),
        }
        Self {
            selected_stars,
            ..self
        }
    }

    /// Selects `amenity` if absent, deselects it otherwise.
    pub fn toggle_amenity(self, amenity: impl Into<String>) -> Self {
        let amenity = amenity.into();
        let mut selected_amenities = self.selected_amenities;
        match selected_amenities.iter().position(|a| *a == amenity) {
            Some(index) => {
                selected_amenities.remove(index);
            }
            None => selected_amenities.push(amenity),
        }
        Self {
            selected_amenities,
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Price,
    Rating,
    Popularity,
    Distance,
}

impl SortKey {
    pub fn as_str(&self) -> &str {
        match self {
            SortKey::Price => "price",
            SortKey::Rating => "rating",
            SortKey::Popularity => "popularity",
            SortKey::Distance => "distance",
        }
    }

    /// Numeric field of the listing this key orders by.
    pub fn value_of(&self, listing: &ListingRecord) -> f64 {
        match self {
            SortKey::Price => listing.price_per_night,
            SortKey::Rating => listing.rating,
            SortKey::Popularity => listing.review_count as f64,
            SortKey::Distance => listing.distance_km,
        }
    }
}

impl FromStr for SortKey {
    type Err = ListingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "price" => Ok(SortKey::Price),
            "rating" => Ok(SortKey::Rating),
            "popularity" => Ok(SortKey::Popularity),
            "distance" => Ok(SortKey::Distance),
            _ => Err(ListingError::InvalidSortKey(s.to_string())),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortOrder {
    type Err = ListingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(ListingError::InvalidSortOrder(s.to_string())),
        }
    }
}

/// Body of `/api/listings/search`. Every field is optional; missing filters
/// match everything and a missing price range uses the configured default.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SearchRequest {
    pub search_query: String,
    pub selected_stars: Vec<u8>,
    pub selected_amenities: Vec<String>,
    pub price_range: Option<PriceRange>,
    pub sort_by: Option<String>,
    pub order: Option<String>,
}

impl SearchRequest {
    pub fn criteria(&self, default_price_range: PriceRange) -> FilterCriteria {
        FilterCriteria {
            search_query: self.search_query.clone(),
            selected_stars: self.selected_stars.clone(),
            selected_amenities: self.selected_amenities.clone(),
            price_range: self.price_range.unwrap_or(default_price_range),
        }
    }

    /// Parsed sort instruction, `None` when the caller asked for no sorting.
    pub fn sort(&self) -> Result<Option<(SortKey, SortOrder)>, ListingError> {
        let order = match &self.order {
            Some(order) => order.parse()?,
            None => SortOrder::default(),
        };
        match &self.sort_by {
            Some(key) => Ok(Some((key.parse()?, order))),
            None => Ok(None),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub listings: Vec<ListingRecord>,
    pub total: usize,
    pub active_filters: usize,
}
