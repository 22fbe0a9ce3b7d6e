use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingKind {
    #[default]
    Hotel,
    Car,
    Bike,
    Adventure,
}

/// Canonical bookable listing used by filtering, sorting and comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingRecord {
    pub id: i64,
    #[serde(default)]
    pub kind: ListingKind,
    pub name: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub stars: u8,
    pub price_per_night: f64,
    #[serde(default)]
    pub amenities: Vec<String>,
    /// Guest rating, falls back to the star count when the source has none
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub review_count: u32,
    #[serde(default)]
    pub distance_km: f64,
}

/// Hotel as stored by the back office.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminHotel {
    pub id: i64,
    #[serde(default)]
    pub kind: Option<ListingKind>,
    pub name: String,
    pub location: String,
    #[serde(default)]
    pub description: Option<String>,
    pub stars: i32,
    pub price_per_night: f64,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub review_count: Option<u32>,
    #[serde(default)]
    pub distance_km: Option<f64>,
}

/// Hotel as delivered by a partner integration feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartnerHotel {
    pub hotel_id: i64,
    pub title: String,
    pub city: String,
    pub country: String,
    #[serde(default)]
    pub summary: Option<String>,
    pub star_rating: i32,
    pub nightly_rate: f64,
    #[serde(default)]
    pub facilities: Vec<String>,
    #[serde(default)]
    pub guest_rating: Option<f64>,
    #[serde(default)]
    pub reviews: Option<u32>,
    #[serde(default)]
    pub distance_from_center_km: Option<f64>,
}

fn clamp_stars(stars: i32) -> u8 {
    stars.clamp(1, 5) as u8
}

impl From<AdminHotel> for ListingRecord {
    fn from(hotel: AdminHotel) -> Self {
        let stars = clamp_stars(hotel.stars);
        ListingRecord {
            id: hotel.id,
            kind: hotel.kind.unwrap_or_default(),
            name: hotel.name,
            location: hotel.location,
            description: hotel.description,
            stars,
            price_per_night: hotel.price_per_night,
            amenities: hotel.amenities,
            rating: hotel.rating.unwrap_or(stars as f64),
            review_count: hotel.review_count.unwrap_or(0),
            distance_km: hotel.distance_km.unwrap_or(0.0),
        }
    }
}

impl From<PartnerHotel> for ListingRecord {
    fn from(hotel: PartnerHotel) -> Self {
        let stars = clamp_stars(hotel.star_rating);
        ListingRecord {
            id: hotel.hotel_id,
            kind: ListingKind::Hotel,
            name: hotel.title,
            location: format!("{}, {}", hotel.city, hotel.country),
            description: hotel.summary,
            stars,
            price_per_night: hotel.nightly_rate,
            amenities: hotel.facilities,
            rating: hotel.guest_rating.unwrap_or(stars as f64),
            review_count: hotel.reviews.unwrap_or(0),
            distance_km: hotel.distance_from_center_km.unwrap_or(0.0),
        }
    }
}
