#![allow(dead_code)]

use std::sync::Arc;

use actix_web::{web, App};

use stayfinder_api::{
    config::Settings,
    models::listing::{AdminHotel, ListingKind, ListingRecord},
    routes,
    services::{
        comparison_store::InMemoryComparisonStore, listing_repository::InMemoryListingRepository,
    },
    state::AppState,
};

pub struct TestApp {
    pub state: AppState,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self::with_listings(sample_listings(), settings)
    }

    pub fn with_listings(listings: Vec<ListingRecord>, settings: Settings) -> Self {
        let state = AppState::new(
            Arc::new(InMemoryListingRepository::new(listings)),
            Arc::new(InMemoryComparisonStore::new()),
            settings,
        );
        Self { state }
    }

    pub fn create_app(
        &self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(self.state.clone()))
            .configure(routes::config)
    }
}

fn admin_hotel(
    id: i64,
    name: &str,
    location: &str,
    description: Option<&str>,
    stars: i32,
    price_per_night: f64,
    amenities: &[&str],
) -> AdminHotel {
    AdminHotel {
        id,
        kind: Some(ListingKind::Hotel),
        name: name.to_string(),
        location: location.to_string(),
        description: description.map(str::to_string),
        stars,
        price_per_night,
        amenities: amenities.iter().map(|a| a.to_string()).collect(),
        rating: None,
        review_count: None,
        distance_km: None,
    }
}

/// Five hotels; "abu" matches ids 1, 3 and 5.
pub fn sample_listings() -> Vec<ListingRecord> {
    let mut hotels: Vec<ListingRecord> = vec![
        admin_hotel(1, "Corniche Palace", "Abu Dhabi", None, 5, 820.0, &["pool", "spa", "wifi"]),
        admin_hotel(2, "Marina Suites", "Dubai", Some("Walk to the beach"), 4, 450.0, &["wifi", "gym"]),
        admin_hotel(3, "Abundance Inn", "Sharjah", None, 3, 120.0, &["wifi"]),
        admin_hotel(4, "Creek Hostel", "Dubai", None, 2, 60.0, &[]),
        admin_hotel(5, "Dune Retreat", "Liwa", Some("Two hours from Abu Dhabi"), 3, 300.0, &["pool"]),
    ]
    .into_iter()
    .map(ListingRecord::from)
    .collect();

    for (hotel, reviews) in hotels.iter_mut().zip([120, 340, 85, 340, 12]) {
        hotel.review_count = reviews;
    }
    hotels
}
