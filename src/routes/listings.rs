use actix_web::{web, HttpResponse};

use crate::errors::ApiError;
use crate::models::filter::{SearchRequest, SearchResponse};
use crate::services::listing_filter_service::{count_active_filters, search_listings};
use crate::state::AppState;

/*
    /api/listings
*/
pub async fn get_all(data: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let listings = data.listings.all_listings().await?;
    Ok(HttpResponse::Ok().json(listings))
}

/*
    /api/listings/{id}
*/
pub async fn get_by_id(
    path: web::Path<i64>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    match data.listings.find_by_id(id).await? {
        Some(listing) => Ok(HttpResponse::Ok().json(listing)),
        None => Err(ApiError::NotFound(format!("Listing {} not found", id))),
    }
}

/*
    /api/listings/search
*/
pub async fn search(
    data: web::Data<AppState>,
    input: web::Json<SearchRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = input.into_inner();
    let sort = request.sort().map_err(|e| {
        log::debug!("Rejected listing search: {}", e);
        e
    })?;

    let default_price_range = data.settings.default_price_range;
    let criteria = request.criteria(default_price_range);

    let listings = data.listings.all_listings().await?;
    let results = search_listings(&listings, &criteria, sort);

    Ok(HttpResponse::Ok().json(SearchResponse {
        total: results.len(),
        listings: results,
        active_filters: count_active_filters(&criteria, default_price_range),
    }))
}
