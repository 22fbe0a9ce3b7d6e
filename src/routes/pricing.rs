use actix_web::{web, HttpResponse};

use crate::errors::ApiError;
use crate::models::pricing::{DateRange, QuoteRequest};
use crate::services::pricing_service::PricingService;
use crate::state::AppState;

/*
    /api/pricing/quote
*/
pub async fn quote(
    data: web::Data<AppState>,
    input: web::Json<QuoteRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = input.into_inner();
    let schedule = PricingService::quote(
        request.base_price,
        &request.stay,
        data.settings.max_stay_nights,
    )?;
    Ok(HttpResponse::Ok().json(schedule))
}

/*
    /api/listings/{id}/quote
*/
pub async fn quote_listing(
    path: web::Path<i64>,
    data: web::Data<AppState>,
    input: web::Json<DateRange>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let listing = data
        .listings
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Listing {} not found", id)))?;

    // A stored listing without a usable price is our data problem, not the caller's
    if !listing.price_per_night.is_finite() || listing.price_per_night <= 0.0 {
        log::error!(
            "Listing {} has an invalid nightly price: {}",
            id,
            listing.price_per_night
        );
        return Err(ApiError::Internal(format!(
            "Listing {} cannot be priced",
            id
        )));
    }

    let schedule =
        PricingService::quote(listing.price_per_night, &input, data.settings.max_stay_nights)?;
    Ok(HttpResponse::Ok().json(schedule))
}
