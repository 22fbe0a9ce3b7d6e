use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::errors::ApiError;
use crate::models::comparison::ComparisonResponse;
use crate::models::listing::ListingRecord;
use crate::services::comparison_service::ComparisonSet;
use crate::state::AppState;

fn comparison_response(
    session_id: String,
    set: &ComparisonSet,
    listings: Option<Vec<ListingRecord>>,
) -> ComparisonResponse {
    ComparisonResponse {
        session_id,
        listing_ids: set.to_vec(),
        capacity: set.capacity(),
        listings,
    }
}

/*
    POST /api/comparisons
*/
pub async fn create(data: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let session_id = Uuid::new_v4().to_string();
    let set = ComparisonSet::new(data.settings.comparison_capacity);
    data.comparisons.save(&session_id, set.ids()).await?;

    log::info!("Created comparison session {}", session_id);
    Ok(HttpResponse::Created().json(comparison_response(session_id, &set, None)))
}

/*
    GET /api/comparisons/{session_id}
*/
pub async fn get(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let session_id = path.into_inner();
    let set = data.load_comparison(&session_id).await?;
    let listings = data.listings.find_by_ids(set.ids()).await?;

    Ok(HttpResponse::Ok().json(comparison_response(session_id, &set, Some(listings))))
}

/*
    PUT /api/comparisons/{session_id}/listings/{listing_id}
*/
pub async fn add_listing(
    path: web::Path<(String, i64)>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let (session_id, listing_id) = path.into_inner();

    if data.listings.find_by_id(listing_id).await?.is_none() {
        return Err(ApiError::NotFound(format!(
            "Listing {} not found",
            listing_id
        )));
    }

    let mut set = data.load_comparison(&session_id).await?;
    set.add(listing_id).map_err(|e| {
        log::debug!("Comparison session {}: {}", session_id, e);
        e
    })?;
    data.comparisons.save(&session_id, set.ids()).await?;

    Ok(HttpResponse::Ok().json(comparison_response(session_id, &set, None)))
}

/*
    DELETE /api/comparisons/{session_id}/listings/{listing_id}
*/
pub async fn remove_listing(
    path: web::Path<(String, i64)>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let (session_id, listing_id) = path.into_inner();

    let mut set = data.load_comparison(&session_id).await?;
    set.remove(listing_id);
    data.comparisons.save(&session_id, set.ids()).await?;

    Ok(HttpResponse::Ok().json(comparison_response(session_id, &set, None)))
}

/*
    DELETE /api/comparisons/{session_id}
*/
pub async fn clear(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let session_id = path.into_inner();

    let mut set = data.load_comparison(&session_id).await?;
    set.clear();
    data.comparisons.delete(&session_id).await?;

    Ok(HttpResponse::Ok().json(comparison_response(session_id, &set, None)))
}
