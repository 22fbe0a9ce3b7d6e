use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PricingError {
    #[error("Invalid pricing input: {0}")]
    InvalidInput(String),
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ListingError {
    #[error("Unknown sort key '{0}', expected one of price, rating, popularity, distance")]
    InvalidSortKey(String),
    #[error("Unknown sort order '{0}', expected asc or desc")]
    InvalidSortOrder(String),
}

/// Returned when a new listing is added to a full comparison set.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Comparison set is full ({capacity} listings), remove one before adding listing {listing_id}")]
pub struct CapacityExceeded {
    pub capacity: usize,
    pub listing_id: i64,
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("Failed to read listings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse listings: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Error type returned by route handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Pricing(#[from] PricingError),

    #[error(transparent)]
    Listing(#[from] ListingError),

    #[error(transparent)]
    CapacityExceeded(#[from] CapacityExceeded),

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Internal(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Pricing(_) | ApiError::Listing(_) => StatusCode::BAD_REQUEST,
            ApiError::CapacityExceeded(_) => StatusCode::CONFLICT,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Store(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            // Storage details stay in the logs
            ApiError::Store(err) => {
                log::error!("{}", err);
                "Internal storage error".to_string()
            }
            other => other.to_string(),
        };
        HttpResponse::build(self.status_code()).json(json!({ "error": message }))
    }
}
