use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::listing::ListingRecord;

/// Stored form of a session's comparison selection.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ComparisonDocument {
    pub session_id: String,
    pub listing_ids: Vec<i64>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ComparisonResponse {
    pub session_id: String,
    pub listing_ids: Vec<i64>,
    pub capacity: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub listings: Option<Vec<ListingRecord>>,
}
