use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::PricingError;

/// Coarse classification of a calendar month used to scale nightly prices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Peak,
    High,
    Low,
}

/// A stay, from check-in to check-out. Only the calendar date of each night
/// matters for pricing; the time of day only affects the night count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    #[serde(deserialize_with = "deserialize_stay_datetime")]
    pub check_in: NaiveDateTime,
    #[serde(deserialize_with = "deserialize_stay_datetime")]
    pub check_out: NaiveDateTime,
}

impl DateRange {
    pub fn new(check_in: NaiveDateTime, check_out: NaiveDateTime) -> Result<Self, PricingError> {
        let range = Self {
            check_in,
            check_out,
        };
        range.validate()?;
        Ok(range)
    }

    /// Range starting and ending at midnight of the given dates.
    pub fn from_dates(check_in: NaiveDate, check_out: NaiveDate) -> Result<Self, PricingError> {
        Self::new(
            check_in.and_time(NaiveTime::MIN),
            check_out.and_time(NaiveTime::MIN),
        )
    }

    pub fn validate(&self) -> Result<(), PricingError> {
        if self.check_out <= self.check_in {
            return Err(PricingError::InvalidInput(format!(
                "check-out ({}) must be after check-in ({})",
                self.check_out, self.check_in
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NightlyPrice {
    /// Formatted as `Jul 05, 2024`
    pub date: String,
    pub price: i64,
    pub season: Season,
    pub weekend: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceSchedule {
    pub nightly_prices: Vec<NightlyPrice>,
    pub nights: u32,
    pub total_price: i64,
    pub average_price: i64,
}

/// Body of `/api/pricing/quote`.
#[derive(Debug, Clone, Deserialize)]
pub struct QuoteRequest {
    pub base_price: f64,
    #[serde(flatten)]
    pub stay: DateRange,
}

// Accepts plain dates, naive datetimes, and RFC 3339 timestamps. Offsets are
// dropped so the wall-clock date the guest picked is what gets priced.
fn deserialize_stay_datetime<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_stay_datetime(raw.trim()).ok_or_else(|| {
        serde::de::Error::custom(format!(
            "invalid date '{}', expected YYYY-MM-DD or an ISO 8601 datetime",
            raw
        ))
    })
}

pub fn parse_stay_datetime(value: &str) -> Option<NaiveDateTime> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date.and_time(NaiveTime::MIN));
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(datetime);
    }
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|datetime| datetime.naive_local())
}
