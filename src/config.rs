use std::env;
use std::path::PathBuf;

use crate::models::filter::PriceRange;
use crate::services::comparison_service::DEFAULT_COMPARISON_CAPACITY;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;
const MONGODB_DATABASE: &str = "Booking";
const PRICE_RANGE: PriceRange = (0.0, 10000.0);
const MAX_STAY_NIGHTS: u32 = 365;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for the environment variable {0}: {1}")]
    InvalidValue(String, String),
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub environment: String,
    /// Listings and comparisons live in MongoDB when set, in memory otherwise
    pub mongodb_uri: Option<String>,
    pub mongodb_database: String,
    pub listings_file: Option<PathBuf>,
    pub comparison_capacity: usize,
    pub default_price_range: PriceRange,
    /// Longest stay a quote will price
    pub max_stay_nights: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: HOST.to_string(),
            port: PORT,
            environment: "development".to_string(),
            mongodb_uri: None,
            mongodb_database: MONGODB_DATABASE.to_string(),
            listings_file: None,
            comparison_capacity: DEFAULT_COMPARISON_CAPACITY,
            default_price_range: PRICE_RANGE,
            max_stay_nights: MAX_STAY_NIGHTS,
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map_err(|e: T::Err| ConfigError::InvalidValue(name.to_string(), e.to_string())),
        _ => Ok(default),
    }
}

fn optional_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

impl Settings {
    /// Load settings from environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let comparison_capacity =
            parse_var("COMPARISON_CAPACITY", defaults.comparison_capacity)?;
        if comparison_capacity == 0 {
            return Err(ConfigError::InvalidValue(
                "COMPARISON_CAPACITY".to_string(),
                "must be at least 1".to_string(),
            ));
        }

        let max_stay_nights = parse_var("MAX_STAY_NIGHTS", defaults.max_stay_nights)?;
        if max_stay_nights == 0 {
            return Err(ConfigError::InvalidValue(
                "MAX_STAY_NIGHTS".to_string(),
                "must be at least 1".to_string(),
            ));
        }

        let price_min: f64 = parse_var("PRICE_RANGE_MIN", defaults.default_price_range.0)?;
        let price_max: f64 = parse_var("PRICE_RANGE_MAX", defaults.default_price_range.1)?;
        if !(price_min.is_finite() && price_max.is_finite()) || price_min > price_max {
            return Err(ConfigError::InvalidValue(
                "PRICE_RANGE_MIN".to_string(),
                format!("{} must not exceed PRICE_RANGE_MAX ({})", price_min, price_max),
            ));
        }

        Ok(Self {
            host: optional_var("HOST").unwrap_or(defaults.host),
            port: parse_var("PORT", defaults.port)?,
            environment: optional_var("RUST_ENV").unwrap_or(defaults.environment),
            mongodb_uri: optional_var("MONGODB_URI"),
            mongodb_database: optional_var("MONGODB_DATABASE")
                .unwrap_or(defaults.mongodb_database),
            listings_file: optional_var("LISTINGS_FILE").map(PathBuf::from),
            comparison_capacity,
            default_price_range: (price_min, price_max),
            max_stay_nights,
        })
    }
}
