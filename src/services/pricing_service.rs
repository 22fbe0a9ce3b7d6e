use chrono::{Datelike, Days, Weekday};

use crate::errors::PricingError;
use crate::models::pricing::{DateRange, NightlyPrice, PriceSchedule, Season};

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Format of `NightlyPrice::date`, e.g. `Jul 05, 2024`
pub const NIGHTLY_DATE_FORMAT: &str = "%b %d, %Y";

pub struct PricingService;

impl PricingService {
    /// Dec-Feb is peak, Mar-May and Sep-Nov are high, Jun-Aug is low.
    pub fn classify_season(date: &impl Datelike) -> Season {
        match date.month0() {
            11 | 0 | 1 => Season::Peak,
            2..=4 | 8..=10 => Season::High,
            _ => Season::Low,
        }
    }

    pub fn seasonal_multiplier(season: Season) -> f64 {
        match season {
            Season::Peak => 1.3,
            Season::High => 1.1,
            Season::Low => 0.9,
        }
    }

    pub fn is_weekend(date: &impl Datelike) -> bool {
        matches!(date.weekday(), Weekday::Fri | Weekday::Sat)
    }

    /// Friday and Saturday nights carry a 20% surcharge
    pub fn weekend_multiplier(date: &impl Datelike) -> f64 {
        if Self::is_weekend(date) {
            1.2
        } else {
            1.0
        }
    }

    /// Whole nights in the stay, rounding any partial day up.
    pub fn count_nights(range: &DateRange) -> Result<u32, PricingError> {
        range.validate()?;
        let millis = (range.check_out - range.check_in).num_milliseconds();
        let nights = (millis + MILLIS_PER_DAY - 1) / MILLIS_PER_DAY;
        u32::try_from(nights)
            .map_err(|_| PricingError::InvalidInput(format!("stay of {} nights is too long", nights)))
    }

    /// Nights in the stay, rejecting stays longer than `max_nights`.
    pub fn check_stay_length(range: &DateRange, max_nights: u32) -> Result<u32, PricingError> {
        let nights = Self::count_nights(range)?;
        if nights > max_nights {
            return Err(PricingError::InvalidInput(format!(
                "stay of {} nights exceeds the maximum of {}",
                nights, max_nights
            )));
        }
        Ok(nights)
    }

    /// Schedule for a requested stay, capped at `max_nights`.
    pub fn quote(
        base_price: f64,
        range: &DateRange,
        max_nights: u32,
    ) -> Result<PriceSchedule, PricingError> {
        Self::check_stay_length(range, max_nights)?;
        Self::compute_schedule(base_price, range)
    }

    /// Price every night of the stay and total them.
    pub fn compute_schedule(
        base_price: f64,
        range: &DateRange,
    ) -> Result<PriceSchedule, PricingError> {
        if !base_price.is_finite() || base_price <= 0.0 {
            return Err(PricingError::InvalidInput(format!(
                "base price must be a positive amount, got {}",
                base_price
            )));
        }
        let nights = Self::count_nights(range)?;
        let first_night = range.check_in.date();

        let mut nightly_prices = Vec::with_capacity(nights as usize);
        for offset in 0..nights {
            let date = first_night
                .checked_add_days(Days::new(offset as u64))
                .ok_or_else(|| {
                    PricingError::InvalidInput("stay runs past the supported calendar".to_string())
                })?;
            let season = Self::classify_season(&date);
            let price = (base_price
                * Self::seasonal_multiplier(season)
                * Self::weekend_multiplier(&date))
            .round() as i64;

            nightly_prices.push(NightlyPrice {
                date: date.format(NIGHTLY_DATE_FORMAT).to_string(),
                price,
                season,
                weekend: Self::is_weekend(&date),
            });
        }

        let total_price: i64 = nightly_prices.iter().map(|night| night.price).sum();
        let average_price = (total_price as f64 / nights as f64).round() as i64;

        log::debug!(
            "Priced {} nights from {} at base {}: total {}",
            nights,
            first_night,
            base_price,
            total_price
        );

        Ok(PriceSchedule {
            nightly_prices,
            nights,
            total_price,
            average_price,
        })
    }
}
