//! Filtering, sorting and active-filter counting over listing snapshots.
//!
//! Everything here is a pure function of its inputs: the caller owns the
//! listings and the criteria, and gets back new vectors.

use crate::models::filter::{FilterCriteria, PriceRange, SortKey, SortOrder};
use crate::models::listing::ListingRecord;

/// Whether a single listing satisfies every predicate in `criteria`.
pub fn matches_criteria(listing: &ListingRecord, criteria: &FilterCriteria) -> bool {
    matches_search(listing, &criteria.search_query)
        && matches_stars(listing, &criteria.selected_stars)
        && matches_amenities(listing, &criteria.selected_amenities)
        && matches_price(listing, criteria.price_range)
}

fn matches_search(listing: &ListingRecord, search_query: &str) -> bool {
    // Whitespace-only counts as no search, anything else matches as typed
    if search_query.trim().is_empty() {
        return true;
    }
    let query = search_query.to_lowercase();

    listing.name.to_lowercase().contains(&query)
        || listing.location.to_lowercase().contains(&query)
        || listing
            .description
            .as_deref()
            .map(|description| description.to_lowercase().contains(&query))
            .unwrap_or(false)
}

fn matches_stars(listing: &ListingRecord, selected_stars: &[u8]) -> bool {
    selected_stars.is_empty() || selected_stars.contains(&listing.stars)
}

// All selected amenities must be present, not just one of them
fn matches_amenities(listing: &ListingRecord, selected_amenities: &[String]) -> bool {
    selected_amenities
        .iter()
        .all(|amenity| listing.amenities.contains(amenity))
}

fn matches_price(listing: &ListingRecord, (min, max): PriceRange) -> bool {
    listing.price_per_night >= min && listing.price_per_night <= max
}

/// Listings matching `criteria`, in their original relative order.
pub fn filter_listings(listings: &[ListingRecord], criteria: &FilterCriteria) -> Vec<ListingRecord> {
    listings
        .iter()
        .filter(|listing| matches_criteria(listing, criteria))
        .cloned()
        .collect()
}

/// Badge count for the filter panel: one for a search, one per selected star
/// and amenity, and one when the price range differs from the default.
pub fn count_active_filters(criteria: &FilterCriteria, default_price_range: PriceRange) -> usize {
    let mut count = 0;
    if !criteria.search_query.trim().is_empty() {
        count += 1;
    }
    count += criteria.selected_stars.len();
    count += criteria.selected_amenities.len();
    if criteria.price_range != default_price_range {
        count += 1;
    }
    count
}

/// Stable sort by `sort_by`. Equal keys keep their input order in both directions.
pub fn sort_listings(
    listings: &[ListingRecord],
    sort_by: SortKey,
    order: SortOrder,
) -> Vec<ListingRecord> {
    let mut sorted = listings.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = sort_by.value_of(a).total_cmp(&sort_by.value_of(b));
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
    sorted
}

/// Filter, then sort if a sort was requested.
pub fn search_listings(
    listings: &[ListingRecord],
    criteria: &FilterCriteria,
    sort: Option<(SortKey, SortOrder)>,
) -> Vec<ListingRecord> {
    let filtered = filter_listings(listings, criteria);
    match sort {
        Some((sort_by, order)) => sort_listings(&filtered, sort_by, order),
        None => filtered,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::listing::ListingKind;

    fn hotel(
        id: i64,
        name: &str,
        location: &str,
        stars: u8,
        price: f64,
        amenities: &[&str],
    ) -> ListingRecord {
        ListingRecord {
            id,
            kind: ListingKind::Hotel,
            name: name.to_string(),
            location: location.to_string(),
            description: None,
            stars,
            price_per_night: price,
            amenities: amenities.iter().map(|a| a.to_string()).collect(),
            rating: stars as f64,
            review_count: 0,
            distance_km: 0.0,
        }
    }

    fn sample_hotels() -> Vec<ListingRecord> {
        let mut desert = hotel(5, "Dune Retreat", "Liwa", 3, 300.0, &["pool"]);
        desert.description = Some("Two hours from ABU Dhabi city".to_string());
        vec![
            hotel(1, "Corniche Palace", "Abu Dhabi", 5, 820.0, &["pool", "spa", "wifi"]),
            hotel(2, "Marina Suites", "Dubai", 4, 450.0, &["wifi", "gym"]),
            hotel(3, "Abundance Inn", "Sharjah", 3, 120.0, &["wifi"]),
            hotel(4, "Creek Hostel", "Dubai", 2, 60.0, &[]),
            desert,
        ]
    }

    fn ids(listings: &[ListingRecord]) -> Vec<i64> {
        listings.iter().map(|l| l.id).collect()
    }

    #[test]
    fn test_search_matches_name_location_and_description() {
        let criteria = FilterCriteria::new((0.0, 10000.0)).with_search_query("abu");
        let result = filter_listings(&sample_hotels(), &criteria);
        assert_eq!(ids(&result), vec![1, 3, 5]);
    }

    #[test]
    fn test_default_criteria_returns_input_unchanged() {
        let hotels = sample_hotels();
        let result = filter_listings(&hotels, &FilterCriteria::new((0.0, 10000.0)));
        assert_eq!(result, hotels);
    }

    #[test]
    fn test_whitespace_search_is_no_filter() {
        let hotels = sample_hotels();
        let criteria = FilterCriteria::new((0.0, 10000.0)).with_search_query(" \t ");
        assert_eq!(filter_listings(&hotels, &criteria).len(), hotels.len());
        assert_eq!(count_active_filters(&criteria, (0.0, 10000.0)), 0);
    }

    #[test]
    fn test_search_keeps_surrounding_spaces() {
        let criteria = FilterCriteria::new((0.0, 10000.0)).with_search_query("abu ");
        let result = filter_listings(&sample_hotels(), &criteria);
        // "Abundance Inn" has no space after "abu"
        assert_eq!(ids(&result), vec![1, 5]);
        assert_eq!(count_active_filters(&criteria, (0.0, 10000.0)), 1);
    }

    #[test]
    fn test_stars_filter() {
        let criteria = FilterCriteria::new((0.0, 10000.0)).toggle_star(3).toggle_star(5);
        assert_eq!(ids(&filter_listings(&sample_hotels(), &criteria)), vec![1, 3, 5]);
    }

    #[test]
    fn test_amenities_require_all_selected() {
        let criteria = FilterCriteria::new((0.0, 10000.0))
            .toggle_amenity("pool")
            .toggle_amenity("wifi");
        assert_eq!(ids(&filter_listings(&sample_hotels(), &criteria)), vec![1]);
    }

    #[test]
    fn test_price_range_is_inclusive() {
        let criteria = FilterCriteria::new((120.0, 450.0));
        assert_eq!(ids(&filter_listings(&sample_hotels(), &criteria)), vec![2, 3, 5]);
    }

    #[test]
    fn test_predicates_are_conjunctive() {
        let criteria = FilterCriteria::new((0.0, 500.0))
            .with_search_query("dubai")
            .toggle_amenity("wifi");
        assert_eq!(ids(&filter_listings(&sample_hotels(), &criteria)), vec![2]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let criteria = FilterCriteria::new((100.0, 900.0)).with_search_query("a");
        let once = filter_listings(&sample_hotels(), &criteria);
        let twice = filter_listings(&once, &criteria);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_count_active_filters() {
        let default_range = (0.0, 10000.0);
        assert_eq!(count_active_filters(&FilterCriteria::new(default_range), default_range), 0);

        let criteria = FilterCriteria::new(default_range)
            .with_search_query("spa")
            .toggle_star(4)
            .toggle_star(5)
            .toggle_amenity("pool")
            .toggle_amenity("gym")
            .toggle_amenity("wifi");
        assert_eq!(count_active_filters(&criteria, default_range), 6);

        let narrowed = criteria.with_price_range((0.0, 500.0));
        assert_eq!(count_active_filters(&narrowed, default_range), 7);
    }

    #[test]
    fn test_sort_by_price_both_directions() {
        let hotels = sample_hotels();
        let asc = sort_listings(&hotels, SortKey::Price, SortOrder::Asc);
        assert_eq!(ids(&asc), vec![4, 3, 5, 2, 1]);

        let desc = sort_listings(&hotels, SortKey::Price, SortOrder::Desc);
        assert_eq!(ids(&desc), vec![1, 2, 5, 3, 4]);
    }

    #[test]
    fn test_sort_is_stable_for_ties() {
        let mut hotels = sample_hotels();
        hotels[1].review_count = 10;
        hotels[3].review_count = 10;
        hotels[4].review_count = 10;
        hotels[0].review_count = 50;

        let asc = sort_listings(&hotels, SortKey::Popularity, SortOrder::Asc);
        assert_eq!(ids(&asc), vec![3, 2, 4, 5, 1]);

        let desc = sort_listings(&hotels, SortKey::Popularity, SortOrder::Desc);
        assert_eq!(ids(&desc), vec![1, 2, 4, 5, 3]);
    }

    #[test]
    fn test_sort_by_rating_and_distance() {
        let mut hotels = sample_hotels();
        for (index, hotel) in hotels.iter_mut().enumerate() {
            hotel.distance_km = 10.0 - index as f64 * 2.0;
        }
        let by_distance = sort_listings(&hotels, SortKey::Distance, SortOrder::Asc);
        assert_eq!(ids(&by_distance), vec![5, 4, 3, 2, 1]);

        let by_rating = sort_listings(&hotels, SortKey::Rating, SortOrder::Desc);
        assert_eq!(ids(&by_rating), vec![1, 2, 3, 5, 4]);
    }

    #[test]
    fn test_search_listings_filters_then_sorts() {
        let criteria = FilterCriteria::new((0.0, 10000.0)).with_search_query("dubai");
        let result = search_listings(
            &sample_hotels(),
            &criteria,
            Some((SortKey::Price, SortOrder::Asc)),
        );
        assert_eq!(ids(&result), vec![4, 2]);
    }
}
