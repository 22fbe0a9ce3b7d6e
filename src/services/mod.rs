pub mod comparison_service;
pub mod comparison_store;
pub mod listing_filter_service;
pub mod listing_repository;
pub mod pricing_service;
