pub mod comparison;
pub mod filter;
pub mod listing;
pub mod pricing;
