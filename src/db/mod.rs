pub mod comparisons;
pub mod listings;
pub mod mongo;
