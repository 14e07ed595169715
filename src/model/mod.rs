pub mod categories;
pub mod composition;
pub mod measurements;
pub mod raw;
pub mod thresholds;
