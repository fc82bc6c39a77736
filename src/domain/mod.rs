// Domain types and value objects
mod halving;
mod price_point;
mod time_range;

pub use halving::{HalvingMarker, halving_markers};
pub use price_point::PricePoint;
pub use time_range::TimeRange;
