//! Trip scheduling around the route optimizer.
//!
//! - [`split_into_days`] — contiguous bucketing of a stop list into days
//! - [`timeline`] — morning/lunch/afternoon layout of an ordered day

mod partition;
mod timeline;

pub use partition::split_into_days;
pub use timeline::{timeline, TimeSlot, TimelineEntry};
