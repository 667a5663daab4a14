//! Domain model types for trip planning.
//!
//! Provides coordinates and the [`Located`] trait the optimizer routes over,
//! points of interest, the immutable catalog they come from, and the day
//! plans and itineraries produced by the planner.

mod catalog;
mod coordinate;
mod day_plan;
mod itinerary;
mod stop;

pub use catalog::Catalog;
pub use coordinate::{Coordinate, Located};
pub use day_plan::DayPlan;
pub use itinerary::Itinerary;
pub use stop::Stop;
