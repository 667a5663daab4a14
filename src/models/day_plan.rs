//! Day plan type.

use serde::Serialize;

use super::Stop;
use crate::distance::path_distance;
use crate::schedule::{timeline, TimelineEntry};

/// The ordered stops visited on one day of a trip.
///
/// # Examples
///
/// ```
/// use u_itinerary::models::{Coordinate, DayPlan, Stop};
///
/// let plan = DayPlan::new(1, vec![
///     Stop::new("A", Coordinate::new(0.0, 0.0)),
///     Stop::new("B", Coordinate::new(0.0, 3.0)),
/// ]);
/// assert_eq!(plan.day(), 1);
/// assert!((plan.total_distance() - 3.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayPlan {
    day: usize,
    stops: Vec<Stop>,
}

impl DayPlan {
    /// Creates a plan for the given 1-based day.
    pub fn new(day: usize, stops: Vec<Stop>) -> Self {
        Self { day, stops }
    }

    /// 1-based day number.
    pub fn day(&self) -> usize {
        self.day
    }

    /// Stops in visiting order.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// Number of stops visited this day.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Returns `true` if nothing is scheduled this day.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Open path distance through the stops in order.
    pub fn total_distance(&self) -> f64 {
        path_distance(&self.stops)
    }

    /// Morning/lunch/afternoon slots for this day.
    pub fn timeline(&self) -> Vec<TimelineEntry<'_>> {
        timeline(&self.stops)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Coordinate;

    #[test]
    fn test_empty_day() {
        let plan = DayPlan::new(2, vec![]);
        assert!(plan.is_empty());
        assert_eq!(plan.total_distance(), 0.0);
        assert!(plan.timeline().is_empty());
    }

    #[test]
    fn test_distance_follows_order() {
        let a = Stop::new("A", Coordinate::new(0.0, 0.0));
        let b = Stop::new("B", Coordinate::new(0.0, 3.0));
        let c = Stop::new("C", Coordinate::new(4.0, 0.0));
        let abc = DayPlan::new(1, vec![a.clone(), b.clone(), c.clone()]);
        let acb = DayPlan::new(1, vec![a, c, b]);
        assert!((abc.total_distance() - 8.0).abs() < 1e-10);
        assert!((acb.total_distance() - 9.0).abs() < 1e-10);
        assert_eq!(abc.len(), 3);
        assert!(!abc.is_empty());
    }
}
