//! Trip planner: day bucketing followed by per-day route ordering.

use tracing::info;

use crate::error::Result;
use crate::models::{Catalog, DayPlan, Itinerary};
use crate::optimize::RouteOptimizer;
use crate::schedule::split_into_days;

/// Plans a multi-day trip over an injected catalog.
///
/// The catalog is split into contiguous day chunks in catalog order, then
/// each day's stops are reordered independently along their shortest open
/// path. Every catalog stop appears exactly once in the itinerary.
///
/// # Examples
///
/// ```
/// use u_itinerary::models::Catalog;
/// use u_itinerary::planner::TripPlanner;
///
/// let catalog = Catalog::seoul();
/// let itinerary = TripPlanner::new(&catalog).plan(3).unwrap();
/// assert_eq!(itinerary.num_days(), 3);
/// assert_eq!(itinerary.num_stops(), 10);
/// assert_eq!(itinerary.days()[0].len(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct TripPlanner<'a> {
    catalog: &'a Catalog,
    optimizer: RouteOptimizer,
}

impl<'a> TripPlanner<'a> {
    /// Creates a planner using a default [`RouteOptimizer`].
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            optimizer: RouteOptimizer::new(),
        }
    }

    /// Replaces the route optimizer.
    pub fn with_optimizer(mut self, optimizer: RouteOptimizer) -> Self {
        self.optimizer = optimizer;
        self
    }

    /// Builds an itinerary spanning `days` days.
    ///
    /// # Errors
    ///
    /// - [`ItineraryError::NoDays`](crate::ItineraryError::NoDays) if `days == 0`
    /// - [`ItineraryError::TooManyStops`](crate::ItineraryError::TooManyStops) if a
    ///   day receives more stops than the optimizer accepts
    #[tracing::instrument(err, skip(self), fields(stops = self.catalog.len()))]
    pub fn plan(&self, days: usize) -> Result<Itinerary> {
        let buckets = split_into_days(self.catalog.stops(), days)?;

        let mut plans = Vec::with_capacity(buckets.len());
        for (i, bucket) in buckets.iter().enumerate() {
            let ordered = self.optimizer.optimize(bucket)?;
            plans.push(DayPlan::new(i + 1, ordered));
        }

        let itinerary = Itinerary::new(plans);
        info!(
            days = itinerary.num_days(),
            distance = itinerary.total_distance(),
            "planned trip"
        );
        Ok(itinerary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ItineraryError;
    use crate::models::{Coordinate, Stop};
    use std::collections::HashSet;

    fn names(itinerary: &Itinerary) -> Vec<Vec<String>> {
        itinerary
            .days()
            .iter()
            .map(|d| d.stops().iter().map(|s| s.name().to_string()).collect())
            .collect()
    }

    #[test]
    fn test_every_stop_once() {
        let catalog = Catalog::seoul();
        for days in 1..=3 {
            let itinerary = TripPlanner::new(&catalog).plan(days).expect("valid");
            let all: Vec<String> = names(&itinerary).into_iter().flatten().collect();
            assert_eq!(all.len(), catalog.len());
            let unique: HashSet<&String> = all.iter().collect();
            assert_eq!(unique.len(), catalog.len());
        }
    }

    #[test]
    fn test_day_numbers_and_sizes() {
        let catalog = Catalog::seoul();
        let itinerary = TripPlanner::new(&catalog).plan(3).expect("valid");
        let days: Vec<usize> = itinerary.days().iter().map(DayPlan::day).collect();
        let sizes: Vec<usize> = itinerary.days().iter().map(DayPlan::len).collect();
        assert_eq!(days, vec![1, 2, 3]);
        assert_eq!(sizes, vec![4, 3, 3]);
    }

    #[test]
    fn test_days_keep_their_bucket() {
        let catalog = Catalog::seoul();
        let itinerary = TripPlanner::new(&catalog).plan(2).expect("valid");
        let first: HashSet<&str> = itinerary.days()[0]
            .stops()
            .iter()
            .map(|s| s.name())
            .collect();
        let expected: HashSet<&str> = catalog.stops()[..5]
            .iter()
            .map(|s| s.name())
            .collect();
        assert_eq!(first, expected);
    }

    #[test]
    fn test_each_day_no_worse_than_catalog_order() {
        let catalog = Catalog::seoul();
        let itinerary = TripPlanner::new(&catalog).plan(2).expect("valid");
        let chunks = split_into_days(catalog.stops(), 2).expect("valid");
        for (plan, chunk) in itinerary.days().iter().zip(&chunks) {
            let unordered = DayPlan::new(plan.day(), chunk.clone());
            assert!(plan.total_distance() <= unordered.total_distance() + 1e-12);
        }
    }

    #[test]
    fn test_zero_days() {
        let catalog = Catalog::seoul();
        let err = TripPlanner::new(&catalog).plan(0).unwrap_err();
        assert!(matches!(err, ItineraryError::NoDays));
    }

    #[test]
    fn test_optimizer_bound_applies_per_day() {
        let catalog = Catalog::seoul();
        let planner =
            TripPlanner::new(&catalog).with_optimizer(RouteOptimizer::new().with_max_stops(4));
        assert!(matches!(
            planner.plan(2).unwrap_err(),
            ItineraryError::TooManyStops { count: 5, limit: 4 }
        ));
        assert!(planner.plan(3).is_ok());
    }

    #[test]
    fn test_small_catalog() {
        let catalog = Catalog::new(vec![
            Stop::new("A", Coordinate::new(0.0, 0.0)),
            Stop::new("C", Coordinate::new(4.0, 0.0)),
            Stop::new("B", Coordinate::new(0.0, 3.0)),
        ])
        .expect("valid");
        let itinerary = TripPlanner::new(&catalog).plan(1).expect("valid");
        assert_eq!(names(&itinerary), vec![vec!["C", "A", "B"]]);
        assert!((itinerary.total_distance() - 7.0).abs() < 1e-10);
    }

    #[test]
    fn test_more_days_than_stops() {
        let stops = vec![Stop::new("A", Coordinate::new(0.0, 0.0))];
        let catalog = Catalog::new(stops).expect("valid");
        let itinerary = TripPlanner::new(&catalog).plan(3).expect("valid");
        assert_eq!(itinerary.num_days(), 3);
        assert_eq!(itinerary.days()[0].len(), 1);
        assert!(itinerary.days()[2].is_empty());
    }
}
