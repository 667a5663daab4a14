//! Exact shortest open path by exhaustive search.
//!
//! # Algorithm
//!
//! Enumerates every ordering of the input, in lexicographic order of input
//! indices starting at the identity, and keeps the one with the smallest
//! open path distance (no return leg). A stored best is only replaced by a
//! strictly shorter ordering, so among equal-length orderings the first
//! enumerated one wins; in particular an input that is already optimal comes
//! back unchanged.
//!
//! # Complexity
//!
//! O(n · n!) time and O(n²) space. Only meant for a handful of stops per day,
//! which is why the optimizer enforces an upper bound on `n`.

use tracing::debug;

use super::permutation::{factorial, next_permutation};
use crate::distance::DistanceMatrix;
use crate::error::{ItineraryError, Result};
use crate::models::Located;

/// Default upper bound on the number of stops ordered in one call (10! orderings).
pub const DEFAULT_MAX_STOPS: usize = 10;

/// Orders stops along the globally shortest open path.
///
/// The optimizer holds no state between calls; one instance can be shared
/// freely across threads.
///
/// # Examples
///
/// ```
/// use u_itinerary::models::Coordinate;
/// use u_itinerary::optimize::RouteOptimizer;
/// use u_itinerary::distance::path_distance;
///
/// let a = Coordinate::new(0.0, 0.0);
/// let b = Coordinate::new(0.0, 3.0);
/// let c = Coordinate::new(4.0, 0.0);
///
/// // A→C→B = 9 and A→B→C = 8, but starting at C gives C→A→B = 4 + 3 = 7.
/// let route = RouteOptimizer::new().optimize(&[a, c, b]).unwrap();
/// assert_eq!(route, vec![c, a, b]);
/// assert!((path_distance(&route) - 7.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteOptimizer {
    max_stops: usize,
}

impl RouteOptimizer {
    /// Creates an optimizer bounded at [`DEFAULT_MAX_STOPS`].
    pub fn new() -> Self {
        Self {
            max_stops: DEFAULT_MAX_STOPS,
        }
    }

    /// Sets the largest input the optimizer accepts.
    pub fn with_max_stops(mut self, max_stops: usize) -> Self {
        self.max_stops = max_stops;
        self
    }

    /// Largest input the optimizer accepts.
    pub fn max_stops(&self) -> usize {
        self.max_stops
    }

    /// Returns the stops reordered along the shortest open path.
    ///
    /// The output is always a permutation of the input. Inputs of zero or
    /// one stop come back unchanged.
    ///
    /// # Errors
    ///
    /// - [`ItineraryError::TooManyStops`] if the input exceeds [`max_stops`](Self::max_stops)
    /// - [`ItineraryError::NonFiniteCoordinate`] if any coordinate is NaN or infinite
    pub fn optimize<T: Located + Clone>(&self, stops: &[T]) -> Result<Vec<T>> {
        let (order, _) = self.best_order(stops)?;
        Ok(order.into_iter().map(|i| stops[i].clone()).collect())
    }

    /// Returns the winning ordering as input indices, with its path distance.
    ///
    /// # Errors
    ///
    /// Same as [`optimize`](Self::optimize).
    pub fn best_order<T: Located>(&self, stops: &[T]) -> Result<(Vec<usize>, f64)> {
        let n = stops.len();
        if n > self.max_stops {
            return Err(ItineraryError::TooManyStops {
                count: n,
                limit: self.max_stops,
            });
        }
        for (position, stop) in stops.iter().enumerate() {
            let loc = stop.location();
            if !loc.is_finite() {
                return Err(ItineraryError::NonFiniteCoordinate {
                    position,
                    latitude: loc.latitude(),
                    longitude: loc.longitude(),
                });
            }
        }

        let mut order: Vec<usize> = (0..n).collect();
        if n <= 1 {
            return Ok((order, 0.0));
        }

        let distances = DistanceMatrix::from_locations(stops);
        debug_assert!(distances.is_symmetric(1e-12));
        let mut best = order.clone();
        let mut best_distance = distances.path_length(&order);

        while next_permutation(&mut order) {
            let d = distances.path_length(&order);
            if d < best_distance {
                best_distance = d;
                best.copy_from_slice(&order);
            }
        }

        debug!(
            stops = n,
            orderings = factorial(n),
            distance = best_distance,
            "ordered stops"
        );

        Ok((best, best_distance))
    }
}

impl Default for RouteOptimizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Orders stops with a default [`RouteOptimizer`].
///
/// # Examples
///
/// ```
/// use u_itinerary::models::{Coordinate, Stop};
/// use u_itinerary::optimize::optimize_route;
///
/// let day = vec![
///     Stop::new("A", Coordinate::new(0.0, 0.0)),
///     Stop::new("C", Coordinate::new(4.0, 0.0)),
///     Stop::new("B", Coordinate::new(0.0, 3.0)),
/// ];
/// let ordered = optimize_route(&day).unwrap();
/// let names: Vec<&str> = ordered.iter().map(|s| s.name()).collect();
/// assert_eq!(names, vec!["C", "A", "B"]);
/// ```
pub fn optimize_route<T: Located + Clone>(stops: &[T]) -> Result<Vec<T>> {
    RouteOptimizer::new().optimize(stops)
}
