//! Planar distances between located items.
//!
//! Provides the pairwise distance, the open path distance of an ordered
//! sequence, and a dense distance matrix for repeated lookups.

mod matrix;

pub use matrix::DistanceMatrix;

use crate::models::Located;

/// Planar distance between two located items.
pub fn planar_distance<A: Located, B: Located>(a: &A, b: &B) -> f64 {
    a.location().distance_to(&b.location())
}

/// Sum of distances between consecutive items; 0 for fewer than two items.
///
/// There is no return leg from the last item to the first.
///
/// # Examples
///
/// ```
/// use u_itinerary::models::Coordinate;
/// use u_itinerary::distance::path_distance;
///
/// let a = Coordinate::new(0.0, 0.0);
/// let b = Coordinate::new(0.0, 3.0);
/// let c = Coordinate::new(4.0, 0.0);
/// assert!((path_distance(&[a, b, c]) - 8.0).abs() < 1e-10);
/// assert!((path_distance(&[a, c, b]) - 9.0).abs() < 1e-10);
/// ```
pub fn path_distance<T: Located>(items: &[T]) -> f64 {
    items
        .windows(2)
        .map(|w| planar_distance(&w[0], &w[1]))
        .sum()
}
