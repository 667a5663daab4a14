//! Coordinate type and the `Located` trait.

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in degrees.
///
/// Distances between coordinates are planar: the degree differences are
/// treated as flat x/y offsets. Over intra-city spans the error against a
/// geodesic distance is negligible.
///
/// # Examples
///
/// ```
/// use u_itinerary::models::Coordinate;
///
/// let a = Coordinate::new(0.0, 0.0);
/// let b = Coordinate::new(3.0, 4.0);
/// assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// Creates a coordinate. No range checks are applied.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Returns `true` if both components are finite.
    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }

    /// Planar (Euclidean) distance to another coordinate.
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        let dlat = self.latitude - other.latitude;
        let dlon = self.longitude - other.longitude;
        (dlat * dlat + dlon * dlon).sqrt()
    }
}

/// Anything that sits at a coordinate and can therefore be routed.
pub trait Located {
    /// The item's position.
    fn location(&self) -> Coordinate;
}

impl Located for Coordinate {
    fn location(&self) -> Coordinate {
        *self
    }
}

impl<T: Located> Located for &T {
    fn location(&self) -> Coordinate {
        (**self).location()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_distance_symmetric() {
        let a = Coordinate::new(37.579617, 126.977041);
        let b = Coordinate::new(37.513068, 127.102538);
        assert!((a.distance_to(&b) - b.distance_to(&a)).abs() < 1e-12);
    }

    #[test]
    fn test_identical_points() {
        let a = Coordinate::new(37.5, 127.0);
        assert_eq!(a.distance_to(&a), 0.0);
    }

    #[test]
    fn test_is_finite() {
        assert!(Coordinate::new(1.0, 2.0).is_finite());
        assert!(!Coordinate::new(f64::NAN, 2.0).is_finite());
        assert!(!Coordinate::new(1.0, f64::INFINITY).is_finite());
    }

    #[test]
    fn test_located_for_reference() {
        let c = Coordinate::new(1.0, 2.0);
        let r = &c;
        assert_eq!(r.location(), c);
    }
}
