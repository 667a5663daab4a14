//! Dense distance matrix.

use crate::models::Located;

/// A dense n×n distance matrix stored in row-major order.
///
/// Built once per optimization so the permutation search only does table
/// lookups.
///
/// # Examples
///
/// ```
/// use u_itinerary::models::Coordinate;
/// use u_itinerary::distance::DistanceMatrix;
///
/// let points = vec![
///     Coordinate::new(0.0, 0.0),
///     Coordinate::new(3.0, 4.0),
///     Coordinate::new(6.0, 8.0),
/// ];
/// let dm = DistanceMatrix::from_locations(&points);
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert!((dm.path_length(&[0, 1, 2]) - 10.0).abs() < 1e-10);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes the planar distance matrix between located items.
    pub fn from_locations<T: Located>(items: &[T]) -> Self {
        let n = items.len();
        let locations: Vec<_> = items.iter().map(Located::location).collect();
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = locations[i].distance_to(&locations[j]);
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance from location `from` to location `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Open path length visiting `order` front to back, with no return leg.
    pub fn path_length(&self, order: &[usize]) -> f64 {
        order.windows(2).map(|w| self.get(w[0], w[1])).sum()
    }
}
