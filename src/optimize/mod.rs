//! Route ordering for a single day.
//!
//! - [`RouteOptimizer`] — exact shortest open path by exhaustive search, O(n · n!)
//! - [`next_permutation`] — lexicographic permutation stepping used by the search

mod exhaustive;
mod permutation;

pub use exhaustive::{optimize_route, RouteOptimizer, DEFAULT_MAX_STOPS};
pub use permutation::{factorial, next_permutation};
