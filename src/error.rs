//! Error type shared by every fallible operation in the crate.

use thiserror::Error;

/// Errors raised while building catalogs, splitting trips, or ordering stops.
#[derive(Debug, Error)]
pub enum ItineraryError {
    /// A stop carries a NaN or infinite coordinate component.
    #[error("stop at position {position} has a non-finite coordinate ({latitude}, {longitude})")]
    NonFiniteCoordinate {
        /// Index of the offending stop in the input sequence.
        position: usize,
        /// Latitude as given.
        latitude: f64,
        /// Longitude as given.
        longitude: f64,
    },

    /// Two catalog entries share a name.
    #[error("duplicate stop name `{0}`")]
    DuplicateStop(String),

    /// The exhaustive search was asked to order more stops than allowed.
    #[error("{count} stops exceed the exhaustive search limit of {limit}")]
    TooManyStops {
        /// Number of stops supplied.
        count: usize,
        /// Configured limit.
        limit: usize,
    },

    /// A trip was requested with zero days.
    #[error("a trip must span at least one day")]
    NoDays,

    /// The catalog file could not be opened or read.
    #[error("failed to read catalog")]
    Io(#[from] std::io::Error),

    /// The catalog is not a JSON array of stops.
    #[error("failed to parse catalog")]
    Json(#[from] serde_json::Error),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, ItineraryError>;
