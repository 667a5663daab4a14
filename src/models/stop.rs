//! Point-of-interest stop.

use serde::{Deserialize, Serialize};

use super::{Coordinate, Located};

/// A point of interest to visit.
///
/// The description, station and icon are display metadata; nothing in the
/// crate interprets them.
///
/// # Examples
///
/// ```
/// use u_itinerary::models::{Coordinate, Stop};
///
/// let stop = Stop::new("Myeongdong", Coordinate::new(37.563757, 126.982682))
///     .with_description("Shopping and street food")
///     .with_station("Myeongdong Stn. (Line 4)")
///     .with_icon("🛍️");
/// assert_eq!(stop.name(), "Myeongdong");
/// assert_eq!(stop.icon(), "🛍️");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    name: String,
    #[serde(flatten)]
    location: Coordinate,
    #[serde(default)]
    description: String,
    #[serde(default)]
    station: String,
    #[serde(default)]
    icon: String,
}

impl Stop {
    /// Creates a stop with empty display metadata.
    pub fn new(name: impl Into<String>, location: Coordinate) -> Self {
        Self {
            name: name.into(),
            location,
            description: String::new(),
            station: String::new(),
            icon: String::new(),
        }
    }

    /// Sets the short description shown next to the name.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the nearest-station text.
    pub fn with_station(mut self, station: impl Into<String>) -> Self {
        self.station = station.into();
        self
    }

    /// Sets the icon printed before the name.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    /// Unique name within a catalog.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Short description, empty when unset.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Nearest public transport station.
    pub fn station(&self) -> &str {
        &self.station
    }

    /// Display icon, empty when unset.
    pub fn icon(&self) -> &str {
        &self.icon
    }
}

impl Located for Stop {
    fn location(&self) -> Coordinate {
        self.location
    }
}
