//! Whole-trip itinerary and its renderings.

use std::fmt;

use serde::Serialize;
use serde_json::{json, Value};

use super::{DayPlan, Located};

/// Day plans for a whole trip, in day order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Itinerary {
    days: Vec<DayPlan>,
}

impl Itinerary {
    /// Wraps day plans that are already in day order.
    pub fn new(days: Vec<DayPlan>) -> Self {
        Self { days }
    }

    /// All day plans.
    pub fn days(&self) -> &[DayPlan] {
        &self.days
    }

    /// Number of days.
    pub fn num_days(&self) -> usize {
        self.days.len()
    }

    /// Total number of stops over all days.
    pub fn num_stops(&self) -> usize {
        self.days.iter().map(DayPlan::len).sum()
    }

    /// Sum of every day's path distance. Travel between days is not counted.
    pub fn total_distance(&self) -> f64 {
        self.days.iter().map(DayPlan::total_distance).sum()
    }

    /// Renders the itinerary as a GeoJSON `FeatureCollection` of point markers.
    ///
    /// GeoJSON positions are `[longitude, latitude]`. Each feature carries
    /// its day, its 1-based visit order within the day, and the stop's
    /// display metadata.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_itinerary::models::{Coordinate, DayPlan, Itinerary, Stop};
    ///
    /// let itinerary = Itinerary::new(vec![DayPlan::new(1, vec![
    ///     Stop::new("A", Coordinate::new(37.5, 127.0)),
    /// ])]);
    /// let geo = itinerary.to_geojson();
    /// assert_eq!(geo["type"], "FeatureCollection");
    /// assert_eq!(geo["features"][0]["geometry"]["coordinates"][0], 127.0);
    /// ```
    pub fn to_geojson(&self) -> Value {
        let features: Vec<Value> = self
            .days
            .iter()
            .flat_map(|plan| {
                plan.stops().iter().enumerate().map(move |(i, stop)| {
                    let loc = stop.location();
                    json!({
                        "type": "Feature",
                        "geometry": {
                            "type": "Point",
                            "coordinates": [loc.longitude(), loc.latitude()],
                        },
                        "properties": {
                            "day": plan.day(),
                            "order": i + 1,
                            "name": stop.name(),
                            "description": stop.description(),
                            "station": stop.station(),
                            "icon": stop.icon(),
                        },
                    })
                })
            })
            .collect();

        json!({
            "type": "FeatureCollection",
            "features": features,
        })
    }
}

impl fmt::Display for Itinerary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, plan) in self.days.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "Day {}", plan.day())?;
            for entry in plan.timeline() {
                writeln!(f, "{entry}")?;
            }
        }
        Ok(())
    }
}
