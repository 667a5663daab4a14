//! Immutable reference table of stops.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::{ItineraryError, Result};

use super::{Coordinate, Located, Stop};

/// The fixed set of points of interest a trip is planned over.
///
/// Built once and handed to [`TripPlanner`](crate::planner::TripPlanner)
/// by reference. Construction checks that names are unique and that every
/// coordinate is finite, so downstream code never sees malformed stops.
///
/// # Examples
///
/// ```
/// use u_itinerary::models::{Catalog, Coordinate, Stop};
///
/// let catalog = Catalog::new(vec![
///     Stop::new("A", Coordinate::new(0.0, 0.0)),
///     Stop::new("B", Coordinate::new(0.0, 3.0)),
/// ]).unwrap();
/// assert_eq!(catalog.len(), 2);
/// assert!(catalog.get("B").is_some());
///
/// let dup = Catalog::new(vec![
///     Stop::new("A", Coordinate::new(0.0, 0.0)),
///     Stop::new("A", Coordinate::new(1.0, 1.0)),
/// ]);
/// assert!(dup.is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    stops: Vec<Stop>,
}

impl Catalog {
    /// Validates and wraps a list of stops, keeping their order.
    pub fn new(stops: Vec<Stop>) -> Result<Self> {
        validate(&stops)?;
        Ok(Self { stops })
    }

    /// Parses a JSON array of stops.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let stops: Vec<Stop> = serde_json::from_str(json)?;
        Self::new(stops)
    }

    /// Parses a JSON array of stops from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let stops: Vec<Stop> = serde_json::from_reader(reader)?;
        Self::new(stops)
    }

    /// Loads a JSON catalog file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Ten well-known sights in central Seoul, in their reference order.
    pub fn seoul() -> Self {
        Self {
            stops: vec![
                landmark(
                    "Gyeongbokgung",
                    37.579617,
                    126.977041,
                    "Main royal palace of Joseon",
                    "Gyeongbokgung Stn. (Line 3)",
                    "🏛️",
                ),
                landmark(
                    "Myeongdong",
                    37.563757,
                    126.982682,
                    "Shopping and street food",
                    "Myeongdong Stn. (Line 4)",
                    "🛍️",
                ),
                landmark(
                    "N Seoul Tower",
                    37.551169,
                    126.988227,
                    "City observation deck",
                    "Chungmuro Stn. (Lines 3, 4)",
                    "🌉",
                ),
                landmark(
                    "Bukchon Hanok Village",
                    37.582604,
                    126.983998,
                    "Traditional houses amid the modern city",
                    "Anguk Stn. (Line 3)",
                    "🏘️",
                ),
                landmark(
                    "Hongdae",
                    37.555226,
                    126.923943,
                    "Youth and street art",
                    "Hongik Univ. Stn. (Line 2)",
                    "🎨",
                ),
                landmark(
                    "DDP",
                    37.566478,
                    127.009041,
                    "Futuristic architecture and exhibitions",
                    "Dongdaemun History & Culture Park Stn. (Lines 2, 4, 5)",
                    "🏢",
                ),
                landmark(
                    "Hangang Park",
                    37.528708,
                    126.934889,
                    "Riverside park",
                    "Yeouinaru Stn. (Line 5)",
                    "🌊",
                ),
                landmark(
                    "Insadong",
                    37.574009,
                    126.984913,
                    "Traditional culture street",
                    "Jongno 3-ga Stn. (Lines 1, 3, 5)",
                    "🎎",
                ),
                landmark(
                    "Lotte World",
                    37.511000,
                    127.098000,
                    "Indoor theme park",
                    "Jamsil Stn. (Lines 2, 8)",
                    "🎡",
                ),
                landmark(
                    "Lotte World Tower",
                    37.513068,
                    127.102538,
                    "Tallest building and sky deck",
                    "Jamsil Stn. (Lines 2, 8)",
                    "🏙️",
                ),
            ],
        }
    }

    /// All stops in catalog order.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// Looks up a stop by name.
    pub fn get(&self, name: &str) -> Option<&Stop> {
        self.stops.iter().find(|s| s.name() == name)
    }

    /// Number of stops.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Returns `true` if the catalog has no stops.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }
}

fn landmark(
    name: &str,
    latitude: f64,
    longitude: f64,
    description: &str,
    station: &str,
    icon: &str,
) -> Stop {
    Stop::new(name, Coordinate::new(latitude, longitude))
        .with_description(description)
        .with_station(station)
        .with_icon(icon)
}

fn validate(stops: &[Stop]) -> Result<()> {
    let mut seen = HashSet::with_capacity(stops.len());
    for (position, stop) in stops.iter().enumerate() {
        let loc = stop.location();
        if !loc.is_finite() {
            return Err(ItineraryError::NonFiniteCoordinate {
                position,
                latitude: loc.latitude(),
                longitude: loc.longitude(),
            });
        }
        if !seen.insert(stop.name()) {
            return Err(ItineraryError::DuplicateStop(stop.name().to_string()));
        }
    }
    Ok(())
}
