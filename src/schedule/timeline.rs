//! Time-slot assignment for an ordered day.
//!
//! Positions alternate between a morning block and an afternoon block, and a
//! single lunch marker is placed right before the middle position of the day
//! (`len / 2`). A one-stop day therefore starts with lunch.

use std::fmt;

use crate::models::Stop;

/// A block of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeSlot {
    /// 09:00-12:00.
    Morning,
    /// 12:00-13:00.
    Lunch,
    /// 13:00-17:00.
    Afternoon,
}

impl TimeSlot {
    /// Clock span of the slot.
    pub fn span(&self) -> &'static str {
        match self {
            TimeSlot::Morning => "09:00-12:00",
            TimeSlot::Lunch => "12:00-13:00",
            TimeSlot::Afternoon => "13:00-17:00",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            TimeSlot::Morning => "morning",
            TimeSlot::Lunch => "lunch",
            TimeSlot::Afternoon => "afternoon",
        }
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.span(), self.label())
    }
}

/// One line of a day's timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimelineEntry<'a> {
    /// The fixed lunch break.
    Lunch,
    /// A visit to a stop in the given slot.
    Visit {
        /// Morning or afternoon.
        slot: TimeSlot,
        /// The stop being visited.
        stop: &'a Stop,
    },
}

impl TimelineEntry<'_> {
    /// The slot this entry occupies.
    pub fn slot(&self) -> TimeSlot {
        match self {
            TimelineEntry::Lunch => TimeSlot::Lunch,
            TimelineEntry::Visit { slot, .. } => *slot,
        }
    }
}

impl fmt::Display for TimelineEntry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimelineEntry::Lunch => write!(f, "{}", TimeSlot::Lunch),
            TimelineEntry::Visit { slot, stop } => {
                write!(f, "{slot}")?;
                if !stop.icon().is_empty() {
                    write!(f, " {}", stop.icon())?;
                }
                write!(f, " {}", stop.name())?;
                match (stop.description().is_empty(), stop.station().is_empty()) {
                    (true, true) => Ok(()),
                    (false, true) => write!(f, " ({})", stop.description()),
                    (true, false) => write!(f, " ({})", stop.station()),
                    (false, false) => write!(f, " ({}, {})", stop.description(), stop.station()),
                }
            }
        }
    }
}

/// Lays out an ordered day as morning/afternoon visits around one lunch.
///
/// # Examples
///
/// ```
/// use u_itinerary::models::{Coordinate, Stop};
/// use u_itinerary::schedule::{timeline, TimeSlot};
///
/// let stops: Vec<Stop> = (0..3)
///     .map(|i| Stop::new(format!("S{i}"), Coordinate::new(0.0, i as f64)))
///     .collect();
/// let slots: Vec<TimeSlot> = timeline(&stops).iter().map(|e| e.slot()).collect();
/// assert_eq!(
///     slots,
///     vec![TimeSlot::Morning, TimeSlot::Lunch, TimeSlot::Afternoon, TimeSlot::Morning]
/// );
/// ```
pub fn timeline(stops: &[Stop]) -> Vec<TimelineEntry<'_>> {
    let lunch_at = stops.len() / 2;
    let mut entries = Vec::with_capacity(stops.len() + 1);
    for (i, stop) in stops.iter().enumerate() {
        if i == lunch_at {
            entries.push(TimelineEntry::Lunch);
        }
        let slot = if i % 2 == 0 {
            TimeSlot::Morning
        } else {
            TimeSlot::Afternoon
        };
        entries.push(TimelineEntry::Visit { slot, stop });
    }
    entries
}
