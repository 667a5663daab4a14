//! # u-itinerary
//!
//! Multi-day sightseeing itinerary planning: a fixed catalog of points of
//! interest is split into days, and each day's stops are ordered along the
//! exact shortest open path.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Coordinate, Stop, Catalog, DayPlan, Itinerary)
//! - [`distance`] — Planar distance, path distance, and distance matrix
//! - [`optimize`] — Exhaustive route optimizer
//! - [`schedule`] — Day bucketing and morning/lunch/afternoon timeline
//! - [`planner`] — Trip planner tying catalog, bucketing and optimizer together

pub mod distance;
mod error;
pub mod models;
pub mod optimize;
pub mod planner;
pub mod schedule;

pub use error::{ItineraryError, Result};
