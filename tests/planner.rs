use std::path::PathBuf;

use u_itinerary::models::Catalog;
use u_itinerary::planner::TripPlanner;
use u_itinerary::schedule::TimeSlot;

fn data_file(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("data")
        .join(name)
}

#[test]
fn bundled_catalog_matches_builtin() {
    let from_file = Catalog::from_path(data_file("seoul.json"))
        .expect("valid catalog");
    assert_eq!(from_file, Catalog::seoul());
}

#[test]
fn two_day_trip_from_file() {
    let catalog = Catalog::from_path(data_file("seoul.json"))
        .expect("valid catalog");
    let itinerary = TripPlanner::new(&catalog).plan(2).expect("valid plan");

    assert_eq!(itinerary.num_days(), 2);
    for plan in itinerary.days() {
        assert_eq!(plan.len(), 5);
        let timeline = plan.timeline();
        assert_eq!(timeline.len(), 6);
        // Five stops: lunch sits before position 2.
        assert_eq!(timeline[2].slot(), TimeSlot::Lunch);
    }

    let text = itinerary.to_string();
    assert!(text.starts_with("Day 1\n"));
    assert!(text.contains("\nDay 2\n"));
    assert_eq!(text.matches("(lunch)").count(), 2);
}

#[test]
fn renderings_cover_every_stop() {
    let catalog = Catalog::seoul();
    let itinerary = TripPlanner::new(&catalog).plan(3).expect("valid plan");

    let geo = itinerary.to_geojson();
    let features = geo["features"].as_array().expect("feature array");
    assert_eq!(features.len(), catalog.len());

    let json = serde_json::to_value(&itinerary).expect("serializable");
    let days = json["days"].as_array().expect("day array");
    assert_eq!(days.len(), 3);
    let total: usize = days
        .iter()
        .map(|d| d["stops"].as_array().map_or(0, Vec::len))
        .sum();
    assert_eq!(total, catalog.len());

    let text = itinerary.to_string();
    for stop in catalog.stops() {
        assert!(text.contains(stop.name()), "missing {}", stop.name());
    }
}

#[test]
fn jamsil_pair_stays_adjacent() {
    // Lotte World and Lotte World Tower are a few hundred metres apart and far
    // from everything else on the third day, so the shortest path keeps them
    // next to each other.
    let catalog = Catalog::seoul();
    let itinerary = TripPlanner::new(&catalog).plan(3).expect("valid plan");
    let names: Vec<&str> = itinerary.days()[2]
        .stops()
        .iter()
        .map(|s| s.name())
        .collect();
    let position = |name: &str| names.iter().position(|&n| n == name);
    let a = position("Lotte World").expect("present");
    let b = position("Lotte World Tower").expect("present");
    assert_eq!(a.abs_diff(b), 1);
}
