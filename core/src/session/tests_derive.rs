use super::derive::{classify_vehicles, derive, VehicleDerived};
use super::{CollisionEntityType, Participant, SessionId, VehicleTrack};
use crate::classify::CollisionClassification;
use crate::geo::GeoPoint;

fn pt(lat: f64, lng: f64) -> GeoPoint {
    GeoPoint::new(lat, lng)
}

fn impact() -> GeoPoint {
    pt(40.0, -74.0)
}

/// Track heading north into the impact, then veering east afterwards.
fn northbound() -> VehicleTrack {
    VehicleTrack {
        pre_impact: vec![pt(39.999, -74.0), impact()],
        post_impact: vec![impact(), pt(40.0, -73.999)],
        drawn: vec![pt(39.999, -74.0), pt(40.0, -74.0), pt(40.0, -73.999)],
        ..VehicleTrack::new("Your vehicle")
    }
}

/// Track heading east into the impact, then continuing north-east.
fn eastbound() -> VehicleTrack {
    VehicleTrack {
        pre_impact: vec![pt(40.0, -74.001), impact()],
        post_impact: vec![impact(), pt(40.001, -73.999)],
        ..VehicleTrack::new("Other vehicle")
    }
}

#[test]
fn test_vehicle_derived_bearings() {
    let d = VehicleDerived::from_track(&northbound(), Some(impact()));
    assert!(d.approach_bearing.unwrap().abs() < 1e-9);
    let sep = d.separation_bearing.unwrap();
    assert!((sep - 90.0).abs() < 0.01, "separation {}", sep);
    assert!((d.heading_change.unwrap() - 90.0).abs() < 0.01);
    assert_eq!(d.impact_offset_m, Some(0.0));
}

#[test]
fn test_vehicle_derived_empty_track() {
    let d = VehicleDerived::from_track(&VehicleTrack::new("x"), Some(impact()));
    assert_eq!(d, VehicleDerived::default());
}

#[test]
fn test_classify_vehicles_perpendicular() {
    let geometry = classify_vehicles(&northbound(), &eastbound()).unwrap();
    assert!((geometry.approach_angle - 90.0).abs() < 0.01);
    assert_eq!(geometry.classification, CollisionClassification::TBone);
    assert_eq!(geometry.pdof_clock.hour(), 3);
}

#[test]
fn test_classification_needs_both_bearings() {
    let mut other = eastbound();
    other.pre_impact.truncate(1);
    assert!(classify_vehicles(&northbound(), &other).is_none());
    assert!(classify_vehicles(&VehicleTrack::default(), &eastbound()).is_none());
}

#[test]
fn test_derive_vehicle_pair() {
    let id = SessionId::new_deterministic("derive");
    let data = derive(id, Some(impact()), &northbound(), &Participant::Vehicle(eastbound()));
    assert_eq!(data.session, id);
    assert!(data.is_classified());
    assert_eq!(data.collision_type, Some(CollisionClassification::TBone));
    assert!(data.other.is_some());
    // Separation bearings are ~90 and ~37 degrees.
    let sep = data.separation_angle.unwrap();
    assert!(sep > 45.0 && sep < 60.0, "separation angle {}", sep);
    assert_eq!(data.geometry().map(|g| g.classification), data.collision_type);
}

#[test]
fn test_derive_non_vehicle_never_classifies() {
    let other = Participant::new(CollisionEntityType::Animal);
    let data = derive(SessionId::new(), Some(impact()), &northbound(), &other);
    assert!(data.own.approach_bearing.is_some());
    assert!(data.other.is_none());
    assert_eq!(data.approach_angle, None);
    assert_eq!(data.collision_type, None);
    assert_eq!(data.pdof_clock, None);
    assert_eq!(data.separation_angle, None);
    assert!(data.geometry().is_none());
}

#[test]
fn test_derived_serializes_undetermined_as_null() {
    let other = Participant::new(CollisionEntityType::Vehicle);
    let data = derive(SessionId::new(), None, &VehicleTrack::default(), &other);
    let json = serde_json::to_value(&data).unwrap();
    assert!(json["collision_type"].is_null());
    assert!(json["pdof_clock"].is_null());
    assert!(json["own"]["approach_bearing"].is_null());
}
