use super::*;
use super::CollisionClassification::*;

#[test]
fn test_classify_boundaries() {
    assert_eq!(classify(0.0), RearEnd);
    assert_eq!(classify(30.0), RearEnd);
    assert_eq!(classify(45.0), Sideswipe);
    assert_eq!(classify(60.0), TBone);
    assert_eq!(classify(90.0), TBone);
    assert_eq!(classify(120.0), TBone);
    assert_eq!(classify(135.0), Sideswipe);
    assert_eq!(classify(150.0), RearEnd);
    assert_eq!(classify(180.0), RearEnd);
}

#[test]
fn test_classify_just_inside_gaps() {
    assert_eq!(classify(30.001), Sideswipe);
    assert_eq!(classify(59.999), Sideswipe);
    assert_eq!(classify(120.001), Sideswipe);
    assert_eq!(classify(149.999), Sideswipe);
}

#[test]
fn test_clock_approximation() {
    assert_eq!(to_clock_approximation(0.0).hour(), 12);
    assert_eq!(to_clock_approximation(90.0).hour(), 3);
    assert_eq!(to_clock_approximation(180.0).hour(), 6);
    assert_eq!(to_clock_approximation(359.0).hour(), 12);
    assert_eq!(to_clock_approximation(44.0).hour(), 1);
    assert_eq!(to_clock_approximation(45.0).hour(), 2);
    assert_eq!(to_clock_approximation(14.9).hour(), 12);
}

#[test]
fn test_clock_is_always_on_the_dial() {
    for tenth in 0..=3600 {
        let hour = to_clock_approximation(tenth as f64 / 10.0).hour();
        assert!((1..=12).contains(&hour), "hour {} for {}", hour, tenth);
    }
}

#[test]
fn test_pdof_clock_rejects_off_dial_values() {
    assert!(PdofClock::new(0).is_none());
    assert!(PdofClock::new(13).is_none());
    assert_eq!(PdofClock::new(7).map(PdofClock::hour), Some(7));
    assert!(serde_json::from_str::<PdofClock>("0").is_err());
    assert_eq!(serde_json::from_str::<PdofClock>("9").unwrap().hour(), 9);
}

#[test]
fn test_classification_labels() {
    assert_eq!(RearEnd.to_string(), "Rear-end");
    assert_eq!(TBone.to_string(), "T-bone");
    assert_eq!(Sideswipe.to_string(), "Sideswipe");
    assert_eq!(serde_json::to_string(&TBone).unwrap(), "\"T-bone\"");
}

#[test]
fn test_geometry_from_perpendicular_bearings() {
    let geometry = CollisionGeometry::from_bearings(0.0, 90.0);
    assert_eq!(geometry.approach_angle, 90.0);
    assert_eq!(geometry.classification, TBone);
    assert_eq!(geometry.pdof_clock.hour(), 3);
}
