use super::*;

fn pt(lat: f64, lng: f64) -> GeoPoint {
    GeoPoint::new(lat, lng)
}

#[test]
fn test_bearing_cardinal_directions() {
    let origin = pt(0.0, 0.0);
    assert!(bearing(origin, pt(1.0, 0.0)).approx_eq(&0.0));
    assert!(bearing(origin, pt(0.0, 1.0)).approx_eq(&90.0));
    assert!(bearing(origin, pt(-1.0, 0.0)).approx_eq(&180.0));
    assert!(bearing(origin, pt(0.0, -1.0)).approx_eq(&270.0));
}

#[test]
fn test_bearing_is_in_range() {
    let samples = [
        (pt(51.5, -0.12), pt(51.49, -0.13)),
        (pt(-33.9, 151.2), pt(-33.8, 151.1)),
        (pt(40.0, -74.0), pt(40.0, -74.0)),
    ];
    for (a, b) in samples {
        let b = bearing(a, b);
        assert!((0.0..360.0).contains(&b), "bearing {} out of range", b);
    }
}

#[test]
fn test_bearing_reverse_differs_by_half_turn() {
    let a = pt(37.7749, -122.4194);
    let b = pt(37.7755, -122.4180);
    let forward = bearing(a, b);
    let back = bearing(b, a);
    let diff = (forward - back).abs();
    // Over a few hundred meters the convergence of meridians is negligible.
    assert!((diff - 180.0).abs() < 1e-2, "diff was {}", diff);
}

#[test]
fn test_distance_one_degree_of_latitude() {
    let d = distance(pt(0.0, 0.0), pt(1.0, 0.0));
    // 2 * PI * R / 360
    assert!((d - 111_194.93).abs() < 0.01, "distance was {}", d);
}

#[test]
fn test_distance_symmetric_and_zero() {
    let a = pt(48.8566, 2.3522);
    let b = pt(48.8570, 2.3530);
    assert_eq!(distance(a, b), distance(b, a));
    assert_eq!(distance(a, a), 0.0);
    assert!(distance(a, b) > 0.0);
}

#[test]
fn test_approach_angle_folds_past_half_turn() {
    assert_eq!(approach_angle(0.0, 90.0), 90.0);
    assert_eq!(approach_angle(10.0, 350.0), 20.0);
    assert_eq!(approach_angle(350.0, 10.0), 20.0);
    assert_eq!(approach_angle(0.0, 180.0), 180.0);
    assert_eq!(approach_angle(45.0, 45.0), 0.0);
}

#[test]
fn test_heading_change_is_signed() {
    assert_eq!(heading_change(0.0, 90.0), 90.0);
    assert_eq!(heading_change(90.0, 0.0), -90.0);
    assert_eq!(heading_change(350.0, 10.0), 20.0);
    assert_eq!(heading_change(10.0, 350.0), -20.0);
    assert_eq!(heading_change(0.0, 180.0), 180.0);
    assert_eq!(heading_change(180.0, 0.0), 180.0);
}

#[test]
fn test_path_bearings_need_two_points() {
    assert_eq!(path_start_bearing(&[]), None);
    assert_eq!(path_end_bearing(&[pt(1.0, 1.0)]), None);

    let path = vec![pt(0.0, 0.0), pt(1.0, 0.0), pt(1.0, 1.0)];
    assert!(path_start_bearing(&path).unwrap().approx_eq(&0.0));
    let end = path_end_bearing(&path).unwrap();
    assert!((end - 90.0).abs() < 0.05, "end bearing {}", end);
}

#[test]
fn test_is_within_threshold() {
    let a = pt(0.0, 0.0);
    let b = pt(0.0, 0.00001); // ~1.1 m
    assert!(is_within_threshold(a, b, 5.0));
    assert!(!is_within_threshold(a, b, 1.0));
    assert!(is_within_threshold(a, a, 0.0));
}

#[test]
fn test_geopoint_serde_shape() {
    let json = serde_json::to_string(&pt(1.5, -2.25)).unwrap();
    assert_eq!(json, r#"{"lat":1.5,"lng":-2.25}"#);
    let back: GeoPoint = serde_json::from_str(&json).unwrap();
    assert_eq!(back, pt(1.5, -2.25));
}
