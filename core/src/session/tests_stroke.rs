use super::{DrawingConfig, SessionError, StrokeRecorder};
use crate::geo::GeoPoint;

fn recorder() -> StrokeRecorder {
    StrokeRecorder::new(&DrawingConfig::default())
}

fn jittery_line(n: usize) -> Vec<GeoPoint> {
    (0..n)
        .map(|i| {
            let jitter = if i % 2 == 0 { 0.000001 } else { -0.000001 };
            GeoPoint::new(40.0 + i as f64 * 0.00001, -74.0 + jitter)
        })
        .collect()
}

#[test]
fn test_finish_without_stroke_fails() {
    let mut rec = recorder();
    assert_eq!(rec.finish(), Err(SessionError::NoActiveStroke));
}

#[test]
fn test_push_starts_stroke_and_simplifies_live() {
    let mut rec = recorder();
    let samples = jittery_line(50);
    let mut live = Vec::new();
    for s in &samples {
        live = rec.push(*s);
    }
    assert!(rec.is_active());
    assert_eq!(rec.samples().len(), 50);
    assert_eq!(live, vec![samples[0], samples[49]]);
}

#[test]
fn test_finish_uses_final_tolerance() {
    let config = DrawingConfig {
        live_tolerance: 1.0,
        final_tolerance: 0.0001,
        ..Default::default()
    };
    let mut rec = StrokeRecorder::new(&config);
    let corner = vec![
        GeoPoint::new(0.0, 0.0),
        GeoPoint::new(0.001, 0.0),
        GeoPoint::new(0.001, 0.001),
    ];
    for p in &corner {
        rec.push(*p);
    }
    assert_eq!(rec.live_path().len(), 2);

    let path = rec.finish().unwrap();
    assert_eq!(path, corner);
    assert!(!rec.is_active());
    assert!(rec.samples().is_empty());
}

#[test]
fn test_seeded_stroke_starts_at_seed() {
    let mut rec = recorder();
    let impact = GeoPoint::new(40.0, -74.0);
    rec.begin(Some(impact));
    rec.push(GeoPoint::new(40.001, -74.0));
    let path = rec.finish().unwrap();
    assert_eq!(path.first(), Some(&impact));
    assert_eq!(path.len(), 2);
}

#[test]
fn test_undo_and_reset() {
    let mut rec = recorder();
    let a = GeoPoint::new(1.0, 1.0);
    let b = GeoPoint::new(2.0, 2.0);
    rec.push(a);
    rec.push(b);
    assert_eq!(rec.undo(), Some(b));
    assert_eq!(rec.samples(), &[a]);

    rec.reset();
    assert!(rec.samples().is_empty());
    assert!(rec.is_active());
    assert_eq!(rec.undo(), None);
    assert_eq!(rec.finish(), Ok(Vec::new()));
}

#[test]
fn test_undo_keeps_seed() {
    let mut rec = recorder();
    let impact = GeoPoint::new(40.0, -74.0);
    let a = GeoPoint::new(40.001, -74.0);
    rec.begin(Some(impact));
    rec.push(a);

    assert_eq!(rec.undo(), Some(a));
    assert_eq!(rec.undo(), None);
    assert_eq!(rec.samples(), &[impact]);

    rec.push(a);
    rec.reset();
    assert_eq!(rec.samples(), &[impact]);

    let b = GeoPoint::new(40.002, -74.0);
    let live = rec.push(b);
    assert_eq!(live.first(), Some(&impact));
}
