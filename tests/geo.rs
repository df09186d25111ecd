use pinruler::data::geo::*;

#[test]
fn identical_points_are_zero_apart() {
    for &(lat, lon) in &[(0.0, 0.0), (-6.891161, 107.610633), (89.9, -179.9), (-45.0, 12.5)] {
        assert_eq!(estimate_distance_m(lat, lon, lat, lon), 0);
    }
}

#[test]
fn distance_is_symmetric() {
    let a = (-6.891161, 107.610633);
    let b = (-6.9, 107.62);
    assert_eq!(
        estimate_distance_m(a.0, a.1, b.0, b.1),
        estimate_distance_m(b.0, b.1, a.0, a.1)
    );
    assert_eq!(estimate_distance_m(a.0, a.1, b.0, b.1), 1427);
}

#[test]
fn thousandth_of_a_degree_near_equator_is_about_111_m() {
    assert_eq!(estimate_distance_m(0.0, 0.0, 0.001, 0.0), 111);
}

#[test]
fn chord_is_shorter_than_arc() {
    let a = LatLon::new(0.0, 0.0);
    let b = LatLon::new(0.0, 90.0);
    let arc_m = a.angle_to(&b) * EARTH_RADIUS_KM * 1000.0;
    assert!((a.chord_distance_m(&b) as f64) < arc_m);
}

#[test]
fn interpolate_hits_endpoints() {
    let a = LatLon::new(10.0, 20.0);
    let b = LatLon::new(12.0, 25.0);
    let start = interpolate(a, b, 0.0);
    let end = interpolate(a, b, 1.0);
    assert!((start.lat - a.lat).abs() < 1e-9 && (start.lon - a.lon).abs() < 1e-9);
    assert!((end.lat - b.lat).abs() < 1e-9 && (end.lon - b.lon).abs() < 1e-9);
}

#[test]
fn interpolate_midpoint_is_equidistant() {
    let a = LatLon::new(0.0, 0.0);
    let b = LatLon::new(0.0, 90.0);
    let mid = interpolate(a, b, 0.5);
    assert!(mid.lat.abs() < 1e-9);
    assert!((mid.lon - 45.0).abs() < 1e-9);
    assert_eq!(mid.chord_distance_m(&a), mid.chord_distance_m(&b));
}

#[test]
fn interpolate_coincident_points() {
    let a = LatLon::new(-6.891161, 107.610633);
    assert_eq!(interpolate(a, a, 0.5), a);
}
