//! Geometry as devices use it: object locations, visual angles, target
//! acquisition and region membership.

use epic_values::Symbol;
use epic_values::geometry::{
    CartesianVector, LineSegment, Point, PolarVector, Polygon, Size, cartesian_distance,
    clip_line_to_rectangle, closest_distance, compute_center_intersecting_line,
    degrees_subtended, degrees_subtended_per_unit, is_point_inside_rectangle, to_degrees,
    to_radians, units_per_degree_subtended,
};
use insta::assert_snapshot;

#[test]
fn segment_distance_boundary() {
    let seg = LineSegment::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
    assert_eq!(seg.closest_point_on_segment(Point::new(5.0, 3.0)), Point::new(5.0, 0.0));
    assert_eq!(seg.distance_from_segment(Point::new(5.0, 3.0)), 3.0);
    assert_eq!(seg.closest_point_on_segment(Point::new(-5.0, 0.0)), Point::new(0.0, 0.0));
    assert_eq!(seg.distance_from_segment(Point::new(-5.0, 0.0)), 5.0);
}

#[test]
fn polygon_containment_sign() {
    let square = Polygon::new(vec![
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(1.0, 1.0),
        Point::new(0.0, 1.0),
    ]);
    assert!(square.distance_inside(Point::new(0.5, 0.5)) > 0.0);
    assert!(square.distance_inside(Point::new(2.0, 2.0)) < 0.0);
    assert!(square.distance_inside(Point::new(0.5, 0.0)).abs() < 1e-12);
}

#[test]
fn clockwise_and_counterclockwise_agree() {
    let ccw = vec![Point::new(0.0, 0.0), Point::new(4.0, 0.0), Point::new(2.0, 3.0)];
    let cw: Vec<Point> = ccw.iter().rev().copied().collect();
    for p in [Point::new(2.0, 1.0), Point::new(5.0, 5.0), Point::new(2.0, -1.0)] {
        let forward = Polygon::new(ccw.clone()).distance_inside(p);
        let backward = Polygon::new(cw.clone()).distance_inside(p);
        assert!((forward - backward).abs() < 1e-12, "{p}: {forward} vs {backward}");
    }
}

#[test]
fn vector_round_trip_through_polar() {
    let p1 = Point::new(3.0, -2.0);
    let p2 = Point::new(-7.5, 11.0);
    let polar = PolarVector::from_points(p1, p2);
    assert!((polar.r - cartesian_distance(p1, p2)).abs() < 1e-12);
    let back = p1 + CartesianVector::from(polar);
    assert!((back.x - p2.x).abs() < 1e-9);
    assert!((back.y - p2.y).abs() < 1e-9);
}

#[test]
fn visual_angle_of_a_pixel() {
    // 72 pixels per inch viewed from 24 inches
    let per_pixel = degrees_subtended_per_unit(72.0, 24.0);
    assert!((per_pixel - 0.0331573).abs() < 1e-6);
    assert!((units_per_degree_subtended(per_pixel, 24.0) - 72.0).abs() < 1e-9);
    // a one-inch object at the same distance spans about 72 pixels' worth
    assert!((degrees_subtended(1.0, 24.0) / per_pixel - 72.0).abs() < 0.05);
    assert!((to_degrees(to_radians(per_pixel)) - per_pixel).abs() < 1e-15);
}

#[test]
fn fitts_target_line() {
    let target_center = Point::new(100.0, 50.0);
    let target_size = Size::new(20.0, 10.0);
    let cursor = Point::new(0.0, 50.0);
    let approach = LineSegment::new(cursor, target_center);
    let inner =
        compute_center_intersecting_line(&approach, target_size).expect("cursor outside target");
    assert_eq!(inner.p1(), Point::new(90.0, 50.0));
    assert_eq!(inner.length(), 10.0);
    assert_eq!(closest_distance(cursor, target_center, target_size), 90.0);
    assert!(!is_point_inside_rectangle(cursor, target_center, target_size));
}

#[test]
fn clipping_to_a_background() {
    let background = (Point::new(0.0, 0.0), Size::new(20.0, 20.0));
    let diagonal = LineSegment::new(Point::new(-20.0, -20.0), Point::new(20.0, 20.0));
    let clipped = clip_line_to_rectangle(&diagonal, background.0, background.1)
        .expect("crosses background");
    assert_snapshot!(clipped.to_string(), @"(-10, -10) -> (10, 10)");
}

#[test]
fn symbols_carry_geometry() {
    let outline =
        Polygon::new(vec![Point::new(0.0, 0.0), Point::new(6.0, 0.0), Point::new(6.0, 4.0)]);
    let sym = Symbol::named("region", outline.vertices().to_vec());
    let restored = Polygon::new(sym.points().map(<[Point]>::to_vec).unwrap_or_default());
    assert_eq!(restored, outline);
    assert_eq!(restored.center(), Point::new(3.0, 2.0));
}
