//! Axis-aligned rectangles given by center and size.
//!
//! Used for object locations: clipping lines to a background, aiming at the
//! center of a target, and distance to a target's nearest edge.

use glam::{DVec2, dvec2};

use super::{LineSegment, Point, Size};

fn rect_bounds(rect_center: Point, rect_size: Size) -> (DVec2, DVec2) {
    let center = DVec2::from(rect_center);
    let half = rect_size.half_extents();
    (center - half, center + half)
}

/// Boundary points count as inside.
pub fn is_point_inside_rectangle(p: Point, rect_center: Point, rect_size: Size) -> bool {
    (p.x - rect_center.x).abs() <= rect_size.width / 2.0
        && (p.y - rect_center.y).abs() <= rect_size.height / 2.0
}

/// Clip `line` to the rectangle (Liang-Barsky).
///
/// Returns `None` when no part of the segment lies in the rectangle. Endpoints
/// that were already inside are kept bit-for-bit.
pub fn clip_line_to_rectangle(
    line: &LineSegment,
    rect_center: Point,
    rect_size: Size,
) -> Option<LineSegment> {
    let (min, max) = rect_bounds(rect_center, rect_size);
    let start = DVec2::from(line.p1());
    let delta = dvec2(line.dx(), line.dy());

    // (p, q) per boundary: the segment is inside that boundary where p*t <= q
    let boundaries = [
        (-delta.x, start.x - min.x),
        (delta.x, max.x - start.x),
        (-delta.y, start.y - min.y),
        (delta.y, max.y - start.y),
    ];

    let mut t_enter = 0.0_f64;
    let mut t_leave = 1.0_f64;
    for (p, q) in boundaries {
        if p == 0.0 {
            // parallel to this boundary
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t_leave {
                return None;
            }
            t_enter = t_enter.max(r);
        } else {
            if r < t_enter {
                return None;
            }
            t_leave = t_leave.min(r);
        }
    }

    let clipped_start = if t_enter == 0.0 { line.p1() } else { line.point_on_line(t_enter) };
    let clipped_end = if t_leave == 1.0 { line.p2() } else { line.point_on_line(t_leave) };
    Some(LineSegment::new(clipped_start, clipped_end))
}

/// Given a segment from a start point to the center of a rectangle, return
/// the part running from where it crosses the rectangle boundary to the
/// center. This is the effective target width line for Fitts' law index of
/// difficulty.
///
/// `None` when the start point is already inside the rectangle or the
/// segment has zero length.
pub fn compute_center_intersecting_line(
    start_to_center: &LineSegment,
    rect_size: Size,
) -> Option<LineSegment> {
    let center = start_to_center.p2();
    if start_to_center.is_degenerate()
        || is_point_inside_rectangle(start_to_center.p1(), center, rect_size)
    {
        return None;
    }
    clip_line_to_rectangle(start_to_center, center, rect_size)
        .map(|clipped| LineSegment::new(clipped.p1(), center))
}

/// Distance from `p` to the nearest point of the rectangle; zero when `p` is
/// inside or on the boundary.
pub fn closest_distance(p: Point, rect_center: Point, rect_size: Size) -> f64 {
    if is_point_inside_rectangle(p, rect_center, rect_size) {
        return 0.0;
    }
    let (min, max) = rect_bounds(rect_center, rect_size);
    let nearest = DVec2::from(p).max(min).min(max);
    super::cartesian_distance(p, nearest.into())
}
