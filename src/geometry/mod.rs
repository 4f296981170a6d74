//! Plane geometry: points, displacements, line segments, polygons and
//! rectangles.
//!
//! Everything here is a plain value with no dependency on Symbol. Nothing
//! fails on finite input; degenerate shapes are handled by explicit branches.

pub mod line;
pub mod point;
pub mod polygon;
pub mod rect;
pub mod vector;

pub use line::LineSegment;
pub use point::{
    Point, Size, cartesian_distance, degrees_subtended, degrees_subtended_per_unit, to_degrees,
    to_radians, units_per_degree_subtended,
};
pub use polygon::Polygon;
pub use rect::{
    clip_line_to_rectangle, closest_distance, compute_center_intersecting_line,
    is_point_inside_rectangle,
};
pub use vector::{CartesianVector, PolarVector};
