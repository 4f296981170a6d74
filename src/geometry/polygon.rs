//! Closed polygons given as an ordered vertex list.
//!
//! The edges are each consecutive pair of vertices plus the wrap-around edge
//! from the last vertex back to the first.

use glam::DVec2;

use super::{LineSegment, Point, Size};
use crate::errors::GeometryError;

#[derive(Clone, Debug, PartialEq, Default)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    pub fn new(vertices: Vec<Point>) -> Self {
        Polygon { vertices }
    }

    /// Like [`Polygon::new`] but requires at least three vertices, so the
    /// interior is defined.
    pub fn try_new(vertices: Vec<Point>) -> Result<Self, GeometryError> {
        if vertices.len() < 3 {
            return Err(GeometryError::MalformedInput {
                what: "polygon",
                reason: format!("{} vertices given, at least 3 needed", vertices.len()),
            });
        }
        Ok(Polygon { vertices })
    }

    pub fn add_vertex(&mut self, p: Point) {
        self.vertices.push(p);
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertex(&self, index: usize) -> Result<Point, GeometryError> {
        self.vertices
            .get(index)
            .copied()
            .ok_or(GeometryError::IndexOutOfRange { index, len: self.vertices.len() })
    }

    /// Edge `index` runs from vertex `index` to the next one, wrapping at the end.
    pub fn edge(&self, index: usize) -> Result<LineSegment, GeometryError> {
        let len = self.vertices.len();
        if index >= len {
            return Err(GeometryError::IndexOutOfRange { index, len });
        }
        Ok(LineSegment::new(self.vertices[index], self.vertices[(index + 1) % len]))
    }

    /// All edges, including the closing edge. A single vertex yields one
    /// zero-length edge; an empty polygon yields none.
    pub fn edges(&self) -> impl Iterator<Item = LineSegment> + '_ {
        let len = self.vertices.len();
        (0..len).map(move |i| LineSegment::new(self.vertices[i], self.vertices[(i + 1) % len]))
    }

    /// Center of the bounding box; the origin for an empty polygon.
    pub fn center(&self) -> Point {
        match self.bounds() {
            Some((min, max)) => ((min + max) / 2.0).into(),
            None => Point::ORIGIN,
        }
    }

    /// Size of the bounding box; zero for an empty polygon.
    pub fn size(&self) -> Size {
        match self.bounds() {
            Some((min, max)) => Size::new(max.x - min.x, max.y - min.y),
            None => Size::default(),
        }
    }

    fn bounds(&self) -> Option<(DVec2, DVec2)> {
        let (first, rest) = self.vertices.split_first()?;
        let start = DVec2::from(*first);
        Some(rest.iter().fold((start, start), |(min, max), &p| {
            let v = DVec2::from(p);
            (min.min(v), max.max(v))
        }))
    }

    /// Distance of `p` from the nearest edge, positive inside and negative
    /// outside. Zero on the boundary.
    ///
    /// With fewer than three vertices there is no interior, so every point is
    /// outside; an empty polygon answers negative infinity.
    pub fn distance_inside(&self, p: Point) -> f64 {
        let boundary = self
            .edges()
            .map(|edge| edge.distance_from_segment(p))
            .fold(f64::INFINITY, f64::min);

        if self.vertices.len() < 3 {
            crate::log::debug!(
                vertices = self.vertices.len(),
                "distance_inside on degenerate polygon"
            );
            return -boundary;
        }
        if boundary == 0.0 {
            return 0.0;
        }
        if self.contains(p) { boundary } else { -boundary }
    }

    /// Crossing-number test: count edges crossed by a ray from `p` toward +x.
    fn contains(&self, p: Point) -> bool {
        let target = DVec2::from(p);
        let mut inside = false;
        let len = self.vertices.len();
        for i in 0..len {
            let a = DVec2::from(self.vertices[i]);
            let b = DVec2::from(self.vertices[(i + 1) % len]);
            // half-open in y so a vertex on the ray counts once
            if (a.y > target.y) != (b.y > target.y) {
                let x_cross = a.x + (target.y - a.y) / (b.y - a.y) * (b.x - a.x);
                if target.x < x_cross {
                    inside = !inside;
                }
            }
        }
        inside
    }
}

impl From<Vec<Point>> for Polygon {
    fn from(vertices: Vec<Point>) -> Self {
        Polygon::new(vertices)
    }
}
