//! The clip band polygon.

use crate::widgets::Point;

/// A closed four-vertex polygon in local coordinates.
///
/// Vertices are stored in drawing order; the polygon is closed implicitly
/// from the last vertex back to the first.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ClipPath {
    points: [Point; 4],
}

impl ClipPath {
    pub fn new(points: [Point; 4]) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Point; 4] {
        &self.points
    }

    /// Even-odd point-in-polygon test.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        let mut inside = false;
        let mut j = self.points.len() - 1;
        for i in 0..self.points.len() {
            let (pi, pj) = (self.points[i], self.points[j]);
            if (pi.y > y) != (pj.y > y) && x < (pj.x - pi.x) * (y - pi.y) / (pj.y - pi.y) + pi.x
            {
                inside = !inside;
            }
            j = i;
        }
        inside
    }
}
