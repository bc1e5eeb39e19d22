//! Dash and clip band geometry derived from the widget's size and padding.

use crate::animation::Animatable;
use crate::renderer::ClipPath;
use crate::widgets::{Padding, Point, Size};

/// Dash thickness as a share of the average content span.
pub const DASH_THICKNESS_PART: f32 = 1.0 / 12.0;

const SIN_45: f32 = std::f32::consts::FRAC_1_SQRT_2;

/// Geometry of the strike-through dash for one content box.
///
/// Pure function of size and padding: computing twice from the same inputs
/// gives bit-identical values.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DashGeometry {
    origin: Point,
    span_x: f32,
    span_y: f32,
    thickness: f32,
    start: Point,
    end: Point,
}

impl DashGeometry {
    pub fn compute(size: Size, padding: &Padding) -> Self {
        let origin = Point::new(padding.left, padding.top);
        let span_x = (size.width - padding.horizontal()).max(0.0);
        let span_y = (size.height - padding.vertical()).max(0.0);
        let thickness = (DASH_THICKNESS_PART * (span_x + span_y) / 2.0).round();

        // Inset the endpoints so the butt-capped stroke sits inside the band
        let delta1 = 1.5 * SIN_45 * thickness;
        let delta2 = 0.5 * SIN_45 * thickness;
        let start = Point::new(origin.x + delta2, origin.y + delta1);
        let end = Point::new(origin.x + span_x - delta1, origin.y + span_y - delta2);

        Self {
            origin,
            span_x,
            span_y,
            thickness,
            start,
            end,
        }
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn span(&self) -> Size {
        Size::new(self.span_x, self.span_y)
    }

    /// Stroke width of the dash in pixels.
    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    /// Where the visible dash ends at `fraction`: the start point at 0, the
    /// full end point at 1.
    pub fn dash_end_at(&self, fraction: f32) -> Point {
        Point::lerp(&self.start, &self.end, fraction)
    }

    /// The band removed from the icon at `fraction`.
    ///
    /// The leading edge sweeps from the top-left corner to the bottom-right
    /// corner as the fraction goes from 0 to 1; the trailing vertices are
    /// offset from the leading ones by `thickness / sin 45°`.
    pub fn clip_path(&self, fraction: f32) -> ClipPath {
        let delta = self.thickness / SIN_45;
        let Point { x: ox, y: oy } = self.origin;
        let sweep_x = ox + self.span_x * fraction;
        let sweep_y = oy + self.span_y * fraction;
        ClipPath::new([
            Point::new(ox, oy + delta),
            Point::new(ox + delta, oy),
            Point::new(sweep_x, sweep_y - delta),
            Point::new(sweep_x - delta, sweep_y),
        ])
    }
}
