//! Draw command definitions recorded by [`PaintContext`](super::PaintContext).

use super::{ClipPath, ColorFilter, DashPaint};
use crate::widgets::image::{ContentFit, ImageSource};
use crate::widgets::{Point, Rect};

/// A single draw operation in local coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Push the current clip state.
    Save,
    /// Pop back to the last saved clip state.
    Restore,

    /// Stroke a straight line.
    Line {
        /// Start point in local coordinates
        from: Point,
        /// End point in local coordinates
        to: Point,
        /// Stroke color and width
        paint: DashPaint,
    },

    /// Remove a path from subsequent drawing.
    ClipOutPath(ClipPath),

    /// Combine a path with the current clip using XOR.
    ClipPathXor(ClipPath),

    /// Draw an icon.
    Icon {
        /// Image source (path or bytes)
        source: ImageSource,
        /// Bounding rectangle in local coordinates
        rect: Rect,
        /// How the image content fits within the rect
        content_fit: ContentFit,
        /// Tint applied with SRC_IN
        filter: ColorFilter,
        /// Image alpha, 0 to 255
        alpha: u8,
    },
}

impl DrawCommand {
    /// Create a line.
    pub fn line(from: Point, to: Point, paint: DashPaint) -> Self {
        Self::Line { from, to, paint }
    }

    pub fn is_clip(&self) -> bool {
        matches!(self, Self::ClipOutPath(_) | Self::ClipPathXor(_))
    }
}
