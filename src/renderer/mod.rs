//! Drawing surfaces.
//!
//! [`Canvas`] is the capability a host hands to
//! [`Widget::paint`](crate::widgets::Widget::paint): stroke a line, clip a
//! path away, draw an icon with a color filter and alpha. Two
//! implementations ship with the crate:
//!
//! - [`PaintContext`] records [`DrawCommand`]s for hosts that batch work
//!   onto their own renderer.
//! - [`RasterCanvas`] rasterizes in software with tiny-skia.

pub mod commands;
mod image_pixmap;
mod path;
mod raster;

pub use commands::DrawCommand;
pub use image_pixmap::{load_icon, tint_pixmap, LoadedIcon};
pub use path::ClipPath;
pub use raster::RasterCanvas;

use crate::widgets::image::{ContentFit, ImageSource};
use crate::widgets::{Color, Point, Rect};

/// What the drawing backend can do with clip paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasCapabilities {
    /// Backend can subtract a path from the clip directly. Without it the
    /// widget falls back to XOR-ing the path into the clip.
    pub clip_out: bool,
}

impl Default for CanvasCapabilities {
    fn default() -> Self {
        Self { clip_out: true }
    }
}

/// Color filter applied to an icon: every covered pixel takes this color,
/// keeping the icon's own coverage (Porter-Duff SRC_IN).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorFilter {
    pub color: Color,
}

impl ColorFilter {
    pub fn src_in(color: Color) -> Self {
        Self { color }
    }
}

/// Stroke settings for the dash line. Caps are butt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashPaint {
    pub color: Color,
    pub width: f32,
}

pub trait Canvas {
    fn capabilities(&self) -> CanvasCapabilities {
        CanvasCapabilities::default()
    }

    /// Save the current clip so [`restore`](Canvas::restore) can undo it.
    fn save(&mut self);

    fn restore(&mut self);

    fn draw_line(&mut self, from: Point, to: Point, paint: &DashPaint);

    /// Exclude `path` from everything drawn afterwards.
    fn clip_out_path(&mut self, path: &ClipPath);

    /// XOR `path` into the current clip.
    fn clip_path_xor(&mut self, path: &ClipPath);

    /// Draw the icon into `rect` with `filter` and `alpha` applied.
    fn draw_icon(
        &mut self,
        source: &ImageSource,
        rect: Rect,
        content_fit: ContentFit,
        filter: ColorFilter,
        alpha: u8,
    );
}

/// A [`Canvas`] that records draw commands instead of rasterizing.
pub struct PaintContext {
    commands: Vec<DrawCommand>,
    capabilities: CanvasCapabilities,
}

impl Default for PaintContext {
    fn default() -> Self {
        Self::new()
    }
}

impl PaintContext {
    pub fn new() -> Self {
        Self::with_capabilities(CanvasCapabilities::default())
    }

    /// Record for a backend with the given clip capabilities.
    pub fn with_capabilities(capabilities: CanvasCapabilities) -> Self {
        Self {
            commands: Vec::with_capacity(8),
            capabilities,
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded commands, leaving the context empty.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Clear all commands for reuse, preserving allocated capacity
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Canvas for PaintContext {
    fn capabilities(&self) -> CanvasCapabilities {
        self.capabilities
    }

    fn save(&mut self) {
        self.commands.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        self.commands.push(DrawCommand::Restore);
    }

    fn draw_line(&mut self, from: Point, to: Point, paint: &DashPaint) {
        self.commands.push(DrawCommand::line(from, to, *paint));
    }

    fn clip_out_path(&mut self, path: &ClipPath) {
        self.commands.push(DrawCommand::ClipOutPath(*path));
    }

    fn clip_path_xor(&mut self, path: &ClipPath) {
        self.commands.push(DrawCommand::ClipPathXor(*path));
    }

    fn draw_icon(
        &mut self,
        source: &ImageSource,
        rect: Rect,
        content_fit: ContentFit,
        filter: ColorFilter,
        alpha: u8,
    ) {
        self.commands.push(DrawCommand::Icon {
            source: source.clone(),
            rect,
            content_fit,
            filter,
            alpha,
        });
    }
}
