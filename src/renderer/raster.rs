//! Software [`Canvas`] backed by a tiny-skia pixmap.

use std::collections::HashMap;

use image::RgbaImage;
use resvg::tiny_skia::{
    FillRule, Mask, Paint, PathBuilder, Pixmap, PixmapPaint, Stroke, Transform,
};

use super::image_pixmap::{load_icon, tint_pixmap, LoadedIcon};
use super::{Canvas, CanvasCapabilities, ClipPath, ColorFilter, DashPaint};
use crate::widgets::image::{ContentFit, ImageSource};
use crate::widgets::{Color, Point, Rect};

/// Rasterizes draw calls into an RGBA pixmap.
///
/// The clip is a coverage mask; `None` means nothing is clipped. Icons are
/// decoded once per source and re-rasterized at the size they are drawn.
pub struct RasterCanvas {
    pixmap: Pixmap,
    clip: Option<Mask>,
    clip_stack: Vec<Option<Mask>>,
    capabilities: CanvasCapabilities,
    /// Decoded icons; `None` records a source that failed to load
    icons: HashMap<ImageSource, Option<LoadedIcon>>,
}

impl RasterCanvas {
    /// Create a transparent canvas. Returns `None` for a zero-sized canvas.
    pub fn new(width: u32, height: u32) -> Option<Self> {
        Some(Self {
            pixmap: Pixmap::new(width, height)?,
            clip: None,
            clip_stack: Vec::new(),
            capabilities: CanvasCapabilities::default(),
            icons: HashMap::new(),
        })
    }

    /// Pretend to be a backend with different clip capabilities.
    pub fn with_capabilities(mut self, capabilities: CanvasCapabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Fill the whole canvas, ignoring the clip.
    pub fn clear(&mut self, color: Color) {
        let [r, g, b, a] = color.to_rgba8();
        self.pixmap
            .fill(resvg::tiny_skia::Color::from_rgba8(r, g, b, a));
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Non-premultiplied RGBA at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let color = self.pixmap.pixel(x, y)?.demultiply();
        Some([color.red(), color.green(), color.blue(), color.alpha()])
    }

    /// Copy the canvas out as a non-premultiplied image.
    pub fn to_rgba_image(&self) -> RgbaImage {
        let mut image = RgbaImage::new(self.pixmap.width(), self.pixmap.height());
        for (dst, src) in image.pixels_mut().zip(self.pixmap.pixels()) {
            let color = src.demultiply();
            dst.0 = [color.red(), color.green(), color.blue(), color.alpha()];
        }
        image
    }

    /// Coverage of `path` as a mask the size of the canvas.
    fn path_coverage(&self, path: &ClipPath) -> Option<Mask> {
        let mut mask = Mask::new(self.pixmap.width(), self.pixmap.height())?;
        let points = path.points();
        let mut builder = PathBuilder::new();
        builder.move_to(points[0].x, points[0].y);
        for point in &points[1..] {
            builder.line_to(point.x, point.y);
        }
        builder.close();
        // A collapsed band has no area and covers nothing
        if let Some(path) = builder.finish() {
            mask.fill_path(&path, FillRule::Winding, true, Transform::identity());
        }
        Some(mask)
    }

    /// Replace the clip with `combine(current, coverage)` per pixel, treating
    /// a missing clip as fully open.
    fn combine_clip(&mut self, path: &ClipPath, combine: impl Fn(u32, u32) -> u32) {
        let Some(mut coverage) = self.path_coverage(path) else {
            return;
        };
        let current = self.clip.take();
        for (i, value) in coverage.data_mut().iter_mut().enumerate() {
            let open = current.as_ref().map_or(255, |mask| mask.data()[i] as u32);
            *value = combine(open, *value as u32).min(255) as u8;
        }
        self.clip = Some(coverage);
    }

    fn icon(&mut self, source: &ImageSource) -> Option<&LoadedIcon> {
        self.icons
            .entry(source.clone())
            .or_insert_with(|| match load_icon(source) {
                Ok(icon) => Some(icon),
                Err(e) => {
                    log::warn!("Failed to load icon {:?}: {}", source, e);
                    None
                }
            })
            .as_ref()
    }
}

impl Canvas for RasterCanvas {
    fn capabilities(&self) -> CanvasCapabilities {
        self.capabilities
    }

    fn save(&mut self) {
        self.clip_stack.push(self.clip.clone());
    }

    fn restore(&mut self) {
        if let Some(clip) = self.clip_stack.pop() {
            self.clip = clip;
        }
    }

    fn draw_line(&mut self, from: Point, to: Point, paint: &DashPaint) {
        if paint.width <= 0.0 {
            return;
        }
        let mut builder = PathBuilder::new();
        builder.move_to(from.x, from.y);
        builder.line_to(to.x, to.y);
        let Some(path) = builder.finish() else {
            return;
        };

        let [r, g, b, a] = paint.color.to_rgba8();
        let mut fill = Paint::default();
        fill.set_color_rgba8(r, g, b, a);
        fill.anti_alias = true;
        let stroke = Stroke {
            width: paint.width,
            ..Stroke::default()
        };
        self.pixmap.stroke_path(
            &path,
            &fill,
            &stroke,
            Transform::identity(),
            self.clip.as_ref(),
        );
    }

    fn clip_out_path(&mut self, path: &ClipPath) {
        self.combine_clip(path, |open, covered| open * (255 - covered) / 255);
    }

    fn clip_path_xor(&mut self, path: &ClipPath) {
        self.combine_clip(path, |open, covered| {
            (open + covered).saturating_sub(2 * open * covered / 255)
        });
    }

    fn draw_icon(
        &mut self,
        source: &ImageSource,
        rect: Rect,
        content_fit: ContentFit,
        filter: ColorFilter,
        alpha: u8,
    ) {
        let Some(icon) = self.icon(source) else {
            return;
        };
        let placed = content_fit.place(icon.size(), rect);
        let width = placed.width.round() as u32;
        let height = placed.height.round() as u32;
        let mut rendered = match icon.render(width, height) {
            Ok(pixmap) => pixmap,
            Err(e) => {
                log::debug!("Skipping icon draw: {}", e);
                return;
            }
        };
        tint_pixmap(&mut rendered, filter.color);

        let paint = PixmapPaint {
            opacity: alpha as f32 / 255.0,
            ..PixmapPaint::default()
        };
        self.pixmap.draw_pixmap(
            placed.x.round() as i32,
            placed.y.round() as i32,
            rendered.as_ref(),
            &paint,
            Transform::identity(),
            self.clip.as_ref(),
        );
    }
}
