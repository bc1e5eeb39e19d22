//! Icon sources for the switch icon.
//!
//! Supports PNG, JPEG, GIF, WebP raster formats and SVG vector graphics.

use std::path::PathBuf;
use std::sync::Arc;

/// Source for an image - can be a file path or in-memory bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ImageSource {
    /// Raster image from a file path (PNG, JPEG, GIF, WebP)
    Path(PathBuf),
    /// Raster image from in-memory bytes
    Bytes(Arc<[u8]>),
    /// SVG from a file path
    SvgPath(PathBuf),
    /// SVG from in-memory bytes
    SvgBytes(Arc<[u8]>),
}

impl ImageSource {
    /// Check if this is an SVG source
    pub fn is_svg(&self) -> bool {
        matches!(self, ImageSource::SvgPath(_) | ImageSource::SvgBytes(_))
    }
}

impl From<&str> for ImageSource {
    fn from(path: &str) -> Self {
        ImageSource::from(PathBuf::from(path))
    }
}

impl From<String> for ImageSource {
    fn from(path: String) -> Self {
        ImageSource::from(path.as_str())
    }
}

impl From<PathBuf> for ImageSource {
    fn from(path: PathBuf) -> Self {
        if path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
        {
            ImageSource::SvgPath(path)
        } else {
            ImageSource::Path(path)
        }
    }
}

/// How the image content should fit within its bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentFit {
    /// Scale to fit within bounds while preserving aspect ratio, centered.
    #[default]
    Contain,
    /// Stretch to exactly fill bounds, ignoring aspect ratio.
    Fill,
}

impl ContentFit {
    /// Where an image of `intrinsic` size lands inside `bounds`.
    pub fn place(&self, intrinsic: (u32, u32), bounds: super::Rect) -> super::Rect {
        let (w, h) = (intrinsic.0 as f32, intrinsic.1 as f32);
        match self {
            ContentFit::Fill => bounds,
            ContentFit::Contain => {
                if w <= 0.0 || h <= 0.0 {
                    return bounds;
                }
                let scale = (bounds.width / w).min(bounds.height / h);
                let (fit_w, fit_h) = (w * scale, h * scale);
                super::Rect::new(
                    bounds.x + (bounds.width - fit_w) / 2.0,
                    bounds.y + (bounds.height - fit_h) / 2.0,
                    fit_w,
                    fit_h,
                )
            }
        }
    }
}
