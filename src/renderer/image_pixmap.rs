//! Decoding icons into tiny-skia pixmaps.

use std::path::Path;

use image::imageops::FilterType;
use image::RgbaImage;
use resvg::tiny_skia::{ColorU8, Pixmap, PremultipliedColorU8, Transform};
use resvg::usvg;

use crate::error::IconError;
use crate::widgets::image::ImageSource;
use crate::widgets::Color;

/// A decoded icon that can be rasterized at any size.
pub enum LoadedIcon {
    Raster(RgbaImage),
    Svg(usvg::Tree),
}

impl LoadedIcon {
    /// Intrinsic size in pixels.
    pub fn size(&self) -> (u32, u32) {
        match self {
            LoadedIcon::Raster(image) => image.dimensions(),
            LoadedIcon::Svg(tree) => {
                let size = tree.size();
                (size.width().ceil() as u32, size.height().ceil() as u32)
            }
        }
    }

    /// Rasterize at exactly `width` x `height`.
    pub fn render(&self, width: u32, height: u32) -> Result<Pixmap, IconError> {
        let mut pixmap = Pixmap::new(width, height).ok_or(IconError::EmptySize(width, height))?;
        match self {
            LoadedIcon::Raster(image) => {
                let scaled = if image.dimensions() == (width, height) {
                    image.clone()
                } else {
                    image::imageops::resize(image, width, height, FilterType::Triangle)
                };
                for (dst, src) in pixmap.pixels_mut().iter_mut().zip(scaled.pixels()) {
                    let [r, g, b, a] = src.0;
                    *dst = ColorU8::from_rgba(r, g, b, a).premultiply();
                }
            }
            LoadedIcon::Svg(tree) => {
                let size = tree.size();
                let transform = Transform::from_scale(
                    width as f32 / size.width(),
                    height as f32 / size.height(),
                );
                resvg::render(tree, transform, &mut pixmap.as_mut());
            }
        }
        Ok(pixmap)
    }
}

/// Decode an icon source.
pub fn load_icon(source: &ImageSource) -> Result<LoadedIcon, IconError> {
    match source {
        ImageSource::Path(path) => Ok(LoadedIcon::Raster(image::open(path)?.to_rgba8())),
        ImageSource::Bytes(bytes) => {
            Ok(LoadedIcon::Raster(image::load_from_memory(bytes)?.to_rgba8()))
        }
        ImageSource::SvgPath(path) => parse_svg(&read_file(path)?),
        ImageSource::SvgBytes(bytes) => parse_svg(bytes),
    }
}

fn read_file(path: &Path) -> Result<Vec<u8>, IconError> {
    std::fs::read(path).map_err(|source| IconError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_svg(bytes: &[u8]) -> Result<LoadedIcon, IconError> {
    let tree = usvg::Tree::from_data(bytes, &usvg::Options::default())
        .map_err(|e| IconError::Svg(e.to_string()))?;
    Ok(LoadedIcon::Svg(tree))
}

/// Apply a SRC_IN color filter: every pixel becomes `color`, scaled by the
/// pixel's own coverage.
pub fn tint_pixmap(pixmap: &mut Pixmap, color: Color) {
    let [r, g, b, a] = color.to_rgba8();
    for pixel in pixmap.pixels_mut() {
        let coverage = pixel.alpha() as u32;
        let alpha = mul_div_255(a as u32, coverage);
        let premultiply = |c: u8| mul_div_255(c as u32, alpha as u32);
        if let Some(tinted) =
            PremultipliedColorU8::from_rgba(premultiply(r), premultiply(g), premultiply(b), alpha)
        {
            *pixel = tinted;
        }
    }
}

fn mul_div_255(a: u32, b: u32) -> u8 {
    ((a * b + 127) / 255) as u8
}
