//! Error types for construction, state restoration and icon loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building a [`SwitchIconStyle`](crate::widgets::SwitchIconStyle)
/// or constructing a widget from it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Wrong value for si_disabled_alpha [{0}]. Must be value from range [0, 1]")]
    DisabledAlphaOutOfRange(f32),
    #[error("Invalid value for attribute {name}: {value:?}")]
    InvalidAttribute { name: String, value: String },
}

/// Errors raised while decoding a persisted [`SavedState`](crate::widgets::SavedState).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    #[error("Saved state truncated: needed {needed} bytes, got {available}")]
    Truncated { needed: usize, available: usize },
    #[error("Saved state has invalid enabled flag {0}")]
    InvalidFlag(i32),
}

/// Errors raised while loading an icon for rasterization.
#[derive(Error, Debug)]
pub enum IconError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("SVG error: {0}")]
    Svg(String),
    #[error("Icon has empty size {0}x{1}")]
    EmptySize(u32, u32),
}
