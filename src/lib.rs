//! A switch icon widget: an icon that flips between enabled and disabled with
//! an animated strike-through dash, a tint cross-fade and an alpha fade.
//!
//! The crate is host-agnostic. A host reports bounds, forwards pointer
//! events, drives the frame clock through [`Widget::advance_animations`] and
//! paints into any [`Canvas`]. Redraws are requested through a
//! [`FrameScheduler`] the host provides.
//!
//! [`Widget::advance_animations`]: widgets::Widget::advance_animations
//! [`Canvas`]: renderer::Canvas
//! [`FrameScheduler`]: invalidation::FrameScheduler

pub mod animation;
pub mod error;
pub mod invalidation;
pub mod renderer;
pub mod widgets;

pub mod prelude {
    pub use crate::animation::{TimingFunction, Transition};
    pub use crate::error::{ConfigError, IconError, StateError};
    pub use crate::invalidation::{ChangeFlags, FrameRequests, FrameScheduler, RedrawRequest};
    pub use crate::renderer::{Canvas, CanvasCapabilities, DrawCommand, PaintContext, RasterCanvas};
    pub use crate::widgets::{
        Color, ContentFit, Event, EventResponse, ImageSource, InstanceState, MouseButton, Padding,
        Point, Rect, SavedState, Size, SwitchIcon, SwitchIconStyle, Widget,
    };
}
